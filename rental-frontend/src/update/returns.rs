use rental_keymap::message::{Mode, PrintContent};
use rental_tracker::{ItemType, ReturnOutcome};

use crate::{
    action::Action,
    model::{dialog::Dialog, Model},
};

use super::{commandline, dialog};

pub fn by_type(model: &mut Model, item: ItemType) -> Vec<Action> {
    if model.mode != Mode::Normal {
        tracing::warn!("return of {} skipped in mode {}", item, model.mode);
        return Vec::new();
    }

    match model.tracker.return_by_type(item) {
        Ok(outcome) => {
            commandline::print(
                model,
                &[PrintContent::Information(format!("{} returned", item))],
            );
            dialog::show(model, outcome_dialogs(&outcome))
        }
        Err(error) => {
            commandline::print(model, &[PrintContent::Error(error.to_string())]);
            Vec::new()
        }
    }
}

/// Dialogs in display order for a finished return.
pub fn outcome_dialogs(outcome: &ReturnOutcome) -> Vec<Dialog> {
    let mut dialogs = Vec::new();
    if let Some(next) = &outcome.next_in_line {
        dialogs.push(Dialog::info(
            "Waiting List",
            format!("Next in line for {}: {}", next.item, next.customer),
        ));
    }

    if let Some(customer) = &outcome.customer {
        dialogs.push(Dialog::info(
            "Return Successful",
            format!("{} returned by {}", outcome.item, customer),
        ));
    }

    dialogs
}

#[cfg(test)]
mod test {
    use rental_keymap::message::{Mode, PrintContent};
    use rental_tracker::{ItemType, ReturnPolicy, Stock};

    use crate::{action::Action, model::Model, settings::Settings};

    use super::by_type;

    fn permissive_model() -> Model {
        Model::new(&Settings {
            return_policy: ReturnPolicy::Permissive,
            stock: Stock::default(),
        })
    }

    #[test]
    fn return_without_waiting_list_prints_only() {
        let mut model = permissive_model();
        let _ = model.tracker.rent(ItemType::Ps3, Some("Alice"));

        let actions = by_type(&mut model, ItemType::Ps3);

        assert!(actions.is_empty());
        assert!(model.dialogs.is_empty());
        assert_eq!(
            vec![PrintContent::Information("PS3 returned".to_string())],
            model.commandline.content
        );
    }

    #[test]
    fn return_reports_next_in_line_of_other_type() {
        let mut model = permissive_model();
        for name in ["Alice", "Bob", "Carol"] {
            let _ = model.tracker.rent(ItemType::PsVr, Some(name));
        }
        let _ = model.tracker.rent(ItemType::Ps4, Some("Dave"));

        let actions = by_type(&mut model, ItemType::Ps4);

        assert_eq!(vec![Action::ModeChanged(Mode::Message)], actions);
        assert_eq!("Next in line for PS VR: Carol", model.dialogs[0].content);
    }

    #[test]
    fn capped_return_of_rented_unit_prints_error() {
        let mut model = Model::default();
        let _ = model.tracker.rent(ItemType::Ps5, Some("Alice"));

        let actions = by_type(&mut model, ItemType::Ps5);

        assert!(actions.is_empty());
        assert_eq!(1, model.tracker.available(ItemType::Ps5));
        assert_eq!(
            vec![PrintContent::Error(
                "All PS5 units are in stock or rented out".to_string()
            )],
            model.commandline.content
        );
    }
}
