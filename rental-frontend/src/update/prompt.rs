use rental_keymap::message::TextModification;

use crate::model::Model;

pub fn modify(model: &mut Model, modification: &TextModification) {
    let prompt = match &mut model.prompt {
        Some(it) => it,
        None => {
            tracing::trace!("no prompt open, skipping modification {:?}", modification);
            return;
        }
    };

    match modification {
        TextModification::DeleteCharBeforeCursor => {
            prompt.input.pop();
        }
        TextModification::Insert(text) => prompt.input.push_str(text),
    }
}

#[cfg(test)]
mod test {
    use rental_keymap::message::TextModification;
    use rental_tracker::ItemType;

    use crate::model::{Model, Prompt};

    use super::modify;

    #[test]
    fn insert_and_delete() {
        let mut model = Model::default();
        model.prompt = Some(Prompt {
            input: String::new(),
            label: String::new(),
            pending: model.tracker.begin_rent(ItemType::Ps3),
            title: String::new(),
        });

        modify(&mut model, &TextModification::Insert("Bo".to_string()));
        modify(&mut model, &TextModification::Insert("b".to_string()));
        modify(&mut model, &TextModification::DeleteCharBeforeCursor);

        assert_eq!(Some("Bo"), model.prompt.as_ref().map(|p| p.input.as_str()));
    }

    #[test]
    fn delete_on_empty_input() {
        let mut model = Model::default();
        model.prompt = Some(Prompt {
            input: String::new(),
            label: String::new(),
            pending: model.tracker.begin_rent(ItemType::Ps3),
            title: String::new(),
        });

        modify(&mut model, &TextModification::DeleteCharBeforeCursor);

        assert_eq!(Some(""), model.prompt.as_ref().map(|p| p.input.as_str()));
    }
}
