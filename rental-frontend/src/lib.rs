use action::ActionResult;
use error::AppError;
use event::{Emitter, Message};
use model::Model;
use rental_keymap::message::{KeymapMessage, PrintContent};
use settings::Settings;
use terminal::TerminalWrapper;
use view::render_model;

mod action;
pub mod error;
mod event;
mod layout;
mod model;
pub mod settings;
mod terminal;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let mut terminal = TerminalWrapper::start()?;
    let mut emitter = Emitter::start();

    let mut model = Model::new(&settings);
    tracing::debug!("starting with model state: {:?}", model);

    let mut result = Vec::new();
    let hint = emitter
        .emit(vec![Message::Keymap(KeymapMessage::Print(vec![
            PrintContent::Default("r<n> rent, d<n> return, s return specific, q quit".to_string()),
        ]))])
        .await;

    if let Err(error) = hint {
        result.push(error);
    }

    while result.is_empty() {
        let envelope = match emitter.receiver.recv().await {
            Some(it) => it,
            None => break,
        };

        tracing::debug!(
            "received messages from {:?}: {:?}",
            envelope.source,
            envelope.messages
        );

        let actions = update::update(&mut model, &envelope);

        let remaining = match action::exec_preview(&mut terminal, actions) {
            Ok(it) => it,
            Err(error) => {
                result.push(error);
                break;
            }
        };

        if let Err(error) = render_model(&mut terminal, &model) {
            result.push(error);
            break;
        }

        if action::exec_postview(&mut emitter, remaining).await == ActionResult::Quit {
            break;
        }
    }

    if let Err(error) = emitter.shutdown().await {
        result.push(error);
    }

    if let Err(error) = terminal.shutdown() {
        result.push(error);
    }

    tracing::debug!(
        "closing with {} active rentals and {} waiting",
        model.tracker.active_records().count(),
        model.tracker.waiting_list().len()
    );

    if result.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(result))
    }
}
