use rental_keymap::message::Mode;

use crate::{error::AppError, event::Emitter, terminal::TerminalWrapper};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ModeChanged(Mode),
    Quit,
    Resize(u16, u16),
}

#[derive(Debug, PartialEq)]
pub enum ActionResult {
    Normal,
    Quit,
}

/// Runs actions that must land before the next render and returns the rest.
pub fn exec_preview(
    terminal: &mut TerminalWrapper,
    actions: Vec<Action>,
) -> Result<Vec<Action>, AppError> {
    let mut remaining = Vec::new();
    for action in actions {
        match action {
            Action::Resize(x, y) => terminal.resize(x, y)?,
            Action::ModeChanged(_) | Action::Quit => remaining.push(action),
        }
    }
    Ok(remaining)
}

pub async fn exec_postview(emitter: &mut Emitter, actions: Vec<Action>) -> ActionResult {
    let mut result = ActionResult::Normal;
    for action in actions {
        match action {
            Action::ModeChanged(mode) => emitter.set_current_mode(mode).await,
            Action::Quit => result = ActionResult::Quit,
            Action::Resize(_, _) => {
                tracing::warn!("resize action reached post render stage")
            }
        }
    }
    result
}
