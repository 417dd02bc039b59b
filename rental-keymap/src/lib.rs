use buffer::KeyBuffer;
use key::{Key, KeyCode};
use map::KeyMap;
use message::{BindingKind, KeySequence, KeymapMessage, Mode, TextModification};
use tree::KeyTree;

mod buffer;
pub mod conversion;
pub mod key;
mod map;
pub mod message;
mod tree;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyMapError {
    #[error("Key sequence is incomplete.")]
    KeySequenceIncomplete,
    #[error("Mapping conflicts with an existing binding in mode {0}.")]
    MappingConflict(String),
    #[error("Failed to resolve mode {0}.")]
    ModeUnresolvable(String),
    #[error("Failed to resolve valid binding.")]
    NoValidBindingFound,
}

pub struct MessageResolver {
    buffer: KeyBuffer,
    pub mode: Mode,
    tree: KeyTree,
}

impl Default for MessageResolver {
    fn default() -> Self {
        Self {
            buffer: KeyBuffer::default(),
            mode: Mode::default(),
            tree: KeyMap::default().into_tree(),
        }
    }
}

impl MessageResolver {
    pub fn add_key(&mut self, key: Key) -> (Vec<KeymapMessage>, KeySequence) {
        if key.code == KeyCode::Esc && !self.buffer.is_empty() {
            let sequence = format!("{}{}", self.buffer.to_keycode_string(), key.to_keycode_string());
            self.buffer.clear();
            return (Vec::new(), KeySequence::Completed(sequence));
        }

        self.buffer.add_key(key);

        let keys = self.buffer.get_keys();
        let sequence = self.buffer.to_keycode_string();
        tracing::trace!("resolving keys in mode {}: {}", self.mode, self.buffer);

        match self.tree.get_binding(&self.mode, &keys) {
            Ok(binding) => {
                self.buffer.clear();
                (get_messages_from_binding(binding), KeySequence::Completed(sequence))
            }
            Err(KeyMapError::KeySequenceIncomplete) => (Vec::new(), KeySequence::Changed(sequence)),
            Err(error) => {
                let messages = match (get_passthrough_by_mode(&self.mode), self.buffer.to_text()) {
                    (true, Some(text)) => vec![KeymapMessage::Modification(
                        TextModification::Insert(text),
                    )],
                    _ => {
                        tracing::trace!("no binding for {}: {}", sequence, error);
                        Vec::new()
                    }
                };

                self.buffer.clear();
                (messages, KeySequence::Completed(sequence))
            }
        }
    }
}

fn get_messages_from_binding(binding: BindingKind) -> Vec<KeymapMessage> {
    match binding {
        BindingKind::Message(msg) => vec![msg],
        BindingKind::Modification(mdf) => vec![KeymapMessage::Modification(mdf)],
    }
}

fn get_passthrough_by_mode(mode: &Mode) -> bool {
    match mode {
        Mode::Prompt => true,
        Mode::Message | Mode::Normal | Mode::Select => false,
    }
}
