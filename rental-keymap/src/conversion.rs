use std::collections::VecDeque;

use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::key::{Key, KeyCode, KeyModifier};

pub fn from_keycode_string(keycodes: &str) -> VecDeque<Key> {
    let mut keys = VecDeque::new();

    let regex = regex::Regex::new(r"<[^>]*>|.").expect("Failed to compile regex");
    for capture in regex.find_iter(keycodes).map(|m| m.as_str()) {
        if let Some(key) = Key::from_keycode_string(capture) {
            keys.push_back(key);
        }
    }

    keys
}

pub fn to_key(event: &KeyEvent) -> Option<Key> {
    let mut modifiers: Vec<_> = event
        .modifiers
        .iter_names()
        .flat_map(|(s, _)| to_modifier(s))
        .collect();

    match event.code {
        event::KeyCode::Backspace => resolve(event.kind, KeyCode::Backspace, modifiers),
        event::KeyCode::Enter => resolve(event.kind, KeyCode::Enter, modifiers),
        event::KeyCode::Left => resolve(event.kind, KeyCode::Left, modifiers),
        event::KeyCode::Right => resolve(event.kind, KeyCode::Right, modifiers),
        event::KeyCode::Up => resolve(event.kind, KeyCode::Up, modifiers),
        event::KeyCode::Down => resolve(event.kind, KeyCode::Down, modifiers),
        event::KeyCode::Tab => resolve(event.kind, KeyCode::Tab, modifiers),
        event::KeyCode::Delete => resolve(event.kind, KeyCode::Delete, modifiers),
        event::KeyCode::Char(c) => {
            // some terminals report uppercase characters without the shift flag
            if c.is_uppercase() && !modifiers.contains(&KeyModifier::Shift) {
                modifiers.push(KeyModifier::Shift);
            }
            resolve(event.kind, KeyCode::from_char(c), modifiers)
        }
        event::KeyCode::Esc => resolve(event.kind, KeyCode::Esc, modifiers),
        _ => None,
    }
}

fn resolve(kind: KeyEventKind, code: KeyCode, modifiers: Vec<KeyModifier>) -> Option<Key> {
    if kind != KeyEventKind::Press {
        return None;
    }

    Some(Key::new(code, modifiers))
}

fn to_modifier(modifier: &str) -> Option<KeyModifier> {
    match modifier {
        "ALT" | "META" => Some(KeyModifier::Alt),
        "CONTROL" => Some(KeyModifier::Ctrl),
        "SHIFT" => Some(KeyModifier::Shift),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;

    #[test]
    fn from_keycode_string_empty() {
        assert!(from_keycode_string("").is_empty());
    }

    #[test]
    fn from_keycode_string_sequence() {
        let keys = from_keycode_string("r4<cr>");
        let expected: VecDeque<_> = vec![
            Key::new(KeyCode::Char('r'), vec![]),
            Key::new(KeyCode::Char('4'), vec![]),
            Key::new(KeyCode::Enter, vec![]),
        ]
        .into();

        assert_eq!(expected, keys);
    }

    #[test]
    fn from_keycode_string_invalid() {
        assert!(from_keycode_string("<Invalid>").is_empty());
    }

    #[test]
    fn to_key_uppercase_without_shift_flag() {
        let event = KeyEvent {
            code: event::KeyCode::Char('B'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };

        assert_eq!(
            Some(Key::new(KeyCode::Char('b'), vec![KeyModifier::Shift])),
            to_key(&event)
        );
    }

    #[test]
    fn to_key_ignores_release() {
        let event = KeyEvent {
            code: event::KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(None, to_key(&event));
    }
}
