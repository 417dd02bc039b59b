use rental_keymap::{
    key::{Key, KeyCode, KeyModifier},
    message::{CursorDirection, KeySequence, KeymapMessage, Mode, TextModification},
    MessageResolver,
};
use rental_tracker::ItemType;

fn char_key(c: char) -> Key {
    Key::new(KeyCode::from_char(c), vec![])
}

#[test]
fn add_and_resolve_key_normal_r() {
    let mut resolver = MessageResolver::default();
    let result = resolver.add_key(char_key('r'));

    assert_eq!(KeySequence::Changed("r".to_string()), result.1);
    assert!(result.0.is_empty());
}

#[test]
fn add_and_resolve_key_normal_r3() {
    let mut resolver = MessageResolver::default();
    let _ = resolver.add_key(char_key('r'));
    let result = resolver.add_key(char_key('3'));

    assert_eq!(vec![KeymapMessage::Rent(ItemType::Ps5)], result.0);
    assert_eq!(KeySequence::Completed("r3".to_string()), result.1);
}

#[test]
fn add_and_resolve_key_normal_d4() {
    let mut resolver = MessageResolver::default();
    let _ = resolver.add_key(char_key('d'));
    let result = resolver.add_key(char_key('4'));

    assert_eq!(vec![KeymapMessage::ReturnByType(ItemType::PsVr)], result.0);
}

#[test]
fn add_and_resolve_key_normal_r9_is_dropped() {
    let mut resolver = MessageResolver::default();
    let _ = resolver.add_key(char_key('r'));
    let result = resolver.add_key(char_key('9'));

    assert!(result.0.is_empty());
    assert_eq!(KeySequence::Completed("r9".to_string()), result.1);

    let result = resolver.add_key(char_key('w'));
    assert_eq!(vec![KeymapMessage::ShowWaitingList], result.0);
}

#[test]
fn add_and_resolve_key_normal_esc_clears_pending_sequence() {
    let mut resolver = MessageResolver::default();
    let _ = resolver.add_key(char_key('r'));
    let result = resolver.add_key(Key::new(KeyCode::Esc, vec![]));

    assert!(result.0.is_empty());
    assert_eq!(KeySequence::Completed("r<esc>".to_string()), result.1);

    let result = resolver.add_key(char_key('1'));
    assert!(result.0.is_empty());
}

#[test]
fn add_and_resolve_key_normal_ctrl_c() {
    let mut resolver = MessageResolver::default();
    let result = resolver.add_key(Key::new(KeyCode::Char('c'), vec![KeyModifier::Ctrl]));

    assert_eq!(vec![KeymapMessage::Quit], result.0);
}

#[test]
fn add_and_resolve_key_prompt_passthrough() {
    let mut resolver = MessageResolver::default();
    resolver.mode = Mode::Prompt;

    let result = resolver.add_key(Key::new(KeyCode::Char('a'), vec![KeyModifier::Shift]));
    assert_eq!(
        vec![KeymapMessage::Modification(TextModification::Insert(
            "A".to_string()
        ))],
        result.0
    );

    let result = resolver.add_key(char_key('r'));
    assert_eq!(
        vec![KeymapMessage::Modification(TextModification::Insert(
            "r".to_string()
        ))],
        result.0
    );
}

#[test]
fn add_and_resolve_key_prompt_controls() {
    let mut resolver = MessageResolver::default();
    resolver.mode = Mode::Prompt;

    let result = resolver.add_key(Key::new(KeyCode::Backspace, vec![]));
    assert_eq!(
        vec![KeymapMessage::Modification(
            TextModification::DeleteCharBeforeCursor
        )],
        result.0
    );

    let result = resolver.add_key(Key::new(KeyCode::Enter, vec![]));
    assert_eq!(vec![KeymapMessage::SubmitPrompt], result.0);

    let result = resolver.add_key(Key::new(KeyCode::Esc, vec![]));
    assert_eq!(vec![KeymapMessage::CancelPrompt], result.0);
}

#[test]
fn add_and_resolve_key_prompt_ignores_unprintable() {
    let mut resolver = MessageResolver::default();
    resolver.mode = Mode::Prompt;

    let result = resolver.add_key(Key::new(KeyCode::Tab, vec![]));
    assert!(result.0.is_empty());
}

#[test]
fn add_and_resolve_key_select() {
    let mut resolver = MessageResolver::default();
    resolver.mode = Mode::Select;

    let result = resolver.add_key(char_key('j'));
    assert_eq!(
        vec![KeymapMessage::MoveCursor(CursorDirection::Down)],
        result.0
    );

    let result = resolver.add_key(Key::new(KeyCode::Up, vec![]));
    assert_eq!(vec![KeymapMessage::MoveCursor(CursorDirection::Up)], result.0);

    let result = resolver.add_key(Key::new(KeyCode::Enter, vec![]));
    assert_eq!(vec![KeymapMessage::ConfirmSelection], result.0);

    let result = resolver.add_key(char_key('r'));
    assert!(result.0.is_empty());
}

#[test]
fn add_and_resolve_key_message() {
    let mut resolver = MessageResolver::default();
    resolver.mode = Mode::Message;

    let result = resolver.add_key(Key::new(KeyCode::Esc, vec![]));
    assert_eq!(vec![KeymapMessage::DismissDialog], result.0);

    let result = resolver.add_key(char_key('k'));
    assert_eq!(vec![KeymapMessage::MoveCursor(CursorDirection::Up)], result.0);
}
