use std::fmt::Display;

use rental_tracker::ItemType;

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    Message,
    #[default]
    Normal,
    Prompt,
    Select,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Message => write!(f, "message"),
            Mode::Normal => write!(f, "normal"),
            Mode::Prompt => write!(f, "prompt"),
            Mode::Select => write!(f, "select"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BindingKind {
    Message(KeymapMessage),
    Modification(TextModification),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySequence {
    Completed(String),
    Changed(String),
    None,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeymapMessage {
    CancelPrompt,
    ConfirmSelection,
    DismissDialog,
    LeaveSelection,
    Modification(TextModification),
    MoveCursor(CursorDirection),
    OpenReturnSelection,
    Print(Vec<PrintContent>),
    Quit,
    Rent(ItemType),
    ReturnByType(ItemType),
    ShowHistory,
    ShowWaitingList,
    SubmitPrompt,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CursorDirection {
    Down,
    Up,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TextModification {
    DeleteCharBeforeCursor,
    Insert(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PrintContent {
    Error(String),
    Default(String),
    Information(String),
}
