#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dialog {
    pub content: String,
    pub kind: DialogKind,
    pub scroll: u16,
    pub title: String,
}

impl Dialog {
    pub fn info(title: &str, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: DialogKind::Information,
            scroll: 0,
            title: title.to_string(),
        }
    }

    pub fn warning(title: &str, content: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Warning,
            ..Self::info(title, content)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DialogKind {
    Information,
    Warning,
}
