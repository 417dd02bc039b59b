use std::collections::HashMap;

use rental_tracker::ItemType;

use crate::{
    conversion,
    key::Key,
    message::{BindingKind, CursorDirection, KeymapMessage, Mode, TextModification},
    tree::KeyTree,
};

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Mode, Vec<(Vec<Key>, BindingKind)>>,
}

impl KeyMap {
    pub fn into_tree(self) -> KeyTree {
        let mut tree = KeyTree::default();
        for (mode, mappings) in self.mappings {
            for (keys, binding) in mappings {
                if let Err(error) = tree.add_mapping(&mode, &keys, binding) {
                    tracing::warn!("skipping mapping {:?}: {}", keys, error);
                }
            }
        }
        tree
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut mappings = HashMap::new();

        let normal = vec![
            ("s", message(KeymapMessage::OpenReturnSelection)),
            ("w", message(KeymapMessage::ShowWaitingList)),
            ("h", message(KeymapMessage::ShowHistory)),
            ("q", message(KeymapMessage::Quit)),
            ("<C-c>", message(KeymapMessage::Quit)),
        ];

        let item_bindings: Vec<_> = ItemType::ALL
            .iter()
            .enumerate()
            .flat_map(|(index, item)| {
                let number = index + 1;
                vec![
                    (format!("r{}", number), message(KeymapMessage::Rent(*item))),
                    (format!("d{}", number), message(KeymapMessage::ReturnByType(*item))),
                ]
            })
            .collect();

        add_mapping(&mut mappings, Mode::Normal, normal);
        add_mapping(
            &mut mappings,
            Mode::Normal,
            item_bindings.iter().map(|(keys, binding)| (keys.as_str(), binding.clone())),
        );

        add_mapping(
            &mut mappings,
            Mode::Prompt,
            vec![
                ("<cr>", message(KeymapMessage::SubmitPrompt)),
                ("<esc>", message(KeymapMessage::CancelPrompt)),
                (
                    "<bs>",
                    BindingKind::Modification(TextModification::DeleteCharBeforeCursor),
                ),
            ],
        );

        add_mapping(
            &mut mappings,
            Mode::Select,
            vec![
                ("j", message(KeymapMessage::MoveCursor(CursorDirection::Down))),
                ("<down>", message(KeymapMessage::MoveCursor(CursorDirection::Down))),
                ("k", message(KeymapMessage::MoveCursor(CursorDirection::Up))),
                ("<up>", message(KeymapMessage::MoveCursor(CursorDirection::Up))),
                ("<cr>", message(KeymapMessage::ConfirmSelection)),
                ("<esc>", message(KeymapMessage::LeaveSelection)),
                ("q", message(KeymapMessage::LeaveSelection)),
            ],
        );

        add_mapping(
            &mut mappings,
            Mode::Message,
            vec![
                ("j", message(KeymapMessage::MoveCursor(CursorDirection::Down))),
                ("<down>", message(KeymapMessage::MoveCursor(CursorDirection::Down))),
                ("k", message(KeymapMessage::MoveCursor(CursorDirection::Up))),
                ("<up>", message(KeymapMessage::MoveCursor(CursorDirection::Up))),
                ("<cr>", message(KeymapMessage::DismissDialog)),
                ("<esc>", message(KeymapMessage::DismissDialog)),
                ("q", message(KeymapMessage::DismissDialog)),
            ],
        );

        Self { mappings }
    }
}

fn message(msg: KeymapMessage) -> BindingKind {
    BindingKind::Message(msg)
}

fn add_mapping<'a>(
    mappings: &mut HashMap<Mode, Vec<(Vec<Key>, BindingKind)>>,
    mode: Mode,
    bindings: impl IntoIterator<Item = (&'a str, BindingKind)>,
) {
    let entries = mappings.entry(mode).or_default();
    for (keycodes, binding) in bindings {
        let keys: Vec<_> = conversion::from_keycode_string(keycodes).into_iter().collect();
        entries.push((keys, binding));
    }
}
