use std::{collections::HashMap, slice::Iter};

use crate::{
    key::Key,
    message::{BindingKind, Mode},
    KeyMapError,
};

#[derive(Debug, Default)]
pub struct KeyTree {
    modes: HashMap<Mode, Node>,
}

#[derive(Clone, Debug)]
pub enum Node {
    Binding(BindingKind),
    Key(HashMap<Key, Node>),
}

impl KeyTree {
    pub fn add_mapping(
        &mut self,
        mode: &Mode,
        keys: &[Key],
        binding: BindingKind,
    ) -> Result<(), KeyMapError> {
        if keys.is_empty() {
            return Err(KeyMapError::MappingConflict(mode.to_string()));
        }

        let node = self
            .modes
            .entry(mode.clone())
            .or_insert_with(|| Node::Key(HashMap::new()));

        add_mapping_node(node, &mut keys.iter(), binding, mode)
    }

    pub fn get_binding(&self, mode: &Mode, keys: &[Key]) -> Result<BindingKind, KeyMapError> {
        match self.modes.get(mode) {
            Some(node) => get_binding_from_node(node, &mut keys.iter()),
            None => Err(KeyMapError::ModeUnresolvable(mode.to_string())),
        }
    }
}

fn add_mapping_node(
    node: &mut Node,
    iter: &mut Iter<'_, Key>,
    binding: BindingKind,
    mode: &Mode,
) -> Result<(), KeyMapError> {
    let map = match node {
        Node::Key(map) => map,
        Node::Binding(_) => return Err(KeyMapError::MappingConflict(mode.to_string())),
    };

    let key = match iter.next() {
        Some(it) => it,
        None => return Err(KeyMapError::MappingConflict(mode.to_string())),
    };

    if iter.len() == 0 {
        if map.contains_key(key) {
            return Err(KeyMapError::MappingConflict(mode.to_string()));
        }

        map.insert(key.clone(), Node::Binding(binding));
        return Ok(());
    }

    let next = map
        .entry(key.clone())
        .or_insert_with(|| Node::Key(HashMap::new()));

    add_mapping_node(next, iter, binding, mode)
}

fn get_binding_from_node(node: &Node, iter: &mut Iter<'_, Key>) -> Result<BindingKind, KeyMapError> {
    match node {
        Node::Binding(binding) => {
            if iter.len() == 0 {
                Ok(binding.clone())
            } else {
                Err(KeyMapError::NoValidBindingFound)
            }
        }
        Node::Key(map) => match iter.next() {
            Some(key) => match map.get(key) {
                Some(next) => get_binding_from_node(next, iter),
                None => Err(KeyMapError::NoValidBindingFound),
            },
            None => Err(KeyMapError::KeySequenceIncomplete),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        key::{Key, KeyCode},
        message::{BindingKind, KeymapMessage, Mode},
        KeyMapError,
    };

    use super::KeyTree;

    fn keys(chars: &str) -> Vec<Key> {
        chars
            .chars()
            .map(|c| Key::new(KeyCode::from_char(c), vec![]))
            .collect()
    }

    #[test]
    fn resolves_nested_binding() {
        let mut tree = KeyTree::default();
        let binding = BindingKind::Message(KeymapMessage::ShowHistory);
        assert!(tree.add_mapping(&Mode::Normal, &keys("gh"), binding.clone()).is_ok());

        assert_eq!(Ok(binding), tree.get_binding(&Mode::Normal, &keys("gh")));
        assert_eq!(
            Err(KeyMapError::KeySequenceIncomplete),
            tree.get_binding(&Mode::Normal, &keys("g"))
        );
        assert_eq!(
            Err(KeyMapError::NoValidBindingFound),
            tree.get_binding(&Mode::Normal, &keys("gx"))
        );
    }

    #[test]
    fn rejects_prefix_conflicts() {
        let mut tree = KeyTree::default();
        let binding = BindingKind::Message(KeymapMessage::Quit);
        assert!(tree.add_mapping(&Mode::Normal, &keys("g"), binding.clone()).is_ok());

        assert!(tree.add_mapping(&Mode::Normal, &keys("gh"), binding.clone()).is_err());
        assert!(tree.add_mapping(&Mode::Normal, &keys("g"), binding).is_err());
    }

    #[test]
    fn unknown_mode() {
        let tree = KeyTree::default();
        assert_eq!(
            Err(KeyMapError::ModeUnresolvable("select".to_string())),
            tree.get_binding(&Mode::Select, &keys("j"))
        );
    }
}
