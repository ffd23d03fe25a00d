// Immutable action -> key tables

use super::action::{Action, DeviceFamily, Key};
use enum_map::EnumMap;

/// Errors produced while building a keymap
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    #[error("Action {action:?} is bound twice ({first:?} and {second:?})")]
    DuplicateAction { action: Action, first: Key, second: Key },

    #[error("Keymap mixes device families: {expected:?} and {actual:?} ({key:?})")]
    MixedFamilies {
        expected: DeviceFamily,
        actual: DeviceFamily,
        key: Key,
    },
}

/// Mapping from actions to the keys that trigger them on one device family
///
/// A keymap is built once and never changes. Handlers share it through an
/// `Arc`. Actions missing from the table are unbound and never fire.
#[derive(Debug, Clone, PartialEq)]
pub struct Keymap {
    bindings: EnumMap<Action, Option<Key>>,
    family: Option<DeviceFamily>,
}

impl Keymap {
    /// Build a keymap from `(action, key)` pairs
    ///
    /// # Panics
    ///
    /// Panics when an action appears twice or when keys of different device
    /// families are mixed. Keymaps are startup configuration, so a broken
    /// table is a bug in the game, not a runtime condition.
    pub fn new(bindings: impl IntoIterator<Item = (Action, Key)>) -> Self {
        match Self::try_new(bindings) {
            Ok(keymap) => keymap,
            Err(err) => panic!("invalid keymap: {err}"),
        }
    }

    /// Build a keymap, rejecting duplicate actions and mixed device families
    pub fn try_new(
        bindings: impl IntoIterator<Item = (Action, Key)>,
    ) -> Result<Self, KeymapError> {
        let mut keymap = Self {
            bindings: EnumMap::default(),
            family: None,
        };

        for (action, key) in bindings {
            if let Some(expected) = keymap.family {
                if expected != key.family() {
                    return Err(KeymapError::MixedFamilies {
                        expected,
                        actual: key.family(),
                        key,
                    });
                }
            }
            if let Some(first) = keymap.bindings[action] {
                return Err(KeymapError::DuplicateAction {
                    action,
                    first,
                    second: key,
                });
            }

            keymap.family = Some(key.family());
            keymap.bindings[action] = Some(key);
        }

        Ok(keymap)
    }

    /// Get the key bound to an action
    pub fn key(&self, action: Action) -> Option<Key> {
        self.bindings[action]
    }

    /// Check if an action has a binding
    pub fn is_bound(&self, action: Action) -> bool {
        self.bindings[action].is_some()
    }

    /// All bindings, in action order
    pub fn bindings(&self) -> impl Iterator<Item = (Action, Key)> + '_ {
        self.bindings
            .iter()
            .filter_map(|(action, key)| key.map(|key| (action, key)))
    }

    /// Device family of the bound keys, `None` for an empty keymap
    pub fn family(&self) -> Option<DeviceFamily> {
        self.family
    }

    /// Number of bound actions
    pub fn len(&self) -> usize {
        self.bindings().count()
    }

    pub fn is_empty(&self) -> bool {
        self.family.is_none()
    }
}
