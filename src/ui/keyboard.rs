//! Tasten-Mapping für die Grab-Modifier.
//!
//! Der Host liefert Tasten als Text (`"SHIFT"`, `"CONTROL"`, `"a"`, …);
//! nur die beiden Modifier sind für das Greifen relevant.

use crate::app::ModifierKey;

/// Tastentext des Anheben-Modifiers.
pub const LIFT_KEY_TEXT: &str = "SHIFT";
/// Tastentext des Drehen-Modifiers.
pub const ROTATE_KEY_TEXT: &str = "CONTROL";

/// Mappt einen Tastentext auf einen Grab-Modifier.
pub(super) fn modifier_for_key_text(text: &str) -> Option<ModifierKey> {
    match text {
        LIFT_KEY_TEXT => Some(ModifierKey::Lift),
        ROTATE_KEY_TEXT => Some(ModifierKey::Rotate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_keys() {
        assert_eq!(modifier_for_key_text("SHIFT"), Some(ModifierKey::Lift));
        assert_eq!(modifier_for_key_text("CONTROL"), Some(ModifierKey::Rotate));
        assert_eq!(modifier_for_key_text("shift"), None);
        assert_eq!(modifier_for_key_text("A"), None);
    }
}
