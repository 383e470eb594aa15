use serde::{Deserialize, Serialize};

/// Modifier-Tasten, die den Grab-Modus steuern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKey {
    /// Anheben (SHIFT) → Zylinder-Modus
    Lift,
    /// Drehen (CONTROL) → Rotate-Modus
    Rotate,
}

/// Gedrückte Modifier. Beide dürfen gleichzeitig aktiv sein.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub lift: bool,
    pub rotate: bool,
}

impl Modifiers {
    pub fn set(&mut self, key: ModifierKey, pressed: bool) {
        match key {
            ModifierKey::Lift => self.lift = pressed,
            ModifierKey::Rotate => self.rotate = pressed,
        }
    }
}

/// Freiheitsgrade des Grab-Ziels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrabMode {
    /// Horizontale Ebene durch den Grab-Punkt (Standard)
    #[default]
    Planar,
    /// Kamera-zugewandte Ebene im festen XZ-Abstand (Anheben)
    VerticalCylinder,
    /// Orientierung statt Position
    Rotate,
}

impl GrabMode {
    /// Priorität: Rotate > VerticalCylinder > Planar.
    pub fn from_modifiers(modifiers: &Modifiers) -> Self {
        if modifiers.rotate {
            GrabMode::Rotate
        } else if modifiers.lift {
            GrabMode::VerticalCylinder
        } else {
            GrabMode::Planar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_priority() {
        let both = Modifiers {
            lift: true,
            rotate: true,
        };
        assert_eq!(GrabMode::from_modifiers(&both), GrabMode::Rotate);

        let lift = Modifiers {
            lift: true,
            rotate: false,
        };
        assert_eq!(GrabMode::from_modifiers(&lift), GrabMode::VerticalCylinder);

        assert_eq!(GrabMode::from_modifiers(&Modifiers::default()), GrabMode::Planar);
    }

    #[test]
    fn test_set_modifier_is_independent() {
        let mut modifiers = Modifiers::default();
        modifiers.set(ModifierKey::Rotate, true);
        modifiers.set(ModifierKey::Lift, true);
        modifiers.set(ModifierKey::Rotate, false);
        assert!(modifiers.lift);
        assert!(!modifiers.rotate);
    }
}
