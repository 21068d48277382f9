// src/persona/mod.rs
// Patient persona registry - maps a persona key to the fixed system
// instruction that seeds every conversation for that persona.

mod prompts;

use serde::{Deserialize, Serialize};

/// Closed set of simulated patients. Unrecognized keys fall back to the
/// default persona rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    #[default]
    Easy,
    Hard,
}

impl Persona {
    /// Resolve a client-supplied key. No error path: unknown keys
    /// degrade gracefully to the default.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "hard" => Self::Hard,
            _ => Self::Easy,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }

    /// Display label used by the client transcript header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy Mode",
            Self::Hard => "Hard Mode",
        }
    }

    /// The immutable system instruction for this persona.
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Easy => prompts::EASY_PATIENT_PROMPT,
            Self::Hard => prompts::HARD_PATIENT_PROMPT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(Persona::from_key("easy"), Persona::Easy);
        assert_eq!(Persona::from_key("hard"), Persona::Hard);
        assert_eq!(Persona::from_key(" HARD "), Persona::Hard);
    }

    #[test]
    fn unknown_keys_fall_back_to_default() {
        assert_eq!(Persona::from_key("nightmare"), Persona::default());
        assert_eq!(Persona::from_key(""), Persona::Easy);
    }

    #[test]
    fn every_persona_has_a_nonempty_instruction() {
        for persona in [Persona::Easy, Persona::Hard] {
            assert!(!persona.instruction().trim().is_empty());
        }
    }

    #[test]
    fn labels_match_keys() {
        assert_eq!(Persona::Easy.label(), "Easy Mode");
        assert_eq!(Persona::Hard.label(), "Hard Mode");
        assert_eq!(Persona::Hard.key(), "hard");
    }
}
