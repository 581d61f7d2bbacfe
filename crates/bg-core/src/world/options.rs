//! Game options
//!
//! Tunable rules, loadable from a JSON file. Missing fields take the
//! defaults of the standard game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::OptionsError;
use crate::object::key_item_count;
use crate::{
    FILLER_COUNT, HIDE_CHANCE, MANSION_BOXES, PASSWORDS_REQUIRED, SKILL_CHANCE, WEAKNESSES_REQUIRED,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Percent chance per pursuer turn that an unlocked skill fires
    pub skill_chance: u32,

    /// Percent chance that a pursuer hides after moving
    pub hide_chance: u32,

    /// Passwords needed to open the hidden exit
    pub passwords_required: usize,

    /// Weakness items needed for the exorcism
    pub weaknesses_required: usize,

    /// Hide the twin sister's manuscript in the mansion
    pub twin_sister: bool,

    /// How many "Empty Box" markers get distributed
    pub filler_count: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            skill_chance: SKILL_CHANCE,
            hide_chance: HIDE_CHANCE,
            passwords_required: PASSWORDS_REQUIRED,
            weaknesses_required: WEAKNESSES_REQUIRED,
            twin_sister: true,
            filler_count: FILLER_COUNT,
        }
    }
}

impl GameOptions {
    /// Load options from a JSON file
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path).map_err(|e| OptionsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&text)
    }

    /// Parse and validate options from JSON text
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        let options: GameOptions = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.skill_chance > 100 {
            return Err(OptionsError::Invalid {
                field: "skill_chance",
                reason: format!("{} is not a percentage", self.skill_chance),
            });
        }
        if self.hide_chance > 100 {
            return Err(OptionsError::Invalid {
                field: "hide_chance",
                reason: format!("{} is not a percentage", self.hide_chance),
            });
        }
        if self.passwords_required == 0 {
            return Err(OptionsError::Invalid {
                field: "passwords_required",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.weaknesses_required == 0 {
            return Err(OptionsError::Invalid {
                field: "weaknesses_required",
                reason: "must be at least 1".to_string(),
            });
        }
        let spare = MANSION_BOXES.saturating_sub(key_item_count(self));
        if self.filler_count > spare {
            return Err(OptionsError::Invalid {
                field: "filler_count",
                reason: format!(
                    "{} fillers do not fit, only {spare} boxes are left after the key items",
                    self.filler_count
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_standard_game() {
        let options = GameOptions::default();
        assert_eq!(options.skill_chance, 30);
        assert_eq!(options.hide_chance, 40);
        assert_eq!(options.passwords_required, 3);
        assert_eq!(options.weaknesses_required, 2);
        assert!(options.twin_sister);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options = GameOptions::from_json(r#"{ "hide_chance": 0 }"#).unwrap();
        assert_eq!(options.hide_chance, 0);
        assert_eq!(options.skill_chance, SKILL_CHANCE);
    }

    #[test]
    fn test_rejects_bad_percentage() {
        let err = GameOptions::from_json(r#"{ "skill_chance": 150 }"#).unwrap_err();
        assert!(matches!(err, OptionsError::Invalid { field: "skill_chance", .. }));
    }

    #[test]
    fn test_filler_count_bounded_by_free_boxes() {
        let err = GameOptions::from_json(r#"{ "filler_count": 40 }"#).unwrap_err();
        assert!(matches!(err, OptionsError::Invalid { field: "filler_count", .. }));

        let spare = MANSION_BOXES - key_item_count(&GameOptions::default());
        let fits = GameOptions::from_json(&format!(r#"{{ "filler_count": {spare} }}"#)).unwrap();
        assert_eq!(fits.filler_count, spare);

        let over = format!(r#"{{ "filler_count": {} }}"#, spare + 1);
        assert!(GameOptions::from_json(&over).is_err());

        // Without the twin's manuscript one more filler fits
        let no_twin = format!(r#"{{ "twin_sister": false, "filler_count": {} }}"#, spare + 1);
        assert!(GameOptions::from_json(&no_twin).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameOptions::from_json("{ not json").unwrap_err();
        assert!(matches!(err, OptionsError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "twin_sister": false, "filler_count": 1 }}"#).unwrap();

        let options = GameOptions::load(file.path()).unwrap();
        assert!(!options.twin_sister);
        assert_eq!(options.filler_count, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameOptions::load(Path::new("/nonexistent/boxgirl.json")).unwrap_err();
        assert!(matches!(err, OptionsError::Io { .. }));
    }
}
