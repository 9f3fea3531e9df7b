use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::BodyCompositionInput;

/// Load an input snapshot from a JSON file.
///
/// Missing fields take the form defaults, so a file holding only the
/// user's stats is enough.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<BodyCompositionInput> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let input: BodyCompositionInput = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "loaded input snapshot");
    Ok(input)
}

/// Save an input snapshot as pretty JSON.
pub fn save_input<P: AsRef<Path>>(path: P, input: &BodyCompositionInput) -> Result<()> {
    let json = serde_json::to_string_pretty(input)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_file_uses_defaults() {
        let json = r#"{"weight": 200, "bodyFat": 25, "gender": "female", "activityLevel": "very_active"}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let input = load_input(file.path()).unwrap();
        assert_eq!(input.weight, 200.0);
        assert_eq!(input.body_fat, 25.0);
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.activity_level, ActivityLevel::VeryActive);
        assert_eq!(input.desired_body_fat, 15.0);
        assert_eq!(input.split.protein, 30.0);
        assert!(input.daily_calories.is_none());
    }

    #[test]
    fn test_unknown_activity_level_is_sedentary() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"activityLevel": "couch"}"#).unwrap();

        let input = load_input(file.path()).unwrap();
        assert_eq!(input.activity_level, ActivityLevel::Sedentary);
    }

    #[test]
    fn test_save_and_reload() {
        let input = BodyCompositionInput {
            weight: 180.0,
            body_fat: 20.0,
            daily_calories: Some(2200.0),
            ..Default::default()
        };

        let file = NamedTempFile::new().unwrap();
        save_input(file.path(), &input).unwrap();

        let reloaded = load_input(file.path()).unwrap();
        assert_eq!(reloaded, input);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_input(file.path()).is_err());
    }
}
