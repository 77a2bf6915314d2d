use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
struct CredsFile {
    default: CredsProfile,
}

#[derive(Debug, Serialize, Deserialize)]
struct CredsProfile {
    username: String,
}

/// Load the stored bridge credential, if the file exists.
pub fn load(path: &Path) -> Result<Option<String>, AppError> {
    if !path.is_file() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    let file: CredsFile = serde_json::from_str(&raw)?;
    Ok(Some(file.default.username))
}

/// Persist a freshly issued credential. Written once, at pairing time.
pub fn store(path: &Path, username: &str) -> Result<(), AppError> {
    let file = CredsFile {
        default: CredsProfile {
            username: username.to_string(),
        },
    };
    std::fs::write(path, serde_json::to_string(&file)?)?;
    Ok(())
}

/// The JSON to write by hand if persisting fails.
pub fn manual_instructions(username: &str) -> String {
    format!(
        "{{ \"default\" : {{\n  \"username\" : \"{}\"\n  }}\n}}",
        username
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join(".hue.creds")).unwrap().is_none());
    }

    #[test]
    fn store_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".hue.creds");
        store(&path, "s3cret-token").unwrap();
        assert_eq!(load(&path).unwrap().as_deref(), Some("s3cret-token"));
    }

    #[test]
    fn file_shape_matches_the_documented_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".hue.creds");
        store(&path, "abc").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["default"]["username"], "abc");
    }
}
