//! Loading and saving scene files.

use motionmaker_spec::Scene;
use std::path::{Path, PathBuf};

/// Result of loading a scene file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed scene.
    pub scene: Scene,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while reading or writing scene files.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File could not be written.
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// Scene could not be serialized.
    Serialize { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::FileWrite { path, source } => {
                write!(f, "failed to write file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
            InputError::Serialize { message } => {
                write!(f, "failed to serialize scene: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } | InputError::FileWrite { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Load a scene from a JSON file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use motionmaker_cli::input::load_scene;
///
/// let result = load_scene(Path::new("scene.json")).unwrap();
/// println!("{} object(s)", result.scene.objects.len());
/// ```
pub fn load_scene(path: &Path) -> Result<LoadResult, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let scene = Scene::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult { scene, source_hash })
}

/// Write a scene as pretty-printed JSON with a trailing newline.
pub fn save_scene(path: &Path, scene: &Scene) -> Result<(), InputError> {
    let mut json = scene.to_json_pretty().map_err(|e| InputError::Serialize {
        message: e.to_string(),
    })?;
    json.push('\n');

    std::fs::write(path, json).map_err(|e| InputError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use motionmaker_spec::SceneObject;

    #[test]
    fn test_load_missing_file() {
        let result = load_scene(Path::new("/nonexistent/scene.json"));
        assert!(matches!(result, Err(InputError::FileRead { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scene.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_scene(&path).unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scene.json");
        let scene = Scene::new()
            .with_object(SceneObject::new("Cube").at([0.0, 1.0, 0.0]))
            .with_active("Cube");

        save_scene(&path, &scene).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));

        let loaded = load_scene(&path).unwrap();
        assert_eq!(loaded.scene, scene);
        assert_eq!(
            loaded.source_hash,
            blake3::hash(content.as_bytes()).to_hex().to_string()
        );
    }
}
