use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Scene;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SceneError {
    #[error("failed to read scene file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML scene: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported scene format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Scene file encodings, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SceneFormat {
    Toml,
    Json,
}

impl SceneFormat {
    fn from_path(path: &Path) -> Result<Self, SceneError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(SceneError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a scene from TOML text
pub fn parse_toml(contents: &str) -> Result<Scene, SceneError> {
    Ok(toml::from_str(contents)?)
}

/// Parse a scene from JSON text
pub fn parse_json(contents: &str) -> Result<Scene, SceneError> {
    Ok(serde_json::from_str(contents)?)
}

/// Load a scene file, choosing the parser from the file extension
pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    let format = SceneFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|source| SceneError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        SceneFormat::Toml => parse_toml(&contents),
        SceneFormat::Json => parse_json(&contents),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;
    use std::fs;
    use tempfile::tempdir;

    const WALL_TOML: &str = r#"
start = [0.0, 0.0]
end = [20.0, 20.0]

[[obstacles]]
points = [[1.0, 0.0], [2.0, 0.0], [2.0, 15.0], [1.0, 15.0]]
"#;

    #[test]
    fn test_parse_toml_scene() {
        let scene = parse_toml(WALL_TOML).unwrap();
        assert_eq!(scene.start, Point::new(0.0, 0.0));
        assert_eq!(scene.end, Point::new(20.0, 20.0));
        assert_eq!(scene.obstacles.len(), 1);
        assert_eq!(scene.obstacles[0].points[2], Point::new(2.0, 15.0));
    }

    #[test]
    fn test_parse_json_scene_with_defaults() {
        let json = r#"{"obstacles": [{"points": [[5, 5], [9, 5], [5, 9]]}]}"#;
        let scene = parse_json(json).unwrap();
        assert_eq!(scene.start, Point::new(0.0, 0.0));
        assert_eq!(scene.end, Point::new(20.0, 20.0));
        assert_eq!(scene.obstacles[0].len(), 3);
    }

    #[test]
    fn test_parse_bad_point() {
        let err = parse_toml("start = [1.0]").unwrap_err();
        assert!(matches!(err, SceneError::Toml(_)));
    }

    #[test]
    fn test_load_scene_files() {
        let dir = tempdir().unwrap();

        let toml_path = dir.path().join("wall.toml");
        fs::write(&toml_path, WALL_TOML).unwrap();
        assert_eq!(load_scene(&toml_path).unwrap().obstacles.len(), 1);

        let json_path = dir.path().join("empty.JSON");
        fs::write(&json_path, r#"{"start": [1, 2], "end": [3, 4]}"#).unwrap();
        let scene = load_scene(&json_path).unwrap();
        assert_eq!(scene.end, Point::new(3.0, 4.0));
        assert!(scene.obstacles.is_empty());
    }

    #[test]
    fn test_load_scene_errors() {
        let dir = tempdir().unwrap();

        let err = load_scene(&dir.path().join("scene.yaml")).unwrap_err();
        assert!(matches!(err, SceneError::UnsupportedFormat(_)));

        let err = load_scene(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SceneError::Read { .. }));
    }
}
