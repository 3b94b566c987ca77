//! Test fixture utilities for scene files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use motionmaker_cli::input::{load_scene, save_scene};
use motionmaker_spec::{Report, RotationMode, Scene, SceneObject};

/// A scene file in its own temporary directory.
pub struct SceneFixture {
    pub root: TempDir,
    pub scene_path: PathBuf,
}

impl SceneFixture {
    /// Writes `scene` to `<tmp>/scene.json`.
    pub fn new(scene: &Scene) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let scene_path = root.path().join("scene.json");
        save_scene(&scene_path, scene).expect("Failed to write scene");
        Self { root, scene_path }
    }

    /// One active cube, lifted and slightly rotated, seed 42.
    pub fn cube() -> Self {
        Self::new(&cube_scene())
    }

    /// The directory holding the scene.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Scene path as a string, for CLI arguments.
    pub fn scene_str(&self) -> String {
        self.scene_path.to_string_lossy().to_string()
    }

    /// A sibling path inside the fixture directory.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Reloads the scene from disk.
    pub fn load(&self) -> Scene {
        self.load_from(&self.scene_path)
    }

    /// Loads a scene written elsewhere in the fixture.
    pub fn load_from(&self, path: &Path) -> Scene {
        load_scene(path).expect("Failed to load scene").scene
    }

    /// Reads `<name>.report.json` next to the scene.
    pub fn report(&self, name: &str) -> Report {
        let path = self.sibling(&Report::filename(name));
        let json = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        Report::from_json(&json).expect("Failed to parse report")
    }
}

/// One active cube at `(0, 0, 1)` rotated `0.25` about Z, seed 42.
pub fn cube_scene() -> Scene {
    Scene::new()
        .with_object(
            SceneObject::new("Cube")
                .at([0.0, 0.0, 1.0])
                .rotated([0.0, 0.0, 0.25]),
        )
        .with_active("Cube")
        .with_seed(42)
}

/// Cube plus a lamp and a quaternion-rotated camera.
pub fn stage_scene() -> Scene {
    let mut camera = SceneObject::new("Camera").at([0.0, -8.0, 2.0]);
    camera.rotation_mode = RotationMode::Quaternion;

    cube_scene()
        .with_object(SceneObject::new("Lamp").at([4.0, 1.0, 6.0]))
        .with_object(camera)
}
