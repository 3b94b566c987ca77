//! End-to-end tests for adding and removing motion on scene files.
//!
//! These drive the CLI command functions in-process against scenes written
//! to temporary directories, then reload the written scenes and reports.

use std::process::ExitCode;

use motionmaker_backend::{add_motion_to_scene, remove_motion_from_scene, AnimationHost};
use motionmaker_cli::commands::{add, add::AddOptions, remove};
use motionmaker_spec::{
    Channel, ChannelPath, CurveModifier, CycleMode, MotionSettings, ReportOperation, Scene,
    SceneObject, SettingsOverrides, Transform,
};
use motionmaker_tests::fixtures::{cube_scene, stage_scene, SceneFixture};
use pretty_assertions::assert_eq;

fn add_default(fixture: &SceneFixture) -> ExitCode {
    add::run(&fixture.scene_str(), &AddOptions::default(), true).expect("add failed")
}

#[test]
fn add_keys_all_six_channels_with_mirrored_cycles() {
    let fixture = SceneFixture::cube();
    assert_eq!(add_default(&fixture), ExitCode::SUCCESS);

    let scene = fixture.load();
    let cube = scene.object("Cube").unwrap();
    let expected_frames: Vec<i32> = (0..250).step_by(10).collect();

    for channel in Channel::ALL {
        let curve = cube
            .fcurve(channel)
            .unwrap_or_else(|| panic!("missing curve for {}", channel));
        let frames: Vec<i32> = curve.keyframes.iter().map(|k| k.frame).collect();
        assert_eq!(frames, expected_frames, "frames for {}", channel);
        assert_eq!(
            curve.modifiers,
            vec![CurveModifier::Cycles {
                mode_before: CycleMode::Repeat,
                mode_after: CycleMode::Mirror,
            }]
        );
    }

    let action = cube
        .animation_data
        .as_ref()
        .and_then(|d| d.action.as_ref())
        .unwrap();
    assert_eq!(action.name, "CubeAction");
    assert_eq!(action.keyframe_count(), 150);
}

#[test]
fn add_walk_stays_within_amplitude_per_step() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);

    let scene = fixture.load();
    let cube = scene.object("Cube").unwrap();
    let initial = Transform::new([0.0, 0.0, 1.0], [0.0, 0.0, 0.25]);
    // random 0.1 * range 0.1
    let amplitude = 0.01 + 1e-12;

    for channel in Channel::ALL {
        let curve = cube.fcurve(channel).unwrap();
        let mut previous = initial.get(channel.path, channel.index);
        for key in &curve.keyframes {
            assert!(
                (key.value - previous).abs() <= amplitude,
                "{} jumped from {} to {} at frame {}",
                channel,
                previous,
                key.value,
                key.frame
            );
            previous = key.value;
        }
    }
}

#[test]
fn add_leaves_object_at_last_sampled_values() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);

    let scene = fixture.load();
    let cube = scene.object("Cube").unwrap();
    for channel in Channel::ALL {
        let last = cube.fcurve(channel).unwrap().keyframes.last().unwrap().value;
        assert_eq!(cube.transform().get(channel.path, channel.index), last);
    }
}

#[test]
fn add_records_initial_transform() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);

    let cube = fixture.load().object("Cube").cloned().unwrap();
    assert_eq!(cube.initial_location(), Some([0.0, 0.0, 1.0]));
    assert_eq!(cube.initial_rotation(), Some([0.0, 0.0, 0.25]));
}

#[test]
fn add_targets_named_object_only() {
    let fixture = SceneFixture::new(&stage_scene());
    let options = AddOptions {
        object: Some("Lamp"),
        ..Default::default()
    };
    let code = add::run(&fixture.scene_str(), &options, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let scene = fixture.load();
    assert!(scene.object("Lamp").unwrap().has_animation_data());
    assert!(!scene.object("Cube").unwrap().has_animation_data());
    assert!(!scene.object("Camera").unwrap().has_animation_data());
    assert_eq!(scene.object("Camera").unwrap().location, [0.0, -8.0, 2.0]);

    let report = fixture.report("Lamp");
    assert_eq!(report.object.as_deref(), Some("Lamp"));
}

#[test]
fn add_overrides_change_stride_and_persist() {
    let fixture = SceneFixture::cube();
    let options = AddOptions {
        overrides: SettingsOverrides {
            rotation_speed: Some(2.0),
            total_frames: Some(100),
            ..Default::default()
        },
        ..Default::default()
    };
    let code = add::run(&fixture.scene_str(), &options, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let scene = fixture.load();
    assert_eq!(scene.settings.rotation_speed, 2.0);
    assert_eq!(scene.settings.total_frames, 100);
    assert_eq!(scene.settings.translation_speed, 1.0);

    let cube = scene.object("Cube").unwrap();
    for channel in Channel::ALL {
        let keys = cube.fcurve(channel).unwrap().keyframes.len();
        match channel.path {
            ChannelPath::Location => assert_eq!(keys, 10, "{}", channel),
            ChannelPath::RotationEuler => assert_eq!(keys, 20, "{}", channel),
        }
    }
}

#[test]
fn add_with_fast_speed_keys_every_frame() {
    let fixture = SceneFixture::cube();
    let options = AddOptions {
        overrides: SettingsOverrides {
            translation_speed: Some(10.0),
            total_frames: Some(12),
            ..Default::default()
        },
        ..Default::default()
    };
    add::run(&fixture.scene_str(), &options, true).unwrap();

    let scene = fixture.load();
    let curve = scene
        .object("Cube")
        .unwrap()
        .fcurve(Channel::ALL[0])
        .unwrap()
        .clone();
    let frames: Vec<i32> = curve.keyframes.iter().map(|k| k.frame).collect();
    assert_eq!(frames, (0..12).collect::<Vec<_>>());
}

#[test]
fn add_with_zero_range_keys_constant_curves() {
    let fixture = SceneFixture::cube();
    let options = AddOptions {
        overrides: SettingsOverrides {
            translation_range: Some(0.0),
            rotation_random: Some(0.0),
            ..Default::default()
        },
        ..Default::default()
    };
    add::run(&fixture.scene_str(), &options, true).unwrap();

    let scene = fixture.load();
    let cube = scene.object("Cube").unwrap();
    for channel in Channel::ALL {
        let start = cube
            .initial_location()
            .zip(cube.initial_rotation())
            .map(|(l, r)| Transform::new(l, r).get(channel.path, channel.index))
            .unwrap();
        assert!(cube
            .fcurve(channel)
            .unwrap()
            .keyframes
            .iter()
            .all(|k| k.value == start));
    }
}

#[test]
fn add_report_summarizes_channels() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);

    let report = fixture.report("Cube");
    assert!(report.ok);
    assert_eq!(report.operation, ReportOperation::AddMotion);
    assert_eq!(report.seed, Some(42));
    assert!(report.settings_hash.is_some());
    assert_eq!(report.channels.len(), 6);
    for summary in &report.channels {
        assert_eq!(summary.keyframe_count, 25);
        assert_eq!(summary.first_frame, 0);
        assert_eq!(summary.last_frame, 240);
        assert!(summary.min_value <= summary.max_value);
        assert_eq!(summary.cycles_after, Some(CycleMode::Mirror));
    }
}

#[test]
fn add_twice_replaces_animation_from_current_pose() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);
    let after_first = fixture.load().object("Cube").cloned().unwrap();

    let options = AddOptions {
        seed: Some(9),
        ..Default::default()
    };
    add::run(&fixture.scene_str(), &options, true).unwrap();
    let after_second = fixture.load().object("Cube").cloned().unwrap();

    // The second run starts from where the first one left the object
    assert_eq!(after_second.initial_location(), Some(after_first.location));
    assert_eq!(
        after_second.initial_rotation(),
        Some(after_first.rotation_euler)
    );
    assert_eq!(
        after_second
            .animation_data
            .as_ref()
            .and_then(|d| d.action.as_ref())
            .map(|a| a.keyframe_count()),
        Some(150)
    );

    let report = fixture.report("Cube");
    assert!(report.warnings.iter().any(|w| w.code == "W003"));
}

#[test]
fn remove_restores_initial_transform_exactly() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);

    let code = remove::run(&fixture.scene_str(), None, None, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let scene = fixture.load();
    let cube = scene.object("Cube").unwrap();
    assert!(!cube.has_animation_data());
    assert_eq!(cube.location, [0.0, 0.0, 1.0]);
    assert_eq!(cube.rotation_euler, [0.0, 0.0, 0.25]);

    let report = fixture.report("Cube");
    assert_eq!(report.operation, ReportOperation::RemoveMotion);
    assert!(report.ok);
}

#[test]
fn remove_writes_to_out_path() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);

    let out = fixture.sibling("restored.json");
    let out_str = out.to_string_lossy().to_string();
    remove::run(&fixture.scene_str(), Some("Cube"), Some(&out_str), true).unwrap();

    assert!(fixture.load().object("Cube").unwrap().has_animation_data());
    let restored = fixture.load_from(&out);
    assert!(!restored.object("Cube").unwrap().has_animation_data());
}

#[test]
fn remove_twice_is_harmless() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);
    remove::run(&fixture.scene_str(), None, None, true).unwrap();
    let once = fixture.load();

    let code = remove::run(&fixture.scene_str(), None, None, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(fixture.load(), once);
}

#[test]
fn report_for_nested_object_name_stays_beside_scene() {
    let scene = Scene::new()
        .with_object(SceneObject::new("Rig/Head").at([0.0, 1.0, 2.0]))
        .with_active("Rig/Head");
    let fixture = SceneFixture::new(&scene);

    assert_eq!(add_default(&fixture), ExitCode::SUCCESS);
    assert!(fixture.load().object("Rig/Head").unwrap().has_animation_data());
    assert!(fixture.path().join("Rig_Head.report.json").is_file());
    assert!(!fixture.path().join("Rig").exists());

    let report = fixture.report("Rig/Head");
    assert_eq!(report.object.as_deref(), Some("Rig/Head"));
    assert!(report.ok);

    let code = remove::run(&fixture.scene_str(), None, None, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(fixture.report("Rig/Head").operation, ReportOperation::RemoveMotion);
    assert_eq!(fixture.load().object("Rig/Head").unwrap().location, [0.0, 1.0, 2.0]);
}

#[test]
fn remove_restores_when_stored_settings_are_out_of_range() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);

    let mut scene = fixture.load();
    scene.settings.rotation_range = 50.0;
    scene.settings.total_frames = 0;
    std::fs::write(&fixture.scene_path, scene.to_json_pretty().unwrap()).unwrap();

    let code = remove::run(&fixture.scene_str(), None, None, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let restored = fixture.load();
    let cube = restored.object("Cube").unwrap();
    assert!(!cube.has_animation_data());
    assert_eq!(cube.location, [0.0, 0.0, 1.0]);
    assert_eq!(cube.rotation_euler, [0.0, 0.0, 0.25]);

    let report = fixture.report("Cube");
    assert_eq!(report.operation, ReportOperation::RemoveMotion);
    assert!(report.ok);
    assert!(report.errors.is_empty());
}

#[test]
fn reports_record_backend_version() {
    let fixture = SceneFixture::cube();
    add_default(&fixture);

    let report = fixture.report("Cube");
    assert!(report.backend_version.starts_with("motionmaker-cli v"));
    assert!(report
        .backend_version
        .contains(motionmaker_backend::BACKEND_VERSION));
}

#[test]
fn scene_level_operators_round_trip() {
    let mut scene = stage_scene();
    let settings = MotionSettings::default();

    let outcome = add_motion_to_scene(&mut scene, None, &settings, 5).unwrap();
    assert_eq!(outcome.object, "Cube");
    assert!(!outcome.cleared_existing);
    assert_eq!(outcome.clip.keyframe_count(), 150);
    assert_eq!(scene.object("Cube").unwrap().transform(), outcome.clip.final_transform());

    let removed = remove_motion_from_scene(&mut scene, Some("Cube")).unwrap();
    assert!(removed.removed());
    assert_eq!(scene, stage_scene_with_initial_records());
}

/// `stage_scene` after an add/remove cycle on the cube: identical apart
/// from the stored initial transform.
fn stage_scene_with_initial_records() -> motionmaker_spec::Scene {
    let mut scene = stage_scene();
    scene
        .object_mut("Cube")
        .expect("cube")
        .store_initial_transform();
    scene
}

#[test]
fn cube_fixture_matches_helper() {
    assert_eq!(SceneFixture::cube().load(), cube_scene());
}
