//! Tests for report types.

use super::*;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::scene::{Channel, ChannelPath, CurveModifier, CycleMode, FCurve};

#[test]
fn test_report_builder() {
    let report = ReportBuilder::new(
        ReportOperation::AddMotion,
        "a1b2c3d4e5f6".to_string(),
        "motionmaker-cli v0.1.0".to_string(),
    )
    .object("Cube")
    .generation(42, "ffee")
    .duration_ms(12)
    .build();

    assert_eq!(report.report_version, 1);
    assert_eq!(report.operation, ReportOperation::AddMotion);
    assert_eq!(report.scene_hash, "a1b2c3d4e5f6");
    assert_eq!(report.object.as_deref(), Some("Cube"));
    assert_eq!(report.seed, Some(42));
    assert_eq!(report.settings_hash.as_deref(), Some("ffee"));
    assert!(report.ok);
    assert!(!report.target_triple.is_empty());
}

#[test]
fn test_report_builder_with_validation() {
    let mut validation = ValidationResult::success();
    validation.add_error(ValidationError::with_path(
        ErrorCode::SettingOutOfRange,
        "total_frames must be >= 1, got 0",
        "settings.total_frames",
    ));
    validation.add_warning(ValidationWarning::new(
        WarningCode::UnusedNoiseSettings,
        "noise settings are not applied",
    ));

    let report = ReportBuilder::new(
        ReportOperation::Validate,
        "abc".to_string(),
        "test v1".to_string(),
    )
    .validation(&validation)
    .build();

    assert!(!report.ok);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, "E010");
    assert_eq!(report.errors[0].path.as_deref(), Some("settings.total_frames"));
    assert_eq!(report.warnings[0].code, "W002");
}

#[test]
fn test_channel_summary() {
    let mut curve = FCurve::new(Channel::new(ChannelPath::Location, 2));
    assert!(ChannelSummary::from_fcurve(&curve).is_none());

    curve.insert_keyframe(0, 1.0);
    curve.insert_keyframe(10, 0.5);
    curve.insert_keyframe(20, 1.25);
    curve.modifiers.push(CurveModifier::mirror_after());

    let summary = ChannelSummary::from_fcurve(&curve).unwrap();
    assert_eq!(summary.keyframe_count, 3);
    assert_eq!(summary.first_frame, 0);
    assert_eq!(summary.last_frame, 20);
    assert_eq!(summary.min_value, 0.5);
    assert_eq!(summary.max_value, 1.25);
    assert_eq!(summary.span(), 0.75);
    assert_eq!(summary.cycles_after, Some(CycleMode::Mirror));
}

#[test]
fn test_report_json_round_trip() {
    let mut curve = FCurve::new(Channel::new(ChannelPath::RotationEuler, 0));
    curve.insert_keyframe(0, 0.0);

    let report = ReportBuilder::new(
        ReportOperation::AddMotion,
        "abc".to_string(),
        "test v1".to_string(),
    )
    .channel(ChannelSummary::from_fcurve(&curve).unwrap())
    .build();

    let json = report.to_json_pretty().unwrap();
    assert!(json.contains("\"operation\": \"add_motion\""));
    let parsed = Report::from_json(&json).unwrap();
    assert_eq!(parsed, report);
    assert_eq!(parsed.keyframe_count(), 1);
}

#[test]
fn test_report_filename_stays_in_directory() {
    assert_eq!(Report::filename("Cube.001"), "Cube.001.report.json");
    assert_eq!(Report::filename("Rig/Head"), "Rig_Head.report.json");
    assert_eq!(Report::filename("Rig\\Head"), "Rig_Head.report.json");
    assert_eq!(Report::filename("../Cube"), "__Cube.report.json");
    assert_eq!(Report::filename(".."), "_.report.json");
    assert_eq!(Report::filename("C:Cube"), "C_Cube.report.json");

    for name in ["../../etc/x", "a/../b", "/abs", "tab\there"] {
        let filename = Report::filename(name);
        assert!(!filename.contains('/') && !filename.contains('\\'), "{}", filename);
        assert!(!filename.contains(".."), "{}", filename);
    }
}
