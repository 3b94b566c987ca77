//! Command-line settings overrides.
//!
//! Every panel setting can be overridden per run. Overrides are layered over
//! the scene's stored settings, which are themselves layered over the
//! defaults.

use clap::Args;
use motionmaker_spec::SettingsOverrides;

/// Flags that override the scene's motion settings.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SettingsArgs {
    /// Translation range (0-10)
    #[arg(long)]
    pub translation_range: Option<f64>,

    /// Translation randomness (0-10)
    #[arg(long)]
    pub translation_random: Option<f64>,

    /// Translation speed (0.01-10)
    #[arg(long)]
    pub translation_speed: Option<f64>,

    /// Rotation range (0-10)
    #[arg(long)]
    pub rotation_range: Option<f64>,

    /// Rotation randomness (0-10)
    #[arg(long)]
    pub rotation_random: Option<f64>,

    /// Rotation speed (0.01-10)
    #[arg(long)]
    pub rotation_speed: Option<f64>,

    /// Noise factor (stored, not applied)
    #[arg(long)]
    pub noise_factor: Option<f64>,

    /// Noise size (stored, not applied)
    #[arg(long)]
    pub noise_size: Option<f64>,

    /// Number of frames to key
    #[arg(long)]
    pub total_frames: Option<u32>,
}

impl From<&SettingsArgs> for SettingsOverrides {
    fn from(args: &SettingsArgs) -> Self {
        SettingsOverrides {
            translation_range: args.translation_range,
            rotation_range: args.rotation_range,
            translation_random: args.translation_random,
            rotation_random: args.rotation_random,
            translation_speed: args.translation_speed,
            rotation_speed: args.rotation_speed,
            total_frames: args.total_frames,
            noise_factor: args.noise_factor,
            noise_size: args.noise_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args_give_empty_overrides() {
        let overrides = SettingsOverrides::from(&SettingsArgs::default());
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_args_map_to_fields() {
        let args = SettingsArgs {
            rotation_speed: Some(2.5),
            total_frames: Some(48),
            ..Default::default()
        };
        let overrides = SettingsOverrides::from(&args);
        assert_eq!(overrides.rotation_speed, Some(2.5));
        assert_eq!(overrides.total_frames, Some(48));
        assert_eq!(overrides.translation_speed, None);
    }
}
