//! Per-curve summaries recorded in add-motion reports.

use serde::{Deserialize, Serialize};

use crate::scene::{ChannelPath, CycleMode, FCurve};

/// Summary of one generated F-curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub data_path: ChannelPath,
    pub array_index: usize,
    pub keyframe_count: usize,
    pub first_frame: i32,
    pub last_frame: i32,
    pub min_value: f64,
    pub max_value: f64,
    /// Extrapolation after the last key, if a cycles modifier is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycles_after: Option<CycleMode>,
}

impl ChannelSummary {
    /// Summarizes a curve. Returns `None` for a curve without keys.
    pub fn from_fcurve(curve: &FCurve) -> Option<Self> {
        let (first_frame, last_frame) = curve.frame_range()?;
        let (min_value, max_value) = curve
            .keyframes
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), k| {
                (lo.min(k.value), hi.max(k.value))
            });

        Some(Self {
            data_path: curve.data_path,
            array_index: curve.array_index,
            keyframe_count: curve.keyframes.len(),
            first_frame,
            last_frame,
            min_value,
            max_value,
            cycles_after: curve.cycles_after(),
        })
    }

    /// Peak-to-peak excursion of the curve.
    pub fn span(&self) -> f64 {
        self.max_value - self.min_value
    }
}
