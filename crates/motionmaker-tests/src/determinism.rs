//! Determinism checks for generated motion.
//!
//! Motion is compared at the bit level: each curve is flattened into bytes
//! (channel name, then every key's frame and the raw bits of its value) so
//! that two runs match only if every float is identical, not merely close.

use std::fmt;

use motionmaker_backend::MotionClip;
use motionmaker_spec::{Channel, Scene};

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// If non-deterministic, where the first run and a later run diverge.
    pub diff_info: Option<DiffInfo>,
}

/// First divergence between two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the first difference, or the shorter length if one
    /// output is a prefix of the other.
    pub offset: usize,
    /// Which run (0-indexed) diverged from run 0.
    pub run_index: usize,
    /// Sizes of run 0 and the diverging run.
    pub sizes: (usize, usize),
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run {} diverges from run 0 at byte {} ({} vs {} bytes)",
            self.run_index, self.offset, self.sizes.0, self.sizes.1
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(ref diff) = self.diff_info {
            panic!(
                "Non-deterministic motion detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Run generation `runs` times and verify all outputs are identical.
///
/// # Panics
///
/// Panics if `runs` is less than 2.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    for run_index in 1..runs {
        let output = generate_fn();
        let output = output.as_ref();

        let mismatch = reference
            .iter()
            .zip(output.iter())
            .position(|(a, b)| a != b)
            .or_else(|| {
                (reference.len() != output.len()).then(|| reference.len().min(output.len()))
            });

        if let Some(offset) = mismatch {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference.len(),
                hash,
                diff_info: Some(DiffInfo {
                    offset,
                    run_index,
                    sizes: (reference.len(), output.len()),
                }),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference.len(),
        hash,
        diff_info: None,
    }
}

/// Compare hashes from several runs.
pub fn verify_hash_determinism(hashes: &[String]) -> bool {
    match hashes.first() {
        Some(reference) => hashes.iter().all(|h| h == reference),
        None => true,
    }
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

fn push_key(out: &mut Vec<u8>, frame: i32, value: f64) {
    out.extend_from_slice(&frame.to_le_bytes());
    out.extend_from_slice(&value.to_bits().to_le_bytes());
}

/// Flattens a generated clip into bytes.
pub fn clip_bytes(clip: &MotionClip) -> Vec<u8> {
    let mut out = Vec::new();
    for curve in &clip.channels {
        out.extend_from_slice(curve.channel.to_string().as_bytes());
        for key in &curve.keyframes {
            push_key(&mut out, key.frame, key.value);
        }
    }
    out
}

/// Flattens every object's transform and keyed curves into bytes.
pub fn scene_animation_bytes(scene: &Scene) -> Vec<u8> {
    let mut out = Vec::new();
    for object in &scene.objects {
        out.extend_from_slice(object.name.as_bytes());
        for v in object.location.iter().chain(object.rotation_euler.iter()) {
            out.extend_from_slice(&v.to_bits().to_le_bytes());
        }

        let Some(action) = object.animation_data.as_ref().and_then(|d| d.action.as_ref()) else {
            continue;
        };
        for channel in Channel::ALL {
            if let Some(curve) = action.find(channel) {
                out.extend_from_slice(channel.to_string().as_bytes());
                for key in &curve.keyframes {
                    push_key(&mut out, key.frame, key.value);
                }
            }
        }
    }
    out
}

/// Generates a test asserting that an expression yields identical bytes
/// across three runs.
///
/// ```rust,ignore
/// use motionmaker_tests::test_determinism;
///
/// test_determinism!(default_settings, {
///     clip_bytes(&generate_motion(&Transform::default(), &MotionSettings::default(), 42))
/// });
/// ```
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, $generate:expr) => {
        #[test]
        fn $name() {
            $crate::determinism::verify_determinism(|| $generate, 3).assert_deterministic();
        }
    };
}
