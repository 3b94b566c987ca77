//! Canonical hashing and seed derivation.
//!
//! This module implements the determinism policy for Motion Maker:
//! - JSON canonicalization following RFC 8785 (JCS)
//! - BLAKE3 hashing for scene and settings hashes
//! - Per-channel seed derivation so each animated channel draws from an
//!   independent random stream

use crate::error::SpecError;
use crate::scene::{Channel, Scene};
use crate::settings::MotionSettings;

/// Computes the canonical BLAKE3 hash of a scene.
///
/// ```text
/// scene_hash = hex(BLAKE3(JCS(scene_json)))
/// ```
///
/// # Example
/// ```
/// use motionmaker_spec::scene::{Scene, SceneObject};
/// use motionmaker_spec::hash::canonical_scene_hash;
///
/// let scene = Scene::new().with_object(SceneObject::new("Cube"));
/// let hash = canonical_scene_hash(&scene).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_scene_hash(scene: &Scene) -> Result<String, SpecError> {
    let value = scene.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a settings block.
pub fn canonical_settings_hash(settings: &MotionSettings) -> Result<String, SpecError> {
    let value = serde_json::to_value(settings)?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Canonicalizes a JSON value according to RFC 8785 (JCS).
///
/// Object keys are sorted lexicographically, there is no whitespace between
/// tokens, integral floats are written without a fraction, and strings use
/// minimal escaping.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_jcs_number(n),
        serde_json::Value::String(s) => format_jcs_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", format_jcs_string(k), canonicalize_json(v)))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

/// Formats a number according to JCS rules.
fn format_jcs_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if !f.is_finite() => "null".to_string(),
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        // Rust's shortest round-trip formatting never emits trailing zeros
        Some(f) => format!("{}", f),
        None => "null".to_string(),
    }
}

/// Formats a string according to JCS rules.
fn format_jcs_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Derives the seed for one animated channel from the base seed.
///
/// ```text
/// channel_seed = truncate_u32(BLAKE3(base_seed_le || "<data_path>.<index>"))
/// ```
///
/// # Example
/// ```
/// use motionmaker_spec::hash::derive_channel_seed;
/// use motionmaker_spec::scene::Channel;
///
/// let x = derive_channel_seed(42, &Channel::ALL[0]);
/// let y = derive_channel_seed(42, &Channel::ALL[1]);
/// assert_ne!(x, y);
/// ```
pub fn derive_channel_seed(base_seed: u32, channel: &Channel) -> u32 {
    let key = format!("{}.{}", channel.path.as_str(), channel.index);

    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[..4]);
    u32::from_le_bytes(bytes)
}
