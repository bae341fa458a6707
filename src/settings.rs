use crate::constants::{ATTR_BPM, ATTR_INTERACTIVE, ATTR_SEED, ATTR_TRAIL_ALPHA};
use hearts_core::FieldConfig;

/// Build a field config from element attributes, keeping defaults for
/// anything missing or unparsable. `attr` looks an attribute up by name.
pub fn field_config_from_attrs(attr: impl Fn(&str) -> Option<String>) -> FieldConfig {
    let mut config = FieldConfig::default();

    if let Some(seed) = attr(ATTR_SEED).and_then(|s| s.trim().parse::<u64>().ok()) {
        config.seed = Some(seed);
    }
    if let Some(bpm) = attr(ATTR_BPM).and_then(|s| s.trim().parse::<f32>().ok()) {
        if bpm.is_finite() && bpm > 0.0 {
            config.bpm = bpm;
        }
    }
    if let Some(flag) = attr(ATTR_INTERACTIVE) {
        config.interactive = !matches!(flag.trim(), "false" | "0" | "off" | "no");
    }
    if let Some(alpha) = attr(ATTR_TRAIL_ALPHA)
        .and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|a| a.is_finite())
    {
        config.trail_alpha = alpha.clamp(
            hearts_core::constants::TRAIL_ALPHA_MIN,
            hearts_core::constants::TRAIL_ALPHA_MAX,
        );
    }

    config
}
