// DOM hooks and host-side tuning for the web front-end.

// Element ids supplied by the page
pub const CANVAS_ID: &str = "hearts-canvas";
pub const OPEN_BUTTON_ID: &str = "open-card";
pub const HUG_TOAST_ID: &str = "hug-toast";

// Class toggled to hide overlay elements
pub const HIDDEN_CLASS: &str = "hidden";

// How long the "hug sent" toast stays up after a hold is released
pub const HUG_TOAST_MS: i32 = 1200;

// Used when the browser reports a missing or nonsensical devicePixelRatio
pub const FALLBACK_DPR: f64 = 1.0;

// Optional data-* attributes on the canvas that override field defaults
pub const ATTR_SEED: &str = "data-seed";
pub const ATTR_BPM: &str = "data-bpm";
pub const ATTR_INTERACTIVE: &str = "data-interactive";
pub const ATTR_TRAIL_ALPHA: &str = "data-trail-alpha";
