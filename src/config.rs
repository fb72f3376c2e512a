//! Component configuration constants.
//!
//! Centralizes the presentational defaults and the demo configuration.
//! The demo config is loaded at compile time using `include_str!`.

// =============================================================================
// Region Baselines
// =============================================================================

/// Class applied to the surface when no `default` class is configured.
pub const SURFACE_BASELINE_CLASS: &str = "droplet";

/// Class applied to the icon when no `default` class is configured.
pub const ICON_BASELINE_CLASS: &str = "cloud-icon";

/// Class applied to the label when no `default` class is configured.
pub const LABEL_BASELINE_CLASS: &str = "droplet-label";

// =============================================================================
// Default Content
// =============================================================================

/// Glyph rendered in the default icon region.
pub const DEFAULT_ICON: &str = "☁️";

/// Text rendered in the default label region.
pub const DEFAULT_LABEL: &str = "Drop files here or click to upload";

// =============================================================================
// Validation
// =============================================================================

/// Separator between tokens of the raw accept string.
pub const ACCEPT_SEPARATOR: char = ',';

// =============================================================================
// Demo
// =============================================================================

/// Default configuration used by the demo binary when the mount element
/// carries no `data-config` attribute.
pub const DEMO_CONFIG_TOML: &str = include_str!("../assets/demo.toml");

/// Attribute on the mount element holding a JSON [`IntakeConfig`].
///
/// [`IntakeConfig`]: crate::models::IntakeConfig
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Maximum number of entries kept in the demo activity log.
pub const MAX_ACTIVITY_ENTRIES: usize = 50;
