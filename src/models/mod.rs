//! Data models and types for the intake surface.
//!
//! Contains domain types for:
//! - [`ClassnameSet`], [`RegionClasses`], [`ClassTokens`] - Per-region class configuration
//! - [`RegionKind`], [`Cursor`] - Region identity and pointer affordance
//! - [`InteractionState`] - Disabled and drag-over flags
//! - [`ValidationResult`], [`InvalidFiles`] - Extension validation outcomes
//! - [`IntakeConfig`] - Serializable configuration surface

mod classes;
mod config;
mod state;
mod validation;

pub use classes::{ClassTokens, ClassnameSet, Cursor, RegionClasses, RegionKind};
pub use config::IntakeConfig;
pub use state::InteractionState;
pub use validation::{InvalidFiles, ValidationResult};
