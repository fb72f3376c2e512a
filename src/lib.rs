//! Embeddable file-intake surface.
//!
//! Accepts files by click-to-browse or drag-and-drop, filters them against an
//! extension allow-list and reports accepted and rejected batches to the host.
//!
//! - [`core`](crate::core) - Backend-independent validation, styling and event dispatch
//! - [`components`] - The Leptos [`Droplet`](components::Droplet) component
//! - [`models`] - Configuration, class and validation types
//! - [`utils`] - `web-sys` backend

pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use components::Droplet;
pub use crate::core::{AcceptSpec, Intake};
pub use models::IntakeConfig;
