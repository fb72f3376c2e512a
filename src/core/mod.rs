//! Core intake logic, independent of any rendering backend.
//!
//! This module provides:
//! - [`AcceptSpec`] extension allow-list parsing and batch validation
//! - [`sync`] class-list synchronization for surface, icon and label
//! - [`Intake`] event dispatching with per-event override [`Strategy`]
//! - [`ContentPlan`] slot resolution for custom icon/label rendering
//! - [`Platform`] traits and the in-memory [`headless`] backend

mod accept;
mod dispatch;
pub mod error;
pub mod headless;
mod platform;
mod slots;
pub mod sync;

pub use accept::AcceptSpec;
pub use dispatch::{
    Delivery, Dispatch, DragOverReset, Hook, Intake, InvalidCallback, OverrideBundle, Overrides,
    Strategy, UploadCallback,
};
pub use platform::{DragPayload, FileDescriptor, Picker, Platform, Region, RegionSet};
pub use slots::{ContentPlan, Slot};
