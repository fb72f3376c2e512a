//! UI components built with Leptos.
//!
//! - [`Droplet`] - File intake surface (click-to-browse and drag-and-drop)

mod droplet;

pub use droplet::{ContentRefs, DragOverEvent, Droplet, DropletHandles, OverrideEvent};
