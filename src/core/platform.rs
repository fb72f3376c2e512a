//! Platform seam between the intake logic and a rendering backend.
//!
//! The dispatcher only talks to regions, the picker, files and native
//! events through these traits. [`crate::core::headless`] implements them
//! in memory, [`crate::utils::dom`] on top of `web-sys`.

use crate::models::{ClassTokens, Cursor, RegionKind};

/// A file handle whose name carries the extension.
pub trait FileDescriptor {
    fn file_name(&self) -> String;
}

/// A styled area whose class membership the synchronizer manages.
///
/// Operations take `&self`: regions are handles into state owned elsewhere.
pub trait Region {
    /// Add every token; tokens already present are left alone.
    fn add_classes(&self, tokens: &ClassTokens);
    /// Remove every token; absent tokens are ignored.
    fn remove_classes(&self, tokens: &ClassTokens);
    fn set_cursor(&self, cursor: Cursor);
}

/// The hidden native file-selection control.
pub trait Picker {
    type File;

    /// Open the selection dialog.
    fn open(&self);
    /// Files of the current selection, `None` when the control has none.
    fn selection(&self) -> Option<Vec<Self::File>>;
    /// Clear the stored value so an identical selection fires again.
    fn reset(&self);
}

/// A drag-and-drop event.
pub trait DragPayload {
    type File;

    /// Suppress the platform default (navigating to a dropped file).
    fn suppress_default(&self);
    /// Files carried by the event, in transfer order.
    fn files(&self) -> Vec<Self::File>;
}

/// Bundle of concrete types a backend provides.
pub trait Platform: 'static {
    type File: FileDescriptor + Clone;
    type Region: Region;
    type Picker: Picker<File = Self::File>;
    type ClickEvent;
    type ChangeEvent;
    type DragEvent: DragPayload<File = Self::File>;
}

/// The three region handles of one surface.
///
/// A handle is `None` until the backend has materialized the region, or when
/// a custom renderer never attached it; absent regions are skipped.
#[derive(Debug)]
pub struct RegionSet<R> {
    pub surface: Option<R>,
    pub icon: Option<R>,
    pub label: Option<R>,
}

impl<R> RegionSet<R> {
    pub fn new(surface: Option<R>, icon: Option<R>, label: Option<R>) -> Self {
        Self {
            surface,
            icon,
            label,
        }
    }

    pub fn get(&self, kind: RegionKind) -> Option<&R> {
        match kind {
            RegionKind::Surface => self.surface.as_ref(),
            RegionKind::Icon => self.icon.as_ref(),
            RegionKind::Label => self.label.as_ref(),
        }
    }

    /// Present regions with their kind, in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionKind, &R)> {
        RegionKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|region| (kind, region)))
    }
}

impl<R> Default for RegionSet<R> {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}
