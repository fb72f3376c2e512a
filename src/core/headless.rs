//! In-memory platform for native hosts and tests.
//!
//! Regions keep an ordered class list, the picker models a browser file
//! input (including the "same value fires no change" rule), and events record
//! whether their default was suppressed.

use std::cell::{Cell, RefCell};

use crate::core::platform::{DragPayload, FileDescriptor, Picker, Platform, Region};
use crate::models::{ClassTokens, Cursor};

/// Headless backend marker.
#[derive(Debug)]
pub struct Headless;

impl Platform for Headless {
    type File = NamedFile;
    type Region = MemoryRegion;
    type Picker = MemoryPicker;
    type ClickEvent = HeadlessEvent;
    type ChangeEvent = HeadlessEvent;
    type DragEvent = HeadlessEvent;
}

/// A file known only by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedFile {
    name: String,
}

impl NamedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FileDescriptor for NamedFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }
}

/// Region with an ordered class list and cursor.
#[derive(Debug, Default)]
pub struct MemoryRegion {
    classes: RefCell<Vec<String>>,
    cursor: Cell<Option<Cursor>>,
}

impl MemoryRegion {
    /// Region whose class attribute starts as `class_attr`.
    pub fn new(class_attr: &str) -> Self {
        let region = Self::default();
        region.add_classes(&ClassTokens::parse(class_attr));
        region
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == token)
    }

    /// Last cursor set, `None` if never styled.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor.get()
    }
}

impl Region for MemoryRegion {
    fn add_classes(&self, tokens: &ClassTokens) {
        let mut classes = self.classes.borrow_mut();
        for token in tokens.iter() {
            if !classes.iter().any(|c| c == token) {
                classes.push(token.to_string());
            }
        }
    }

    fn remove_classes(&self, tokens: &ClassTokens) {
        self.classes.borrow_mut().retain(|c| !tokens.contains(c));
    }

    fn set_cursor(&self, cursor: Cursor) {
        self.cursor.set(Some(cursor));
    }
}

/// File input model.
///
/// [`MemoryPicker::choose`] reports whether the browser would fire a change
/// event: only when the new selection differs from the stored value.
#[derive(Debug, Default)]
pub struct MemoryPicker {
    value: RefCell<Option<Vec<NamedFile>>>,
    opened: Cell<usize>,
}

impl MemoryPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user confirming `files` in the dialog.
    ///
    /// Returns `true` when a change event should be dispatched.
    pub fn choose(&self, files: Vec<NamedFile>) -> bool {
        let mut value = self.value.borrow_mut();
        if value.as_ref() == Some(&files) {
            return false;
        }
        *value = Some(files);
        true
    }

    /// Number of times the dialog was opened.
    pub fn open_count(&self) -> usize {
        self.opened.get()
    }

    pub fn has_value(&self) -> bool {
        self.value.borrow().is_some()
    }
}

impl Picker for MemoryPicker {
    type File = NamedFile;

    fn open(&self) {
        self.opened.set(self.opened.get() + 1);
    }

    fn selection(&self) -> Option<Vec<NamedFile>> {
        self.value.borrow().clone()
    }

    fn reset(&self) {
        self.value.borrow_mut().take();
    }
}

/// Native event stand-in, optionally carrying dropped files.
#[derive(Debug, Default)]
pub struct HeadlessEvent {
    files: Vec<NamedFile>,
    default_prevented: Cell<bool>,
}

impl HeadlessEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drag/drop event carrying `files`.
    pub fn with_files(files: Vec<NamedFile>) -> Self {
        Self {
            files,
            default_prevented: Cell::new(false),
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl DragPayload for HeadlessEvent {
    type File = NamedFile;

    fn suppress_default(&self) {
        self.default_prevented.set(true);
    }

    fn files(&self) -> Vec<NamedFile> {
        self.files.clone()
    }
}
