//! DOM backend for the intake core.
//!
//! Implements the platform traits on `web-sys` types. DOM calls that can
//! throw (`classList.add`, style writes) are ignored rather than surfaced.

use web_sys::{DataTransfer, DragEvent, File, FileList, HtmlElement, HtmlInputElement, MouseEvent};

use crate::core::{DragPayload, FileDescriptor, Picker, Platform, Region};
use crate::models::{ClassTokens, Cursor};

/// Browser backend marker.
#[derive(Debug)]
pub struct Dom;

impl Platform for Dom {
    type File = File;
    type Region = HtmlElement;
    type Picker = HtmlInputElement;
    type ClickEvent = MouseEvent;
    type ChangeEvent = web_sys::Event;
    type DragEvent = DragEvent;
}

/// Collect a `FileList` into a vector, keeping its order.
pub fn file_list_to_vec(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Files carried by a data transfer, if any.
fn transfer_files(transfer: Option<DataTransfer>) -> Vec<File> {
    transfer
        .and_then(|dt| dt.files())
        .map(|list| file_list_to_vec(&list))
        .unwrap_or_default()
}

impl FileDescriptor for File {
    fn file_name(&self) -> String {
        self.name()
    }
}

impl Region for HtmlElement {
    fn add_classes(&self, tokens: &ClassTokens) {
        let list = self.class_list();
        for token in tokens.iter() {
            let _ = list.add_1(token);
        }
    }

    fn remove_classes(&self, tokens: &ClassTokens) {
        let list = self.class_list();
        for token in tokens.iter() {
            let _ = list.remove_1(token);
        }
    }

    fn set_cursor(&self, cursor: Cursor) {
        let _ = self.style().set_property("cursor", cursor.as_css());
    }
}

impl Picker for HtmlInputElement {
    type File = File;

    fn open(&self) {
        self.click();
    }

    fn selection(&self) -> Option<Vec<File>> {
        self.files().map(|list| file_list_to_vec(&list))
    }

    fn reset(&self) {
        self.set_value("");
    }
}

impl DragPayload for DragEvent {
    type File = File;

    fn suppress_default(&self) {
        self.prevent_default();
    }

    fn files(&self) -> Vec<File> {
        transfer_files(self.data_transfer())
    }
}
