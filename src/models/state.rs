//! Per-instance interaction state.

use std::cell::Cell;

/// `disabled` and `drag-over` flags of one intake surface.
///
/// Cells let override hooks clear drag-over styling while a dispatch holds
/// a shared borrow of the surface.
#[derive(Debug, Default)]
pub struct InteractionState {
    disabled: Cell<bool>,
    drag_over: Cell<bool>,
}

impl InteractionState {
    pub fn new(disabled: bool) -> Self {
        Self {
            disabled: Cell::new(disabled),
            drag_over: Cell::new(false),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over.get()
    }

    pub(crate) fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    pub(crate) fn set_drag_over(&self, drag_over: bool) {
        self.drag_over.set(drag_over && !self.disabled.get());
    }
}
