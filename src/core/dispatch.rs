//! Interaction dispatcher.
//!
//! [`Intake`] owns the configuration and state of one surface and handles
//! click, picker-change, drag-over, drop and drag-leave events. For each
//! event the configured [`Strategy`] is inspected first: an override fully
//! replaces the default path, which then never runs.

use std::rc::Rc;

use crate::core::accept::AcceptSpec;
use crate::core::platform::{DragPayload, Picker, Platform, RegionSet};
use crate::core::sync;
use crate::models::{ClassnameSet, IntakeConfig, InteractionState, InvalidFiles, RegionKind};

/// Caller handler replacing the default behavior of one event.
pub type Hook<P, E> = Rc<dyn Fn(&OverrideBundle<'_, P>, &E)>;

/// Receives an accepted batch.
pub type UploadCallback<F> = Rc<dyn Fn(Vec<F>)>;

/// Receives a rejected batch with its partition.
pub type InvalidCallback<F> = Rc<dyn Fn(InvalidFiles<F>)>;

/// Per-event choice between the built-in policy and a caller override.
pub enum Strategy<H> {
    Default,
    Override(H),
}

impl<H> Default for Strategy<H> {
    fn default() -> Self {
        Self::Default
    }
}

/// Strategies for every event of the surface.
pub struct Overrides<P: Platform> {
    pub click: Strategy<Hook<P, P::ClickEvent>>,
    pub picker_change: Strategy<Hook<P, P::ChangeEvent>>,
    pub drag_over: Strategy<Hook<P, P::DragEvent>>,
    pub drop: Strategy<Hook<P, P::DragEvent>>,
    pub drag_leave: Strategy<Hook<P, P::DragEvent>>,
}

impl<P: Platform> Overrides<P> {
    pub fn set_click(
        &mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::ClickEvent) + 'static,
    ) {
        self.click = Strategy::Override(Rc::new(hook));
    }

    pub fn set_picker_change(
        &mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::ChangeEvent) + 'static,
    ) {
        self.picker_change = Strategy::Override(Rc::new(hook));
    }

    pub fn set_drag_over(
        &mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::DragEvent) + 'static,
    ) {
        self.drag_over = Strategy::Override(Rc::new(hook));
    }

    pub fn set_drop(
        &mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::DragEvent) + 'static,
    ) {
        self.drop = Strategy::Override(Rc::new(hook));
    }

    pub fn set_drag_leave(
        &mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::DragEvent) + 'static,
    ) {
        self.drag_leave = Strategy::Override(Rc::new(hook));
    }
}

impl<P: Platform> Default for Overrides<P> {
    fn default() -> Self {
        Self {
            click: Strategy::Default,
            picker_change: Strategy::Default,
            drag_over: Strategy::Default,
            drop: Strategy::Default,
            drag_leave: Strategy::Default,
        }
    }
}

/// Clears drag-over styling of the surface it was created for.
pub struct DragOverReset<'a, P: Platform> {
    regions: &'a RegionSet<P::Region>,
    classes: &'a ClassnameSet,
    state: &'a InteractionState,
}

impl<P: Platform> DragOverReset<'_, P> {
    /// Remove `onDragOver` tokens from all regions. Safe to call repeatedly.
    pub fn run(&self) {
        sync::remove_drag_over(self.regions, self.classes);
        self.state.set_drag_over(false);
    }
}

/// Data handed to an override hook.
///
/// All references borrow from the dispatch call, so a hook cannot keep them
/// beyond the event it handles.
pub struct OverrideBundle<'a, P: Platform> {
    pub regions: &'a RegionSet<P::Region>,
    pub picker: Option<&'a P::Picker>,
    reset: Option<DragOverReset<'a, P>>,
}

impl<'a, P: Platform> OverrideBundle<'a, P> {
    pub fn surface(&self) -> Option<&'a P::Region> {
        self.regions.surface.as_ref()
    }

    pub fn icon(&self) -> Option<&'a P::Region> {
        self.regions.icon.as_ref()
    }

    pub fn label(&self) -> Option<&'a P::Region> {
        self.regions.label.as_ref()
    }

    /// Drag-over clearing callback; absent for drag-over hooks.
    pub fn drag_over_reset(&self) -> Option<&DragOverReset<'a, P>> {
        self.reset.as_ref()
    }

    /// Run the clearing callback if this bundle offers one.
    pub fn remove_drag_over_style(&self) -> bool {
        match &self.reset {
            Some(reset) => {
                reset.run();
                true
            }
            None => false,
        }
    }
}

/// Outcome of [`Intake::set_files`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// No upload callback registered
    Unwired,
    /// Surface disabled
    Disabled,
    /// At least one file failed the allow-list; upload skipped
    Rejected { invalid: usize },
    /// Whole batch passed to the upload callback
    Uploaded { count: usize },
}

/// Outcome of one event handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Guard failed; nothing ran
    Skipped,
    /// Caller override ran instead of the default
    Overridden,
    /// Default styling or picker action ran
    Applied,
    /// Default path ran and delivered a batch
    Delivered(Delivery),
}

/// Configuration, state and handlers of one intake surface.
pub struct Intake<P: Platform> {
    accept: AcceptSpec,
    classes: ClassnameSet,
    state: InteractionState,
    on_upload_files: Option<UploadCallback<P::File>>,
    on_invalid_files: Option<InvalidCallback<P::File>>,
    overrides: Overrides<P>,
}

impl<P: Platform> Intake<P> {
    pub fn new(config: &IntakeConfig) -> Self {
        Self {
            accept: AcceptSpec::from_option(config.accept.as_deref()),
            classes: config.classnames.clone(),
            state: InteractionState::new(config.disabled),
            on_upload_files: None,
            on_invalid_files: None,
            overrides: Overrides::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    pub fn on_upload_files(mut self, callback: impl Fn(Vec<P::File>) + 'static) -> Self {
        self.on_upload_files = Some(Rc::new(callback));
        self
    }

    pub fn on_invalid_files(
        mut self,
        callback: impl Fn(InvalidFiles<P::File>) + 'static,
    ) -> Self {
        self.on_invalid_files = Some(Rc::new(callback));
        self
    }

    pub fn override_click(
        mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::ClickEvent) + 'static,
    ) -> Self {
        self.overrides.set_click(hook);
        self
    }

    pub fn override_picker_change(
        mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::ChangeEvent) + 'static,
    ) -> Self {
        self.overrides.set_picker_change(hook);
        self
    }

    pub fn override_drag_over(
        mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::DragEvent) + 'static,
    ) -> Self {
        self.overrides.set_drag_over(hook);
        self
    }

    pub fn override_drop(
        mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::DragEvent) + 'static,
    ) -> Self {
        self.overrides.set_drop(hook);
        self
    }

    pub fn override_drag_leave(
        mut self,
        hook: impl Fn(&OverrideBundle<'_, P>, &P::DragEvent) + 'static,
    ) -> Self {
        self.overrides.set_drag_leave(hook);
        self
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    pub fn accept(&self) -> &AcceptSpec {
        &self.accept
    }

    /// Recompute the accept spec from a new raw accept string.
    pub fn set_accept(&mut self, raw: Option<&str>) {
        self.accept = AcceptSpec::from_option(raw);
    }

    pub fn classnames(&self) -> &ClassnameSet {
        &self.classes
    }

    pub fn overrides_mut(&mut self) -> &mut Overrides<P> {
        &mut self.overrides
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    /// Class attribute for a region at render time.
    pub fn resolve_class(&self, kind: RegionKind) -> String {
        self.classes.resolve(kind, self.state.is_disabled())
    }

    // -------------------------------------------------------------------------
    // Visual state
    // -------------------------------------------------------------------------

    /// Apply the current disabled affordance once the regions exist.
    pub fn mount(&self, regions: &RegionSet<P::Region>) {
        sync::apply_disabled(regions, &self.classes, self.state.is_disabled());
    }

    /// Switch the disabled gate and restyle the regions.
    ///
    /// Disabling clears any drag-over styling so drag-over never outlives
    /// the gate.
    pub fn set_disabled(&self, disabled: bool, regions: &RegionSet<P::Region>) {
        if disabled && self.state.is_drag_over() {
            self.clear_drag_over(regions);
        }
        self.state.set_disabled(disabled);
        sync::apply_disabled(regions, &self.classes, disabled);
    }

    /// Remove drag-over styling from every region.
    pub fn clear_drag_over(&self, regions: &RegionSet<P::Region>) {
        self.reset(regions).run();
    }

    fn reset<'a>(&'a self, regions: &'a RegionSet<P::Region>) -> DragOverReset<'a, P> {
        DragOverReset {
            regions,
            classes: &self.classes,
            state: &self.state,
        }
    }

    fn bundle<'a>(
        &'a self,
        regions: &'a RegionSet<P::Region>,
        picker: Option<&'a P::Picker>,
        with_reset: bool,
    ) -> OverrideBundle<'a, P> {
        OverrideBundle {
            regions,
            picker,
            reset: with_reset.then(|| self.reset(regions)),
        }
    }

    // -------------------------------------------------------------------------
    // Delivery
    // -------------------------------------------------------------------------

    /// Validate a batch and report it to the caller.
    ///
    /// Verification is all-or-nothing: a verified batch goes to the upload
    /// callback whole, a rejected one only to the invalid-files callback. An
    /// empty batch is trivially verified and uploaded as such.
    pub fn set_files(&self, batch: Vec<P::File>) -> Delivery {
        let Some(upload) = &self.on_upload_files else {
            return Delivery::Unwired;
        };
        if self.state.is_disabled() {
            return Delivery::Disabled;
        }

        let result = self.accept.validate(&batch);
        if !result.is_verified() {
            let invalid = result.invalid_files.len();
            if let Some(report) = &self.on_invalid_files {
                report(InvalidFiles::from(result));
            }
            return Delivery::Rejected { invalid };
        }

        let count = batch.len();
        upload(batch);
        Delivery::Uploaded { count }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Surface activation: open the picker.
    pub fn on_click(
        &self,
        regions: &RegionSet<P::Region>,
        picker: Option<&P::Picker>,
        event: &P::ClickEvent,
    ) -> Dispatch {
        let Some(picker) = picker else {
            return Dispatch::Skipped;
        };

        if let Strategy::Override(hook) = &self.overrides.click {
            hook(&self.bundle(regions, Some(picker), true), event);
            return Dispatch::Overridden;
        }

        picker.open();
        Dispatch::Applied
    }

    /// Picker selection confirmed.
    ///
    /// The default path resets the picker after delivery; without the reset
    /// choosing the same file again would not fire another change.
    pub fn on_picker_change(
        &self,
        regions: &RegionSet<P::Region>,
        picker: &P::Picker,
        event: &P::ChangeEvent,
    ) -> Dispatch {
        let Some(files) = picker.selection() else {
            return Dispatch::Skipped;
        };

        if let Strategy::Override(hook) = &self.overrides.picker_change {
            hook(&self.bundle(regions, Some(picker), true), event);
            return Dispatch::Overridden;
        }

        let delivery = self.set_files(files);
        picker.reset();
        Dispatch::Delivered(delivery)
    }

    /// Drag enter or drag over the surface.
    pub fn on_drag_over(
        &self,
        regions: &RegionSet<P::Region>,
        picker: Option<&P::Picker>,
        event: &P::DragEvent,
    ) -> Dispatch {
        event.suppress_default();
        if self.state.is_disabled() {
            return Dispatch::Skipped;
        }

        if let Strategy::Override(hook) = &self.overrides.drag_over {
            hook(&self.bundle(regions, picker, false), event);
            return Dispatch::Overridden;
        }

        sync::add_drag_over(regions, &self.classes);
        self.state.set_drag_over(true);
        Dispatch::Applied
    }

    /// Files dropped on the surface.
    pub fn on_drop(
        &self,
        regions: &RegionSet<P::Region>,
        picker: Option<&P::Picker>,
        event: &P::DragEvent,
    ) -> Dispatch {
        event.suppress_default();
        if self.state.is_disabled() {
            return Dispatch::Skipped;
        }

        if let Strategy::Override(hook) = &self.overrides.drop {
            hook(&self.bundle(regions, picker, true), event);
            return Dispatch::Overridden;
        }

        let delivery = self.set_files(event.files());
        self.clear_drag_over(regions);
        Dispatch::Delivered(delivery)
    }

    /// Drag left the surface.
    pub fn on_drag_leave(
        &self,
        regions: &RegionSet<P::Region>,
        picker: Option<&P::Picker>,
        event: &P::DragEvent,
    ) -> Dispatch {
        if let Strategy::Override(hook) = &self.overrides.drag_leave {
            hook(&self.bundle(regions, picker, true), event);
            return Dispatch::Overridden;
        }

        self.clear_drag_over(regions);
        Dispatch::Applied
    }
}
