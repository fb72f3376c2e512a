//! Drag-and-drop file intake component.
//!
//! Binds the DOM elements of the surface to an [`Intake`] kept in a local
//! stored value. Event handlers resolve the current region handles from the
//! node refs and hand them to the dispatcher.

use leptos::html::{Div, Input, Label};
use leptos::reactive::owner::LocalStorage;
use leptos::{ev, prelude::*};
use web_sys::{File, HtmlElement};

use crate::config::{DEFAULT_ICON, DEFAULT_LABEL};
use crate::core::{ContentPlan, Dispatch, Intake, RegionSet, Slot};
use crate::models::{ClassnameSet, IntakeConfig, InvalidFiles, RegionKind};
use crate::utils::Dom;

/// Region handles of a mounted surface.
///
/// Passed to override callbacks so they can read or restyle the regions.
#[derive(Clone, Copy)]
pub struct DropletHandles {
    pub surface: NodeRef<Div>,
    pub picker: NodeRef<Input>,
    pub icon: NodeRef<Div>,
    pub label: NodeRef<Label>,
    intake: StoredValue<Intake<Dom>, LocalStorage>,
}

impl DropletHandles {
    fn regions(&self) -> RegionSet<HtmlElement> {
        RegionSet::new(
            self.surface.get_untracked().map(HtmlElement::from),
            self.icon.get_untracked().map(HtmlElement::from),
            self.label.get_untracked().map(HtmlElement::from),
        )
    }

    fn clear_drag_over(&self) {
        let regions = self.regions();
        self.intake.with_value(|core| core.clear_drag_over(&regions));
    }
}

/// Payload of the click, change, drop and drag-leave overrides.
pub struct OverrideEvent<E> {
    pub event: E,
    pub handles: DropletHandles,
}

impl<E> OverrideEvent<E> {
    /// Remove the drag-over classes from surface, icon and label.
    pub fn remove_drag_over_style(&self) {
        self.handles.clear_drag_over();
    }
}

/// Payload of the drag-over override. Drag-over never clears styling, so no
/// clearing method is offered.
pub struct DragOverEvent {
    pub event: ev::DragEvent,
    pub handles: DropletHandles,
}

/// Region refs handed to a combined content renderer.
#[derive(Clone, Copy)]
pub struct ContentRefs {
    pub icon: NodeRef<Div>,
    pub label: NodeRef<Label>,
}

fn log_dispatch(event: &str, dispatch: Dispatch) {
    if let Dispatch::Delivered(delivery) = dispatch {
        web_sys::console::debug_1(&format!("droplet: {} -> {:?}", event, delivery).into());
    }
}

/// File intake surface accepting clicks and drops.
///
/// Files are checked against `accept`; a fully valid batch goes to
/// `on_upload_files`, otherwise `on_invalid_files` receives the partition.
/// Each `override_*` callback replaces the built-in handling of its event.
#[component]
pub fn Droplet(
    /// Comma-separated extension allow-list, e.g. `".jpg,.png"`.
    #[prop(into, optional)]
    accept: MaybeProp<String>,
    /// Allow selecting several files in the picker.
    #[prop(into, optional)]
    multiple: MaybeProp<bool>,
    /// Gate all file-accepting behavior.
    #[prop(into, optional)]
    disabled: MaybeProp<bool>,
    #[prop(optional)] classnames: ClassnameSet,
    /// Custom icon, attached to the given ref.
    #[prop(optional, into)]
    icon: Option<Callback<NodeRef<Div>, AnyView>>,
    /// Custom label, attached to the given ref.
    #[prop(optional, into)]
    label: Option<Callback<NodeRef<Label>, AnyView>>,
    /// Replaces icon and label entirely.
    #[prop(optional, into)]
    content: Option<Callback<ContentRefs, AnyView>>,
    #[prop(optional, into)] on_upload_files: Option<Callback<Vec<File>>>,
    #[prop(optional, into)] on_invalid_files: Option<Callback<InvalidFiles<File>>>,
    #[prop(optional, into)] override_click: Option<Callback<OverrideEvent<ev::MouseEvent>>>,
    #[prop(optional, into)] override_change: Option<Callback<OverrideEvent<ev::Event>>>,
    #[prop(optional, into)] override_drag_over: Option<Callback<DragOverEvent>>,
    #[prop(optional, into)] override_drop: Option<Callback<OverrideEvent<ev::DragEvent>>>,
    #[prop(optional, into)] override_drag_leave: Option<Callback<OverrideEvent<ev::DragEvent>>>,
) -> impl IntoView {
    let surface_ref = NodeRef::<Div>::new();
    let picker_ref = NodeRef::<Input>::new();
    let icon_ref = NodeRef::<Div>::new();
    let label_ref = NodeRef::<Label>::new();

    let config = IntakeConfig {
        accept: accept.get_untracked(),
        multiple: multiple.get_untracked().unwrap_or(false),
        disabled: disabled.get_untracked().unwrap_or(false),
        classnames,
    };

    let mut core = Intake::<Dom>::new(&config);
    if let Some(cb) = on_upload_files {
        core = core.on_upload_files(move |files| cb.run(files));
    }
    if let Some(cb) = on_invalid_files {
        core = core.on_invalid_files(move |data| cb.run(data));
    }
    let intake = StoredValue::new_local(core);

    let handles = DropletHandles {
        surface: surface_ref,
        picker: picker_ref,
        icon: icon_ref,
        label: label_ref,
        intake,
    };

    // Overrides need the handles, which need the stored intake
    intake.update_value(|core| {
        let overrides = core.overrides_mut();
        if let Some(cb) = override_click {
            overrides.set_click(move |_, event| {
                cb.run(OverrideEvent {
                    event: event.clone(),
                    handles,
                })
            });
        }
        if let Some(cb) = override_change {
            overrides.set_picker_change(move |_, event| {
                cb.run(OverrideEvent {
                    event: event.clone(),
                    handles,
                })
            });
        }
        if let Some(cb) = override_drag_over {
            overrides.set_drag_over(move |_, event| {
                cb.run(DragOverEvent {
                    event: event.clone(),
                    handles,
                })
            });
        }
        if let Some(cb) = override_drop {
            overrides.set_drop(move |_, event| {
                cb.run(OverrideEvent {
                    event: event.clone(),
                    handles,
                })
            });
        }
        if let Some(cb) = override_drag_leave {
            overrides.set_drag_leave(move |_, event| {
                cb.run(OverrideEvent {
                    event: event.clone(),
                    handles,
                })
            });
        }
    });

    // Runs once the regions are mounted, then on every disabled change
    Effect::new(move |_| {
        let is_disabled = disabled.get().unwrap_or(false);
        let regions = handles.regions();
        intake.with_value(|core| core.set_disabled(is_disabled, &regions));
    });

    Effect::new(move |_| {
        let raw = accept.get();
        intake.update_value(|core| core.set_accept(raw.as_deref()));
    });

    let on_click = move |event: ev::MouseEvent| {
        let regions = handles.regions();
        let picker = picker_ref.get_untracked();
        intake.with_value(|core| core.on_click(&regions, picker.as_ref(), &event));
    };

    let on_change = move |event: ev::Event| {
        let Some(picker) = picker_ref.get_untracked() else {
            return;
        };
        let regions = handles.regions();
        let dispatch = intake.with_value(|core| core.on_picker_change(&regions, &picker, &event));
        log_dispatch("change", dispatch);
    };

    let on_drag_over = move |event: ev::DragEvent| {
        let regions = handles.regions();
        let picker = picker_ref.get_untracked();
        intake.with_value(|core| core.on_drag_over(&regions, picker.as_ref(), &event));
    };

    let on_drop = move |event: ev::DragEvent| {
        let regions = handles.regions();
        let picker = picker_ref.get_untracked();
        let dispatch = intake.with_value(|core| core.on_drop(&regions, picker.as_ref(), &event));
        log_dispatch("drop", dispatch);
    };

    let on_drag_leave = move |event: ev::DragEvent| {
        let regions = handles.regions();
        let picker = picker_ref.get_untracked();
        intake.with_value(|core| core.on_drag_leave(&regions, picker.as_ref(), &event));
    };

    let (surface_class, icon_class, label_class) = intake.with_value(|core| {
        (
            core.resolve_class(RegionKind::Surface),
            core.resolve_class(RegionKind::Icon),
            core.resolve_class(RegionKind::Label),
        )
    });

    let body = match ContentPlan::resolve(content, icon, label) {
        ContentPlan::Combined(render) => render.run(ContentRefs {
            icon: icon_ref,
            label: label_ref,
        }),
        ContentPlan::Regions { icon, label } => {
            let icon_view = match icon {
                Slot::Custom(render) => render.run(icon_ref),
                Slot::Default => view! {
                    <div node_ref=icon_ref class=icon_class>
                        {DEFAULT_ICON}
                    </div>
                }
                .into_any(),
            };
            let label_view = match label {
                Slot::Custom(render) => render.run(label_ref),
                Slot::Default => view! {
                    <label node_ref=label_ref class=label_class>
                        {DEFAULT_LABEL}
                    </label>
                }
                .into_any(),
            };
            view! { {icon_view} {label_view} }.into_any()
        }
    };

    view! {
        <div
            node_ref=surface_ref
            class=surface_class
            on:click=on_click
            on:dragenter=on_drag_over
            on:dragover=on_drag_over
            on:drop=on_drop
            on:dragleave=on_drag_leave
        >
            <input
                node_ref=picker_ref
                type="file"
                hidden=true
                accept=move || accept.get().unwrap_or_default()
                multiple=move || multiple.get().unwrap_or(false)
                disabled=move || disabled.get().unwrap_or(false)
                // The surface handler opens the picker; don't re-enter it
                on:click=|event: ev::MouseEvent| event.stop_propagation()
                on:change=on_change
            />
            {body}
        </div>
    }
}
