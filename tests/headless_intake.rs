//! End-to-end intake scenarios on the headless backend.

use std::cell::RefCell;
use std::rc::Rc;

use droplet::core::headless::{Headless, HeadlessEvent, MemoryPicker, MemoryRegion, NamedFile};
use droplet::core::{Delivery, Dispatch, Intake, RegionSet};
use droplet::models::{ClassnameSet, IntakeConfig, InvalidFiles, RegionClasses, RegionKind};

#[derive(Debug, PartialEq)]
enum Reported {
    Upload(Vec<String>),
    Invalid {
        error: String,
        invalid: Vec<String>,
        valid: Vec<String>,
    },
}

fn names(files: &[NamedFile]) -> Vec<String> {
    files.iter().map(|f| f.name().to_string()).collect()
}

fn files(list: &[&str]) -> Vec<NamedFile> {
    list.iter().map(|n| NamedFile::new(*n)).collect()
}

fn styled() -> ClassnameSet {
    let region = |over: &str| RegionClasses {
        default: None,
        on_disabled: Some("is-disabled".into()),
        on_drag_over: Some(over.into()),
    };
    ClassnameSet {
        surface: region("surface-over"),
        icon: region("icon-over"),
        label: region("label-over"),
    }
}

type Log = Rc<RefCell<Vec<Reported>>>;

/// Intake wired to a shared report log, plus mounted regions.
fn mount(config: IntakeConfig) -> (Intake<Headless>, RegionSet<MemoryRegion>, Log) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let uploads = log.clone();
    let invalids = log.clone();

    let intake = Intake::<Headless>::new(&config)
        .on_upload_files(move |batch| uploads.borrow_mut().push(Reported::Upload(names(&batch))))
        .on_invalid_files(move |data: InvalidFiles<NamedFile>| {
            invalids.borrow_mut().push(Reported::Invalid {
                error: data.error.to_string(),
                invalid: names(&data.invalid_files),
                valid: names(&data.valid_files),
            })
        });

    let regions = RegionSet::new(
        Some(MemoryRegion::new(&intake.resolve_class(RegionKind::Surface))),
        Some(MemoryRegion::new(&intake.resolve_class(RegionKind::Icon))),
        Some(MemoryRegion::new(&intake.resolve_class(RegionKind::Label))),
    );
    intake.mount(&regions);

    (intake, regions, log)
}

fn snapshot(regions: &RegionSet<MemoryRegion>) -> Vec<Vec<String>> {
    regions.iter().map(|(_, r)| r.classes()).collect()
}

#[test]
fn mixed_batch_reports_invalid_files_only() {
    let (intake, regions, log) = mount(IntakeConfig {
        accept: Some(".jpg,.png".into()),
        ..Default::default()
    });

    let drop = HeadlessEvent::with_files(files(&["a.jpg", "b.txt"]));
    assert_eq!(
        intake.on_drop(&regions, None, &drop),
        Dispatch::Delivered(Delivery::Rejected { invalid: 1 })
    );

    assert_eq!(
        *log.borrow(),
        vec![Reported::Invalid {
            error: "Invalid file upload.".into(),
            invalid: vec!["b.txt".into()],
            valid: vec!["a.jpg".into()],
        }]
    );
}

#[test]
fn empty_accept_uploads_anything() {
    let (intake, regions, log) = mount(IntakeConfig {
        accept: Some(String::new()),
        ..Default::default()
    });

    let drop = HeadlessEvent::with_files(files(&["a.anything"]));
    intake.on_drop(&regions, None, &drop);

    assert_eq!(*log.borrow(), vec![Reported::Upload(vec!["a.anything".into()])]);
}

#[test]
fn disabled_surface_never_reports() {
    let (intake, regions, log) = mount(IntakeConfig {
        accept: Some(".png".into()),
        disabled: true,
        ..Default::default()
    });

    assert_eq!(intake.set_files(files(&["a.png"])), Delivery::Disabled);
    assert_eq!(intake.set_files(files(&["a.txt"])), Delivery::Disabled);

    let picker = MemoryPicker::new();
    picker.choose(files(&["a.png"]));
    assert_eq!(
        intake.on_picker_change(&regions, &picker, &HeadlessEvent::new()),
        Dispatch::Delivered(Delivery::Disabled)
    );
    assert!(log.borrow().is_empty());
}

#[test]
fn drag_enter_while_disabled_changes_no_classes() {
    let (intake, regions, _) = mount(IntakeConfig {
        disabled: true,
        classnames: styled(),
        ..Default::default()
    });
    let before = snapshot(&regions);

    let event = HeadlessEvent::new();
    assert_eq!(intake.on_drag_over(&regions, None, &event), Dispatch::Skipped);
    assert!(event.default_prevented());
    assert_eq!(snapshot(&regions), before);
}

#[test]
fn drag_over_styles_all_regions_and_clearing_is_idempotent() {
    let (intake, regions, _) = mount(IntakeConfig {
        classnames: styled(),
        ..Default::default()
    });
    let before = snapshot(&regions);

    intake.on_drag_over(&regions, None, &HeadlessEvent::new());
    assert!(regions.surface.as_ref().unwrap().has_class("surface-over"));
    assert!(regions.icon.as_ref().unwrap().has_class("icon-over"));
    assert!(regions.label.as_ref().unwrap().has_class("label-over"));

    intake.clear_drag_over(&regions);
    let once = snapshot(&regions);
    intake.clear_drag_over(&regions);
    assert_eq!(snapshot(&regions), once);
    assert_eq!(once, before);
}

#[test]
fn reselecting_the_same_file_validates_twice() {
    let (intake, regions, log) = mount(IntakeConfig::default());
    let picker = MemoryPicker::new();

    for _ in 0..2 {
        assert!(picker.choose(files(&["same.png"])), "change event must fire");
        intake.on_picker_change(&regions, &picker, &HeadlessEvent::new());
    }

    assert_eq!(log.borrow().len(), 2);
    assert!(!picker.has_value());
}

#[test]
fn drop_override_replaces_default_logic() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();

    let (intake, regions, log) = mount(IntakeConfig {
        accept: Some(".png".into()),
        classnames: styled(),
        ..Default::default()
    });
    let intake = intake.override_drop(move |bundle, event| {
        assert!(bundle.surface().is_some());
        assert!(bundle.icon().is_some());
        assert!(bundle.label().is_some());
        sink.borrow_mut().push(names(&droplet::core::DragPayload::files(event)));
    });

    intake.on_drag_over(&regions, None, &HeadlessEvent::new());
    let drop = HeadlessEvent::with_files(files(&["a.txt", "b.png"]));
    assert_eq!(intake.on_drop(&regions, None, &drop), Dispatch::Overridden);

    assert!(drop.default_prevented());
    assert!(log.borrow().is_empty());
    assert_eq!(*received.borrow(), vec![vec!["a.txt".to_string(), "b.png".to_string()]]);
    // Default clearing did not run either
    assert!(regions.surface.as_ref().unwrap().has_class("surface-over"));
}

#[test]
fn toggling_disabled_restyles_regions() {
    let (intake, regions, _) = mount(IntakeConfig {
        classnames: styled(),
        ..Default::default()
    });

    intake.set_disabled(true, &regions);
    for (_, region) in regions.iter() {
        assert!(region.has_class("is-disabled"));
    }

    intake.set_disabled(false, &regions);
    for (_, region) in regions.iter() {
        assert!(!region.has_class("is-disabled"));
    }
}

#[test]
fn styling_round_trips_back_to_mounted_classes() {
    let (intake, regions, _) = mount(IntakeConfig {
        classnames: styled(),
        ..Default::default()
    });
    let mounted = snapshot(&regions);

    intake.on_drag_over(&regions, None, &HeadlessEvent::new());
    intake.set_disabled(true, &regions);
    intake.set_disabled(false, &regions);
    intake.on_drag_over(&regions, None, &HeadlessEvent::new());
    intake.on_drag_leave(&regions, None, &HeadlessEvent::new());

    assert_eq!(snapshot(&regions), mounted);
    assert!(!intake.state().is_drag_over());
}
