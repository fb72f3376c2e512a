//! Demo page for the droplet component.
//!
//! Renders one intake surface from an [`IntakeConfig`] and lists every
//! accepted or rejected batch below it.

use droplet::Droplet;
use droplet::config::MAX_ACTIVITY_ENTRIES;
use droplet::core::FileDescriptor;
use droplet::models::{IntakeConfig, InvalidFiles};
use leptos::prelude::*;
use web_sys::File;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// Activity
// ============================================================================

/// One reported batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activity {
    Uploaded(Vec<String>),
    Rejected {
        error: String,
        invalid: Vec<String>,
        valid: Vec<String>,
    },
}

fn names<F: FileDescriptor>(files: &[F]) -> Vec<String> {
    files.iter().map(|f| f.file_name()).collect()
}

impl Activity {
    pub fn uploaded<F: FileDescriptor>(files: &[F]) -> Self {
        Self::Uploaded(names(files))
    }

    pub fn rejected<F: FileDescriptor>(data: &InvalidFiles<F>) -> Self {
        Self::Rejected {
            error: data.error.to_string(),
            invalid: names(&data.invalid_files),
            valid: names(&data.valid_files),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Uploaded(files) => format!("uploaded: {}", files.join(", ")),
            Self::Rejected {
                error,
                invalid,
                valid,
            } => format!(
                "{} rejected: {} | valid: {}",
                error,
                invalid.join(", "),
                if valid.is_empty() {
                    "-".to_string()
                } else {
                    valid.join(", ")
                }
            ),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::Uploaded(_) => css::entry,
            Self::Rejected { .. } => css::entryRejected,
        }
    }
}

/// Insert newest first, dropping the oldest entries beyond `limit`.
fn push_bounded(entries: &mut Vec<Activity>, entry: Activity, limit: usize) {
    entries.insert(0, entry);
    entries.truncate(limit);
}

/// Activity log state shared by the callbacks.
#[derive(Clone, Copy)]
pub struct ActivityLog {
    pub entries: RwSignal<Vec<Activity>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, entry: Activity) {
        self.entries
            .update(|entries| push_bounded(entries, entry, MAX_ACTIVITY_ENTRIES));
    }

    pub fn clear(&self) {
        self.entries.set(Vec::new());
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// DemoApp
// ============================================================================

#[component]
pub fn DemoApp(config: IntakeConfig) -> impl IntoView {
    let log = ActivityLog::new();
    let (disabled, set_disabled) = signal(config.disabled);

    let accept_hint = config
        .accept
        .clone()
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| "any file".to_string());

    let on_upload = move |files: Vec<File>| log.push(Activity::uploaded(&files));
    let on_invalid = move |data: InvalidFiles<File>| log.push(Activity::rejected(&data));

    view! {
        <main class=css::page>
            <h1 class=css::title>"droplet"</h1>
            <p class=css::hint>"Accepting: " {accept_hint}</p>

            <Droplet
                accept=config.accept
                multiple=config.multiple
                disabled=disabled
                classnames=config.classnames
                on_upload_files=on_upload
                on_invalid_files=on_invalid
            />

            <div class=css::controls>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=disabled
                        on:change=move |ev| set_disabled.set(event_target_checked(&ev))
                    />
                    " Disabled"
                </label>
                <button on:click=move |_| log.clear()>"Clear log"</button>
            </div>

            <ul class=css::log>
                {move || {
                    log.entries
                        .get()
                        .into_iter()
                        .map(|entry| view! { <li class=entry.class()>{entry.describe()}</li> })
                        .collect_view()
                }}
            </ul>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded(name: &str) -> Activity {
        Activity::Uploaded(vec![name.to_string()])
    }

    #[test]
    fn test_push_bounded_keeps_newest() {
        let mut entries = Vec::new();
        for name in ["a", "b", "c"] {
            push_bounded(&mut entries, uploaded(name), 2);
        }
        assert_eq!(entries, vec![uploaded("c"), uploaded("b")]);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Activity::Uploaded(vec!["a.png".into(), "b.png".into()]).describe(),
            "uploaded: a.png, b.png"
        );
        let rejected = Activity::Rejected {
            error: "Invalid file upload.".into(),
            invalid: vec!["b.txt".into()],
            valid: vec![],
        };
        assert_eq!(
            rejected.describe(),
            "Invalid file upload. rejected: b.txt | valid: -"
        );
    }
}
