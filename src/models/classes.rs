//! Class-list types for the three styled regions.

use serde::{Deserialize, Serialize};

use crate::config::{ICON_BASELINE_CLASS, LABEL_BASELINE_CLASS, SURFACE_BASELINE_CLASS};

/// One of the independently styled areas of the intake surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// The outer drop target
    Surface,
    /// The icon inside the surface
    Icon,
    /// The text label inside the surface
    Label,
}

impl RegionKind {
    /// All regions, in rendering order.
    pub const ALL: [RegionKind; 3] = [RegionKind::Surface, RegionKind::Icon, RegionKind::Label];

    /// Class used when the caller configures no `default` class.
    pub fn baseline(self) -> &'static str {
        match self {
            Self::Surface => SURFACE_BASELINE_CLASS,
            Self::Icon => ICON_BASELINE_CLASS,
            Self::Label => LABEL_BASELINE_CLASS,
        }
    }
}

/// Pointer affordance shown over the regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    /// Surface accepts files (default)
    #[default]
    Pointer,
    /// Surface is disabled
    NotAllowed,
}

impl Cursor {
    /// Cursor matching the disabled flag.
    pub fn for_disabled(disabled: bool) -> Self {
        if disabled {
            Self::NotAllowed
        } else {
            Self::Pointer
        }
    }

    /// CSS `cursor` property value.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::NotAllowed => "not-allowed",
        }
    }
}

/// Ordered, de-duplicated list of class tokens.
///
/// Parsed from a space-separated class string. Blank input yields the empty
/// list, which every region operation treats as a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassTokens(Vec<String>);

impl ClassTokens {
    /// Split a class string on whitespace, dropping empty and repeated tokens.
    pub fn parse(raw: &str) -> Self {
        let mut tokens: Vec<String> = Vec::new();
        for token in raw.split_whitespace() {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
        Self(tokens)
    }

    /// Parse an optional class string; `None` is the empty list.
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }
}

/// The three optional class strings configured for one region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionClasses {
    /// Classes always applied; falls back to the region baseline.
    pub default: Option<String>,
    /// Classes added while the surface is disabled.
    pub on_disabled: Option<String>,
    /// Classes added while files are dragged over the surface.
    pub on_drag_over: Option<String>,
}

impl RegionClasses {
    pub fn on_disabled_tokens(&self) -> ClassTokens {
        ClassTokens::from_option(self.on_disabled.as_deref())
    }

    pub fn on_drag_over_tokens(&self) -> ClassTokens {
        ClassTokens::from_option(self.on_drag_over.as_deref())
    }

    /// Class attribute for the region outside drag-over transients.
    ///
    /// `default` (or `baseline` when blank), followed by `onDisabled` while
    /// disabled.
    pub fn resolve(&self, baseline: &str, disabled: bool) -> String {
        let base = self
            .default
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(baseline);

        match self.on_disabled.as_deref().map(str::trim) {
            Some(extra) if disabled && !extra.is_empty() => format!("{} {}", base, extra),
            _ => base.to_string(),
        }
    }
}

/// Per-region class configuration for surface, icon and label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassnameSet {
    #[serde(alias = "droplet")]
    pub surface: RegionClasses,
    pub icon: RegionClasses,
    pub label: RegionClasses,
}

impl ClassnameSet {
    pub fn region(&self, kind: RegionKind) -> &RegionClasses {
        match kind {
            RegionKind::Surface => &self.surface,
            RegionKind::Icon => &self.icon,
            RegionKind::Label => &self.label,
        }
    }

    /// Resolved class attribute for `kind`; see [`RegionClasses::resolve`].
    pub fn resolve(&self, kind: RegionKind, disabled: bool) -> String {
        self.region(kind).resolve(kind.baseline(), disabled)
    }
}
