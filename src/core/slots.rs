//! Content slot resolution for the icon and label regions.

/// How one region is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<R> {
    /// Built-in element registered as the region
    Default,
    /// Caller renderer receiving the region handle
    Custom(R),
}

impl<R> Slot<R> {
    fn from_option(render: Option<R>) -> Self {
        render.map_or(Self::Default, Self::Custom)
    }
}

/// Resolved content of the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentPlan<C, I, L> {
    /// One renderer receives both region handles; nothing default is built.
    Combined(C),
    /// Icon and label resolved independently.
    Regions { icon: Slot<I>, label: Slot<L> },
}

impl<C, I, L> ContentPlan<C, I, L> {
    /// Pick the content plan. A combined renderer takes precedence over the
    /// per-region renderers, which are then never used.
    pub fn resolve(content: Option<C>, icon: Option<I>, label: Option<L>) -> Self {
        match content {
            Some(render) => Self::Combined(render),
            None => Self::Regions {
                icon: Slot::from_option(icon),
                label: Slot::from_option(label),
            },
        }
    }

    /// Whether the built-in icon element is constructed.
    pub fn builds_default_icon(&self) -> bool {
        matches!(self, Self::Regions { icon: Slot::Default, .. })
    }

    /// Whether the built-in label element is constructed.
    pub fn builds_default_label(&self) -> bool {
        matches!(self, Self::Regions { label: Slot::Default, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Plan = ContentPlan<&'static str, &'static str, &'static str>;

    #[test]
    fn test_combined_suppresses_defaults() {
        let plan = Plan::resolve(Some("content"), Some("icon"), None);
        assert_eq!(plan, ContentPlan::Combined("content"));
        assert!(!plan.builds_default_icon());
        assert!(!plan.builds_default_label());
    }

    #[test]
    fn test_regions_resolve_independently() {
        let plan = Plan::resolve(None, Some("icon"), None);
        assert_eq!(
            plan,
            ContentPlan::Regions {
                icon: Slot::Custom("icon"),
                label: Slot::Default,
            }
        );
        assert!(!plan.builds_default_icon());
        assert!(plan.builds_default_label());
    }

    #[test]
    fn test_all_defaults() {
        let plan = Plan::resolve(None, None, None);
        assert!(plan.builds_default_icon());
        assert!(plan.builds_default_label());
    }
}
