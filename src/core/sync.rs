//! Visual state synchronization for surface, icon and label.
//!
//! Every operation is expressed as token-set additions and removals, so
//! applying the same state twice leaves the same class membership as
//! applying it once.

use crate::core::platform::{Region, RegionSet};
use crate::models::{ClassnameSet, Cursor};

/// Apply the disabled affordance to every present region.
///
/// Sets the cursor and adds (`disabled`) or removes (`!disabled`) each
/// region's `onDisabled` tokens.
pub fn apply_disabled<R: Region>(regions: &RegionSet<R>, classes: &ClassnameSet, disabled: bool) {
    let cursor = Cursor::for_disabled(disabled);
    for (kind, region) in regions.iter() {
        region.set_cursor(cursor);

        let tokens = classes.region(kind).on_disabled_tokens();
        if tokens.is_empty() {
            continue;
        }
        if disabled {
            region.add_classes(&tokens);
        } else {
            region.remove_classes(&tokens);
        }
    }
}

/// Add each region's `onDragOver` tokens.
pub fn add_drag_over<R: Region>(regions: &RegionSet<R>, classes: &ClassnameSet) {
    for (kind, region) in regions.iter() {
        let tokens = classes.region(kind).on_drag_over_tokens();
        if !tokens.is_empty() {
            region.add_classes(&tokens);
        }
    }
}

/// Remove each region's `onDragOver` tokens, whether applied or not.
pub fn remove_drag_over<R: Region>(regions: &RegionSet<R>, classes: &ClassnameSet) {
    for (kind, region) in regions.iter() {
        let tokens = classes.region(kind).on_drag_over_tokens();
        if !tokens.is_empty() {
            region.remove_classes(&tokens);
        }
    }
}
