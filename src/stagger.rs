//! Stagger delays for reveal items that share a layout group.
//!
//! The delay only postpones the CSS transition once an item activates; it
//! plays no part in deciding when activation happens.

#[cfg(test)]
#[path = "stagger_test.rs"]
mod stagger_test;

use crate::config::StaggerConfig;
use crate::consts::TRANSITION_DELAY_PROPERTY;
use crate::error::EnhanceError;
use crate::surface::Surface;

/// Delay for the item at `index`: `(index % cycle) * step_ms`.
///
/// A zero `cycle` disables staggering.
#[must_use]
pub fn stagger_delay_ms(index: usize, cycle: usize, step_ms: u32) -> u32 {
    if cycle == 0 {
        return 0;
    }
    u32::try_from(index % cycle).map_or(u32::MAX, |position| position.saturating_mul(step_ms))
}

/// Delays for `len` items of one group, in document order.
#[must_use]
pub fn stagger_delays(len: usize, cycle: usize, step_ms: u32) -> Vec<u32> {
    (0..len).map(|index| stagger_delay_ms(index, cycle, step_ms)).collect()
}

/// Write `transition-delay` on every item of one layout group.
///
/// # Errors
///
/// Propagates the first style write failure.
pub fn apply_stagger<S: Surface>(items: &[S], config: &StaggerConfig) -> Result<(), EnhanceError> {
    for (item, delay) in items.iter().zip(stagger_delays(items.len(), config.cycle, config.step_ms)) {
        item.set_style(TRANSITION_DELAY_PROPERTY, &format!("{delay}ms"))?;
    }
    Ok(())
}

/// Stagger the reveal items of every configured layout group on the page.
///
/// # Errors
///
/// Returns query or style write failures.
#[cfg(feature = "browser")]
pub fn install(document: &web_sys::Document, config: &StaggerConfig) -> Result<(), EnhanceError> {
    use crate::dom::{query_all, query_all_within};

    for selector in &config.containers {
        for container in query_all(document, selector)? {
            let items = query_all_within(&container, &config.item_selector)?;
            apply_stagger(&items, config)?;
            log::debug!("staggered {} items in `{selector}`", items.len());
        }
    }
    Ok(())
}
