//! Viewport activation: one-shot reveal of marked elements.
//!
//! Each watched element is a two-state machine, `Pending -> Activated`, and
//! the engine tracks the pending ones in a set. A visibility report only ever
//! moves an element out of that set, so activation happens at most once and
//! an activated element is never revisited: later reports for it are ignored
//! just as a browser observer stops reporting an unobserved target.
//!
//! [`RevealEngine`] is pure bookkeeping. [`RevealGroup`] binds an engine to
//! the [`Surface`]s of one call-site group and performs the style writes.
//! Groups are independent; nothing orders activations across them.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

use crate::config::{DimensionProperty, RevealGroupConfig};
use crate::error::EnhanceError;
use crate::surface::{Surface, non_empty_attribute};

/// Index of an element within its engine, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchedId(pub usize);

/// Lifecycle of a watched element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Registered and waiting to become visible.
    #[default]
    Pending,
    /// Terminal: markers applied, no longer watched.
    Activated,
}

/// A concrete dimension copied from markup into the element's inline style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetDimension {
    pub property: DimensionProperty,
    /// CSS value as written in the data attribute, e.g. `"240px"` or `"85%"`.
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchedElement {
    pub target_dimension: Option<TargetDimension>,
    pub state: RevealState,
}

/// The single transition produced for an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub id: WatchedId,
    pub dimension: Option<TargetDimension>,
}

/// How a group decides when to activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationMode {
    /// Wait for the visibility observer.
    Observed,
    /// Activate everything synchronously at startup, without animation.
    Immediate,
}

impl ActivationMode {
    /// Reduced motion and a missing observer both take the immediate path.
    #[must_use]
    pub fn resolve(reduced_motion: bool, observer_supported: bool) -> Self {
        if reduced_motion || !observer_supported { Self::Immediate } else { Self::Observed }
    }
}

/// Per-element reveal state for one call-site group.
#[derive(Debug, Default)]
pub struct RevealEngine {
    elements: Vec<WatchedElement>,
    pending: BTreeSet<WatchedId>,
}

impl RevealEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching a new element.
    pub fn register(&mut self, target_dimension: Option<TargetDimension>) -> WatchedId {
        let id = WatchedId(self.elements.len());
        self.elements.push(WatchedElement { target_dimension, state: RevealState::Pending });
        self.pending.insert(id);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn element(&self, id: WatchedId) -> Option<&WatchedElement> {
        self.elements.get(id.0)
    }

    #[must_use]
    pub fn state(&self, id: WatchedId) -> Option<RevealState> {
        self.element(id).map(|el| el.state)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, id: WatchedId) -> bool {
        self.pending.contains(&id)
    }

    /// Pending ids in registration order.
    pub fn pending(&self) -> impl Iterator<Item = WatchedId> + '_ {
        self.pending.iter().copied()
    }

    /// Feed one visibility report from the observer.
    ///
    /// Only a pending element that is intersecting activates; everything else
    /// returns `None` and changes nothing.
    pub fn report(&mut self, id: WatchedId, intersecting: bool) -> Option<Activation> {
        if !intersecting {
            return None;
        }
        self.activate(id)
    }

    /// Activate regardless of visibility. `None` if already activated or unknown.
    pub fn activate(&mut self, id: WatchedId) -> Option<Activation> {
        if !self.pending.remove(&id) {
            return None;
        }
        let element = self.elements.get_mut(id.0)?;
        element.state = RevealState::Activated;
        Some(Activation { id, dimension: element.target_dimension.clone() })
    }

    /// Activate every pending element, in registration order.
    pub fn activate_all(&mut self) -> Vec<Activation> {
        let ids: Vec<WatchedId> = self.pending().collect();
        ids.into_iter().filter_map(|id| self.activate(id)).collect()
    }
}

/// Outcome of [`RevealGroup::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupStart {
    /// Nothing left to watch; `activated` elements were revealed synchronously.
    Settled { activated: usize },
    /// The caller must attach a visibility observer to the pending surfaces.
    Observe,
}

/// A reveal engine bound to the elements of one call-site group.
pub struct RevealGroup<S> {
    config: RevealGroupConfig,
    engine: RevealEngine,
    surfaces: Vec<S>,
}

impl<S: Surface> RevealGroup<S> {
    /// Register `surfaces` in order, reading each one's target dimension.
    pub fn new(config: RevealGroupConfig, surfaces: Vec<S>) -> Self {
        let mut engine = RevealEngine::new();
        for surface in &surfaces {
            let dimension = config.dimension.and_then(|property| {
                non_empty_attribute(surface, property.data_attribute())
                    .map(|value| TargetDimension { property, value })
            });
            engine.register(dimension);
        }
        Self { config, engine, surfaces }
    }

    #[must_use]
    pub fn config(&self) -> &RevealGroupConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &RevealEngine {
        &self.engine
    }

    #[must_use]
    pub fn surfaces(&self) -> &[S] {
        &self.surfaces
    }

    #[must_use]
    pub fn surface(&self, id: WatchedId) -> Option<&S> {
        self.surfaces.get(id.0)
    }

    /// Begin the group in `mode`.
    ///
    /// In [`ActivationMode::Immediate`] every element is activated and written
    /// now. A write failure on one element does not stop the others.
    ///
    /// # Errors
    ///
    /// Returns the first write failure after all elements were attempted.
    pub fn start(&mut self, mode: ActivationMode) -> Result<GroupStart, EnhanceError> {
        match mode {
            ActivationMode::Observed if self.engine.pending_count() > 0 => Ok(GroupStart::Observe),
            ActivationMode::Observed => Ok(GroupStart::Settled { activated: 0 }),
            ActivationMode::Immediate => {
                let activations = self.engine.activate_all();
                let mut first_error = None;
                for activation in &activations {
                    if let Err(err) = self.apply(activation) {
                        if first_error.is_none() {
                            first_error = Some(err);
                        }
                    }
                }
                match first_error {
                    Some(err) => Err(err),
                    None => Ok(GroupStart::Settled { activated: activations.len() }),
                }
            }
        }
    }

    /// Visibility report for the element at `id`.
    pub fn on_visible(&mut self, id: WatchedId, intersecting: bool) -> Option<Activation> {
        self.engine.report(id, intersecting)
    }

    /// Write an activation: dimension first so the transition has a target, then markers.
    ///
    /// # Errors
    ///
    /// Propagates the element write failure.
    pub fn apply(&self, activation: &Activation) -> Result<(), EnhanceError> {
        let Some(surface) = self.surface(activation.id) else {
            return Ok(());
        };
        if let Some(dimension) = &activation.dimension {
            surface.set_style(dimension.property.css_property(), &dimension.value)?;
        }
        for marker in &self.config.markers {
            surface.add_class(marker)?;
        }
        Ok(())
    }
}
