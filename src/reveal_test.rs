use super::*;
use crate::fake::FakeElement;

fn width(value: &str) -> Option<TargetDimension> {
    Some(TargetDimension { property: DimensionProperty::Width, value: value.to_owned() })
}

fn progress_group(elements: Vec<FakeElement>) -> RevealGroup<FakeElement> {
    RevealGroup::new(RevealGroupConfig::progress_bars(), elements)
}

// =============================================================
// ActivationMode
// =============================================================

#[test]
fn mode_is_observed_only_with_motion_and_observer() {
    assert_eq!(ActivationMode::resolve(false, true), ActivationMode::Observed);
    assert_eq!(ActivationMode::resolve(true, true), ActivationMode::Immediate);
    assert_eq!(ActivationMode::resolve(false, false), ActivationMode::Immediate);
    assert_eq!(ActivationMode::resolve(true, false), ActivationMode::Immediate);
}

// =============================================================
// RevealEngine
// =============================================================

#[test]
fn register_assigns_sequential_pending_ids() {
    let mut engine = RevealEngine::new();
    let a = engine.register(None);
    let b = engine.register(width("50%"));
    assert_eq!(a, WatchedId(0));
    assert_eq!(b, WatchedId(1));
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.pending_count(), 2);
    assert_eq!(engine.state(b), Some(RevealState::Pending));
}

#[test]
fn non_intersecting_report_changes_nothing() {
    let mut engine = RevealEngine::new();
    let id = engine.register(None);
    assert_eq!(engine.report(id, false), None);
    assert!(engine.is_pending(id));
}

#[test]
fn intersecting_report_activates_and_unwatches() {
    let mut engine = RevealEngine::new();
    let id = engine.register(width("240px"));
    let activation = engine.report(id, true).expect("first report activates");
    assert_eq!(activation.dimension, width("240px"));
    assert_eq!(engine.state(id), Some(RevealState::Activated));
    assert!(!engine.is_pending(id));
}

#[test]
fn activation_happens_once_across_reentries() {
    let mut engine = RevealEngine::new();
    let id = engine.register(None);
    let mut activations = 0;
    for intersecting in [true, false, true, false, true] {
        if engine.report(id, intersecting).is_some() {
            activations += 1;
        }
    }
    assert_eq!(activations, 1);
    assert_eq!(engine.state(id), Some(RevealState::Activated));
}

#[test]
fn activate_twice_is_noop() {
    let mut engine = RevealEngine::new();
    let id = engine.register(None);
    assert!(engine.activate(id).is_some());
    assert!(engine.activate(id).is_none());
}

#[test]
fn unknown_id_is_ignored() {
    let mut engine = RevealEngine::new();
    assert!(engine.report(WatchedId(7), true).is_none());
    assert!(engine.state(WatchedId(7)).is_none());
}

#[test]
fn activate_all_is_in_registration_order_and_skips_activated() {
    let mut engine = RevealEngine::new();
    let a = engine.register(None);
    let b = engine.register(None);
    let c = engine.register(None);
    engine.report(b, true);
    let ids: Vec<WatchedId> = engine.activate_all().into_iter().map(|act| act.id).collect();
    assert_eq!(ids, vec![a, c]);
    assert_eq!(engine.pending_count(), 0);
    assert!(engine.activate_all().is_empty());
}

// =============================================================
// RevealGroup
// =============================================================

#[test]
fn group_reads_dimension_attribute() {
    let group = progress_group(vec![
        FakeElement::new().with_attribute("data-width", "240px"),
        FakeElement::new(),
        FakeElement::new().with_attribute("data-width", "  "),
    ]);
    let engine = group.engine();
    assert_eq!(engine.element(WatchedId(0)).and_then(|e| e.target_dimension.clone()), width("240px"));
    assert!(engine.element(WatchedId(1)).and_then(|e| e.target_dimension.clone()).is_none());
    assert!(engine.element(WatchedId(2)).and_then(|e| e.target_dimension.clone()).is_none());
}

#[test]
fn reveal_group_ignores_dimension_attributes() {
    let group = RevealGroup::new(
        RevealGroupConfig::reveal(),
        vec![FakeElement::new().with_attribute("data-width", "10px")],
    );
    assert!(group.engine().element(WatchedId(0)).and_then(|e| e.target_dimension.clone()).is_none());
}

#[test]
fn nothing_written_before_visibility_report() {
    let mut group = progress_group(vec![FakeElement::new().with_attribute("data-width", "240px")]);
    assert_eq!(group.start(ActivationMode::Observed).expect("start"), GroupStart::Observe);
    let surface = &group.surfaces()[0];
    assert!(surface.style("width").is_none());
    assert!(surface.classes().is_empty());
}

#[test]
fn visible_report_writes_dimension_and_marker() {
    let mut group = progress_group(vec![FakeElement::new().with_attribute("data-width", "240px")]);
    group.start(ActivationMode::Observed).expect("start");
    let activation = group.on_visible(WatchedId(0), true).expect("activates");
    group.apply(&activation).expect("apply");
    let surface = &group.surfaces()[0];
    assert_eq!(surface.style("width").as_deref(), Some("240px"));
    assert_eq!(surface.classes(), vec!["animate"]);
}

#[test]
fn missing_dimension_gets_marker_only() {
    let mut group = progress_group(vec![FakeElement::new()]);
    let activation = group.on_visible(WatchedId(0), true).expect("activates");
    group.apply(&activation).expect("apply");
    let surface = &group.surfaces()[0];
    assert_eq!(surface.style_writes(), 0);
    assert!(surface.has_class("animate"));
}

#[test]
fn second_visibility_report_does_not_rewrite() {
    let mut group = progress_group(vec![FakeElement::new().with_attribute("data-width", "60%")]);
    if let Some(activation) = group.on_visible(WatchedId(0), true) {
        group.apply(&activation).expect("apply");
    }
    assert!(group.on_visible(WatchedId(0), true).is_none());
    let surface = &group.surfaces()[0];
    assert_eq!(surface.style_writes(), 1);
    assert_eq!(surface.classes(), vec!["animate"]);
}

#[test]
fn line_points_write_height() {
    let mut group = RevealGroup::new(
        RevealGroupConfig::line_points(),
        vec![FakeElement::new().with_attribute("data-height", "72%")],
    );
    let activation = group.on_visible(WatchedId(0), true).expect("activates");
    group.apply(&activation).expect("apply");
    assert_eq!(group.surfaces()[0].style("height").as_deref(), Some("72%"));
}

#[test]
fn immediate_start_activates_everything_synchronously() {
    let mut group = RevealGroup::new(
        RevealGroupConfig::reveal(),
        vec![FakeElement::new(), FakeElement::new(), FakeElement::new()],
    );
    let outcome = group.start(ActivationMode::Immediate).expect("start");
    assert_eq!(outcome, GroupStart::Settled { activated: 3 });
    for surface in group.surfaces() {
        assert_eq!(surface.classes(), vec!["is-visible", "active"]);
    }
    assert_eq!(group.engine().pending_count(), 0);
}

#[test]
fn immediate_and_observed_paths_reach_same_end_state() {
    let make = || vec![FakeElement::new().with_attribute("data-width", "85%"), FakeElement::new()];

    let mut immediate = progress_group(make());
    immediate.start(ActivationMode::Immediate).expect("start");

    let mut observed = progress_group(make());
    observed.start(ActivationMode::Observed).expect("start");
    for index in 0..2 {
        if let Some(activation) = observed.on_visible(WatchedId(index), true) {
            observed.apply(&activation).expect("apply");
        }
    }

    for (a, b) in immediate.surfaces().iter().zip(observed.surfaces()) {
        assert_eq!(a.classes(), b.classes());
        assert_eq!(a.style("width"), b.style("width"));
    }
}

#[test]
fn observed_start_on_empty_group_is_settled() {
    let mut group: RevealGroup<FakeElement> = RevealGroup::new(RevealGroupConfig::reveal(), Vec::new());
    assert_eq!(group.start(ActivationMode::Observed).expect("start"), GroupStart::Settled { activated: 0 });
}
