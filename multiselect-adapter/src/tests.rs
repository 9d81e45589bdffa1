use crate::*;

use multiselect::SelectionOptions;

#[test]
fn press_activates_outside_selection_mode() {
    let mut c = SelectionController::new(SelectionOptions::<u32>::new());
    assert_eq!(c.on_press(1), PressOutcome::Activated);
    assert!(!c.selection().is_in_selection_mode());
}

#[test]
fn long_press_starts_a_selection() {
    let mut c = SelectionController::new(SelectionOptions::<u32>::new());
    assert_eq!(c.on_long_press(1), PressOutcome::Toggled { applied: true });
    assert!(c.selection().is_in_selection_mode());
    assert!(c.selection().is_selected(&1));
}

#[test]
fn press_toggles_while_selection_is_active() {
    let mut c = SelectionController::new(SelectionOptions::<u32>::new());
    c.on_long_press(1);

    assert_eq!(c.on_press(2), PressOutcome::Toggled { applied: true });
    assert!(c.selection().is_selected(&2));

    assert_eq!(c.on_press(2), PressOutcome::Toggled { applied: true });
    assert!(!c.selection().is_selected(&2));
}

#[test]
fn long_press_is_absorbed_while_selection_is_active() {
    let mut c = SelectionController::new(SelectionOptions::<u32>::new());
    c.on_long_press(1);
    assert_eq!(c.on_long_press(2), PressOutcome::Ignored);
    assert!(!c.selection().is_selected(&2));
}

#[test]
fn press_reports_cap_blocked_toggle() {
    let mut c = SelectionController::new(
        SelectionOptions::<u32>::new().with_max_selectable(Some(1)),
    );
    c.on_long_press(1);
    assert_eq!(c.on_press(2), PressOutcome::Toggled { applied: false });
    assert!(!c.selection().is_selected(&2));

    // Deselecting the last item ends the selection; the next press activates.
    assert_eq!(c.on_press(1), PressOutcome::Toggled { applied: true });
    assert_eq!(c.on_press(2), PressOutcome::Activated);
}

#[test]
fn snapshot_roundtrips_through_the_controller() {
    let mut c = SelectionController::new(SelectionOptions::<u32>::new().with_max_selectable(Some(4)));
    c.on_long_press(1);
    c.on_press(2);

    let snapshot = c.snapshot();
    let restored = SelectionController::restore(
        snapshot,
        SelectionOptions::new().with_max_selectable(Some(4)),
    );
    assert!(restored.selection().is_selected(&1));
    assert!(restored.selection().is_selected(&2));
    assert_eq!(restored.selection().max_selectable(), Some(4));
}
