// Example: persist a selection across teardown with a snapshot.
//
// The snapshot stores only the selected identities; the host re-supplies the
// cap (and any callback) when restoring.
use multiselect::{Selection, SelectionOptions};

fn main() {
    let mut s = Selection::new(SelectionOptions::<u64>::new().with_max_selectable(Some(8)));
    s.toggle_all([11, 22, 33]);

    let snapshot = s.snapshot();
    println!("captured {} identities", snapshot.len());
    drop(s);

    // ...host tears the UI scope down and later rebuilds it...

    let restored = Selection::restore(
        snapshot,
        SelectionOptions::new().with_max_selectable(Some(8)),
    );
    println!("restored len={}", restored.len());
    println!("is_selected(22)={}", restored.is_selected(&22));
    println!("max_selectable={:?}", restored.max_selectable());
}
