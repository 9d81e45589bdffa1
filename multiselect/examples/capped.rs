// Example: a capped selection — the cap gates additions, never removals.
use multiselect::{Selection, SelectionOptions};

fn main() {
    let mut s = Selection::new(SelectionOptions::<&str>::new().with_max_selectable(Some(2)));

    println!("toggle(a)={}", s.toggle("a"));
    println!("toggle(b)={}", s.toggle("b"));
    println!("full={}", s.is_selection_full());
    println!("toggle(c)={} (blocked by cap)", s.toggle("c"));

    // Removal is never blocked, even when full.
    println!("toggle(a)={} (removal)", s.toggle("a"));
    println!("remaining_capacity={:?}", s.remaining_capacity());

    // Bulk select admits items in input order up to the remaining capacity.
    let fully_applied = s.toggle_all(["x", "y", "z"]);
    println!("toggle_all([x, y, z]) fully_applied={fully_applied}");
    let mut selected = Vec::new();
    s.collect_selected(&mut selected);
    selected.sort_unstable();
    println!("selected={selected:?}");
}
