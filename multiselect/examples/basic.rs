// Example: minimal usage — toggle items, query membership.
use multiselect::{Selection, SelectionOptions};

fn main() {
    let mut s = Selection::new(SelectionOptions::<u64>::new());

    s.toggle(3);
    s.toggle(7);
    s.toggle(7); // toggles back off

    println!("selection_mode={}", s.is_in_selection_mode());
    println!("len={}", s.len());
    println!("is_selected(3)={}", s.is_selected(&3));
    println!("is_selected(7)={}", s.is_selected(&7));

    let fully_applied = s.toggle_all(0..10);
    println!("toggle_all(0..10) fully_applied={fully_applied} len={}", s.len());

    s.clear();
    println!("after clear: selection_mode={}", s.is_in_selection_mode());
}
