// Example: drive a SelectionController with a simulated press session.
use multiselect::SelectionOptions;
use multiselect_adapter::{PressOutcome, SelectionController};

fn main() {
    let mut c = SelectionController::new(SelectionOptions::<u32>::new().with_max_selectable(Some(3)));

    let events: [(&str, u32); 6] = [
        ("press", 1),      // no selection yet: activates
        ("long-press", 1), // starts the selection
        ("press", 2),      // extends it
        ("press", 3),
        ("press", 4), // blocked: cap is 3
        ("press", 1), // deselects
    ];

    for (kind, item) in events {
        let outcome = match kind {
            "press" => c.on_press(item),
            _ => c.on_long_press(item),
        };
        match outcome {
            PressOutcome::Activated => println!("{kind} {item}: activate (host action)"),
            PressOutcome::Toggled { applied } => {
                println!("{kind} {item}: toggled (applied={applied})")
            }
            PressOutcome::Ignored => println!("{kind} {item}: ignored"),
        }
    }

    println!(
        "selection_mode={} len={}",
        c.selection().is_in_selection_mode(),
        c.selection().len()
    );
}
