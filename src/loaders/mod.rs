pub mod drag_script;

pub use drag_script::{load_drag_script, DragScript};
