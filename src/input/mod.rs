pub mod drag;
pub mod input_adapter;

pub use drag::{DragTracker, Viewport};
pub use input_adapter::WinitDragAdapter;
