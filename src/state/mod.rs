pub mod binding;
pub mod gesture;

pub use binding::Binding;
pub use gesture::{Gesture, GestureState, Origin, is_quick_swipe};
