//! Single-finger swipe tracking for Yew apps.
//!
//! [`GestureTracker`] turns touch start/move/end events on a surface into
//! `on_swipe` progress callbacks and one `on_swipe_end` callback carrying the
//! final offset and a quick/slow classification. [`use_swipe`] wires it to a
//! DOM element from a function component.

pub mod error;
pub mod hook;
pub mod model;
pub mod state;
pub mod surface;
pub mod tracker;
pub mod util;
pub mod web;

#[cfg(test)]
mod testing;

pub use error::SurfaceError;
pub use hook::use_swipe;
pub use model::{Contact, Displacement, Point, SwipeConfig, SwipeEnd};
pub use surface::{Clock, ContactEvent, Surface};
pub use tracker::GestureTracker;
pub use web::{DateClock, ElementSurface};
