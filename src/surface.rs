//! Seams between the gesture tracker and whatever delivers contact events.

use crate::error::SurfaceError;
use crate::model::{Contact, Point};

/// Boxed event handler installed through [`Surface::listener`].
pub type Handler<E> = Box<dyn Fn(&E)>;

/// An event delivered by a surface for one of the [`Contact`] signals.
pub trait ContactEvent {
    /// First active contact point, if the event carries one.
    fn first_point(&self) -> Option<Point>;
    fn stop_propagation(&self);
}

/// Something contact listeners can be attached to.
///
/// Listeners are created once per binding and then added/removed by
/// reference, mirroring `addEventListener`/`removeEventListener`: adding a
/// listener that is already attached for the same signal must not register it
/// twice, and removing one that is not attached must be harmless.
pub trait Surface: Clone + PartialEq + 'static {
    type Event: ContactEvent + 'static;
    type Listener: 'static;

    fn listener(&self, handler: Handler<Self::Event>) -> Self::Listener;
    fn add_listener(&self, contact: Contact, listener: &Self::Listener) -> Result<(), SurfaceError>;
    fn remove_listener(&self, contact: Contact, listener: &Self::Listener) -> Result<(), SurfaceError>;
}

/// Millisecond wall clock used to time gestures.
pub trait Clock: Clone + 'static {
    fn now(&self) -> f64;
}
