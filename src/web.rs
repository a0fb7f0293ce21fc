//! DOM implementation of the surface seam: touch listeners on an `HtmlElement`.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};

use crate::error::SurfaceError;
use crate::model::{Contact, Point};
use crate::surface::{Clock, ContactEvent, Handler, Surface};

#[derive(Clone, Debug, PartialEq)]
pub struct ElementSurface {
    element: HtmlElement,
}

impl ElementSurface {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl From<HtmlElement> for ElementSurface {
    fn from(element: HtmlElement) -> Self {
        Self::new(element)
    }
}

fn describe(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

impl Surface for ElementSurface {
    type Event = TouchEvent;
    type Listener = Closure<dyn FnMut(TouchEvent)>;

    fn listener(&self, handler: Handler<TouchEvent>) -> Self::Listener {
        Closure::wrap(Box::new(move |e: TouchEvent| handler(&e)) as Box<dyn FnMut(_)>)
    }

    fn add_listener(&self, contact: Contact, listener: &Self::Listener) -> Result<(), SurfaceError> {
        self.element
            .add_event_listener_with_callback(contact.event_type(), listener.as_ref().unchecked_ref())
            .map_err(|e| SurfaceError::Listen {
                event: contact.event_type(),
                reason: describe(&e),
            })
    }

    fn remove_listener(&self, contact: Contact, listener: &Self::Listener) -> Result<(), SurfaceError> {
        self.element
            .remove_event_listener_with_callback(contact.event_type(), listener.as_ref().unchecked_ref())
            .map_err(|e| SurfaceError::Unlisten {
                event: contact.event_type(),
                reason: describe(&e),
            })
    }
}

impl ContactEvent for TouchEvent {
    fn first_point(&self) -> Option<Point> {
        self.touches()
            .item(0)
            .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
    }

    fn stop_propagation(&self) {
        web_sys::Event::stop_propagation(self);
    }
}

/// `Date.now()`, in milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateClock;

impl Clock for DateClock {
    fn now(&self) -> f64 {
        js_sys::Date::now()
    }
}
