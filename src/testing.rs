// In-memory surface and clock for driving the tracker from unit tests.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::SurfaceError;
use crate::model::{Contact, Point};
use crate::surface::{Clock, ContactEvent, Handler, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add(Contact),
    Remove(Contact),
}

pub struct MockEvent {
    pub point: Option<Point>,
    stopped: Cell<u32>,
}

impl MockEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            point: Some(Point::new(x, y)),
            stopped: Cell::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            point: None,
            stopped: Cell::new(0),
        }
    }

    pub fn stop_count(&self) -> u32 {
        self.stopped.get()
    }
}

impl ContactEvent for MockEvent {
    fn first_point(&self) -> Option<Point> {
        self.point
    }

    fn stop_propagation(&self) {
        self.stopped.set(self.stopped.get() + 1);
    }
}

pub struct MockListener {
    id: usize,
    handler: Rc<dyn Fn(&MockEvent)>,
}

#[derive(Default)]
struct MockInner {
    next_id: Cell<usize>,
    attached: RefCell<Vec<(Contact, usize, Rc<dyn Fn(&MockEvent)>)>>,
    ops: RefCell<Vec<Op>>,
}

/// Records every add/remove call and dispatches fired events to whatever is
/// attached at that moment, with DOM-like dedup on add.
#[derive(Clone, Default)]
pub struct MockSurface {
    inner: Rc<MockInner>,
}

impl PartialEq for MockSurface {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl MockSurface {
    pub fn fire(&self, contact: Contact, event: &MockEvent) {
        let handlers: Vec<_> = self
            .inner
            .attached
            .borrow()
            .iter()
            .filter(|(c, _, _)| *c == contact)
            .map(|(_, _, h)| h.clone())
            .collect();
        for h in handlers {
            h(event);
        }
    }

    pub fn listening(&self, contact: Contact) -> usize {
        self.inner.attached.borrow().iter().filter(|(c, _, _)| *c == contact).count()
    }

    pub fn attached_total(&self) -> usize {
        self.inner.attached.borrow().len()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.inner.ops.borrow().clone()
    }

    pub fn clear_ops(&self) {
        self.inner.ops.borrow_mut().clear();
    }
}

impl Surface for MockSurface {
    type Event = MockEvent;
    type Listener = MockListener;

    fn listener(&self, handler: Handler<MockEvent>) -> MockListener {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        MockListener {
            id,
            handler: Rc::from(handler),
        }
    }

    fn add_listener(&self, contact: Contact, listener: &MockListener) -> Result<(), SurfaceError> {
        self.inner.ops.borrow_mut().push(Op::Add(contact));
        let mut attached = self.inner.attached.borrow_mut();
        if !attached.iter().any(|(c, id, _)| *c == contact && *id == listener.id) {
            attached.push((contact, listener.id, listener.handler.clone()));
        }
        Ok(())
    }

    fn remove_listener(&self, contact: Contact, listener: &MockListener) -> Result<(), SurfaceError> {
        self.inner.ops.borrow_mut().push(Op::Remove(contact));
        self.inner
            .attached
            .borrow_mut()
            .retain(|(c, id, _)| !(*c == contact && *id == listener.id));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn advance_to(&self, t: f64) {
        self.now.set(t);
    }

    pub fn advance_by(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
