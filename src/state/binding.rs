// Listener lifecycle for one bound surface.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use yew::Callback;

use super::gesture::Gesture;
use crate::model::{Contact, Displacement, SwipeConfig, SwipeEnd};
use crate::surface::{Clock, ContactEvent, Handler, Surface};
use crate::util::clog;

struct Listeners<L> {
    start: L,
    moved: L,
    end: L,
}

struct Shared<S: Surface, C: Clock> {
    surface: S,
    clock: C,
    config: SwipeConfig,
    on_swipe: Callback<Displacement>,
    on_swipe_end: Callback<SwipeEnd>,
    gesture: RefCell<Gesture>,
    listeners: Listeners<S::Listener>,
}

/// A surface with its start listener attached and the configuration snapshot
/// it was bound with. Dropping it removes every listener it may have added.
pub struct Binding<S: Surface, C: Clock> {
    shared: Rc<Shared<S, C>>,
}

fn handler<S: Surface, C: Clock>(
    weak: &Weak<Shared<S, C>>,
    f: fn(&Shared<S, C>, &S::Event),
) -> Handler<S::Event> {
    let weak = weak.clone();
    Box::new(move |e: &S::Event| {
        if let Some(shared) = weak.upgrade() {
            f(&shared, e);
        }
    })
}

impl<S: Surface, C: Clock> Binding<S, C> {
    pub fn new(
        surface: S,
        clock: C,
        config: SwipeConfig,
        on_swipe: Callback<Displacement>,
        on_swipe_end: Callback<SwipeEnd>,
    ) -> Self {
        let shared = Rc::new_cyclic(|weak| Shared {
            listeners: Listeners {
                start: surface.listener(handler(weak, Shared::<S, C>::on_start)),
                moved: surface.listener(handler(weak, Shared::<S, C>::on_move)),
                end: surface.listener(handler(weak, Shared::<S, C>::on_end)),
            },
            surface,
            clock,
            config,
            on_swipe,
            on_swipe_end,
            gesture: RefCell::new(Gesture::default()),
        });
        shared.attach(Contact::Start);
        clog("swipe: bound surface");
        Self { shared }
    }

    pub fn surface(&self) -> &S {
        &self.shared.surface
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.shared.config
    }

    pub fn is_tracking(&self) -> bool {
        self.shared.gesture.borrow().is_tracking()
    }
}

impl<S: Surface, C: Clock> Drop for Binding<S, C> {
    fn drop(&mut self) {
        let shared = &self.shared;
        if shared.gesture.borrow_mut().abandon() {
            clog("swipe: teardown abandoned an in-flight gesture");
        }
        // Unconditional: move/end may or may not be attached at this point.
        shared.detach(Contact::Start);
        shared.detach(Contact::Move);
        shared.detach(Contact::End);
        clog("swipe: unbound surface");
    }
}

impl<S: Surface, C: Clock> Shared<S, C> {
    fn listener(&self, contact: Contact) -> &S::Listener {
        match contact {
            Contact::Start => &self.listeners.start,
            Contact::Move => &self.listeners.moved,
            Contact::End => &self.listeners.end,
        }
    }

    fn attach(&self, contact: Contact) {
        if let Err(e) = self.surface.add_listener(contact, self.listener(contact)) {
            clog(&format!("swipe: {e}"));
        }
    }

    fn detach(&self, contact: Contact) {
        if let Err(e) = self.surface.remove_listener(contact, self.listener(contact)) {
            clog(&format!("swipe: {e}"));
        }
    }

    fn suppress(&self, e: &S::Event) {
        if self.config.stop_propagation {
            e.stop_propagation();
        }
    }

    fn on_start(&self, e: &S::Event) {
        self.suppress(e);
        let Some(point) = e.first_point() else {
            return;
        };
        let now = self.clock.now();
        let newly_tracking = self.gesture.borrow_mut().start(point, now);
        if newly_tracking {
            self.attach(Contact::Move);
            self.attach(Contact::End);
        }
    }

    fn on_move(&self, e: &S::Event) {
        self.suppress(e);
        let Some(point) = e.first_point() else {
            return;
        };
        let moved = self.gesture.borrow_mut().advance(point);
        if let Some(d) = moved {
            self.on_swipe.emit(d);
        }
    }

    fn on_end(&self, e: &S::Event) {
        self.suppress(e);
        let now = self.clock.now();
        let finished = self.gesture.borrow_mut().finish(now, &self.config);
        let Some(end) = finished else {
            return;
        };
        self.detach(Contact::Move);
        self.detach(Contact::End);
        if let Some(end) = end {
            self.on_swipe_end.emit(end);
        }
    }
}
