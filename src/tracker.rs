//! The public gesture tracker: owns the callbacks, the configuration and at
//! most one [`Binding`]. Any change to the surface, the callbacks or the
//! configuration tears the current binding down before a new one is made.
//!
//! Rebinding while a gesture is in flight drops that gesture without calling
//! `on_swipe_end`.

use yew::Callback;

use crate::model::{Displacement, SwipeConfig, SwipeEnd};
use crate::state::Binding;
use crate::surface::{Clock, Surface};
use crate::web::DateClock;

pub struct GestureTracker<S: Surface, C: Clock = DateClock> {
    on_swipe: Callback<Displacement>,
    on_swipe_end: Callback<SwipeEnd>,
    config: SwipeConfig,
    clock: C,
    binding: Option<Binding<S, C>>,
}

impl<S: Surface> GestureTracker<S, DateClock> {
    pub fn new(on_swipe: Callback<Displacement>, on_swipe_end: Callback<SwipeEnd>) -> Self {
        Self::with_config(on_swipe, on_swipe_end, SwipeConfig::default())
    }

    pub fn with_config(
        on_swipe: Callback<Displacement>,
        on_swipe_end: Callback<SwipeEnd>,
        config: SwipeConfig,
    ) -> Self {
        Self::with_clock(on_swipe, on_swipe_end, config, DateClock)
    }
}

impl<S: Surface, C: Clock> GestureTracker<S, C> {
    pub fn with_clock(
        on_swipe: Callback<Displacement>,
        on_swipe_end: Callback<SwipeEnd>,
        config: SwipeConfig,
        clock: C,
    ) -> Self {
        Self {
            on_swipe,
            on_swipe_end,
            config,
            clock,
            binding: None,
        }
    }

    /// Bind to `surface`, or unbind with `None`. No-op if it is already the
    /// bound surface.
    pub fn set_surface(&mut self, surface: Option<S>) {
        if self.surface() == surface.as_ref() {
            return;
        }
        self.rebind(surface, self.config);
    }

    pub fn set_callbacks(&mut self, on_swipe: Callback<Displacement>, on_swipe_end: Callback<SwipeEnd>) {
        if self.on_swipe == on_swipe && self.on_swipe_end == on_swipe_end {
            return;
        }
        self.on_swipe = on_swipe;
        self.on_swipe_end = on_swipe_end;
        let surface = self.surface().cloned();
        self.rebind(surface, self.config);
    }

    pub fn set_config(&mut self, config: SwipeConfig) {
        if self.config == config {
            return;
        }
        let surface = self.surface().cloned();
        self.rebind(surface, config);
    }

    /// Tear down the current binding unconditionally, then bind `surface`
    /// (if any) with `config`.
    pub fn rebind(&mut self, surface: Option<S>, config: SwipeConfig) {
        self.binding = None;
        self.config = config;
        self.binding = surface.map(|surface| {
            Binding::new(
                surface,
                self.clock.clone(),
                config,
                self.on_swipe.clone(),
                self.on_swipe_end.clone(),
            )
        });
    }

    pub fn unbind(&mut self) {
        self.binding = None;
    }

    pub fn surface(&self) -> Option<&S> {
        self.binding.as_ref().map(Binding::surface)
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn is_tracking(&self) -> bool {
        self.binding.as_ref().is_some_and(Binding::is_tracking)
    }
}
