//! Plain data types shared by the tracker, the web surface and the demo host.

use serde::{Deserialize, Serialize};

/// A contact point in surface coordinates (CSS pixels for the DOM surface).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cumulative offset from a gesture's origin to its latest move sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    pub x: f64,
    pub y: f64,
}

/// Payload of the end-of-swipe callback.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeEnd {
    pub dx: f64,
    pub dy: f64,
    pub is_quick: bool,
}

/// The three lifecycle signals of a single-finger contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contact {
    Start,
    Move,
    End,
}

impl Contact {
    /// DOM event type this signal maps to.
    pub fn event_type(self) -> &'static str {
        match self {
            Contact::Start => "touchstart",
            Contact::Move => "touchmove",
            Contact::End => "touchend",
        }
    }
}

/// Tracker configuration. Any change forces a rebind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Call `stopPropagation` on every start/move/end event the tracker sees.
    pub stop_propagation: bool,
    /// Milliseconds. A quick swipe must end strictly before this.
    pub quick_swipe_duration: f64,
    /// Pixels. A quick swipe must travel strictly further than this on one axis.
    pub quick_swipe_distance: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            stop_propagation: true,
            quick_swipe_duration: 300.0,
            quick_swipe_distance: 50.0,
        }
    }
}

impl SwipeConfig {
    pub fn with_stop_propagation(mut self, stop_propagation: bool) -> Self {
        self.stop_propagation = stop_propagation;
        self
    }

    pub fn with_quick_swipe(mut self, duration: f64, distance: f64) -> Self {
        self.quick_swipe_duration = duration;
        self.quick_swipe_distance = distance;
        self
    }

    /// Read a config persisted with [`SwipeConfig::save`], falling back to defaults.
    pub fn load(key: &str) -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(key) {
                    if let Ok(cfg) = serde_json::from_str(&raw) {
                        return cfg;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self, key: &str) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    let _ = store.set_item(key, &s);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_thresholds() {
        let cfg = SwipeConfig::default();
        assert!(cfg.stop_propagation);
        assert_eq!(cfg.quick_swipe_duration, 300.0);
        assert_eq!(cfg.quick_swipe_distance, 50.0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: SwipeConfig = serde_json::from_str(r#"{"quick_swipe_distance": 80.0}"#).unwrap();
        assert_eq!(cfg.quick_swipe_distance, 80.0);
        assert_eq!(cfg.quick_swipe_duration, 300.0);
        assert!(cfg.stop_propagation);
    }

    #[test]
    fn contact_maps_to_touch_events() {
        assert_eq!(Contact::Start.event_type(), "touchstart");
        assert_eq!(Contact::Move.event_type(), "touchmove");
        assert_eq!(Contact::End.event_type(), "touchend");
    }
}
