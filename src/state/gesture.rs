// Single-contact swipe state machine: Idle -> Tracking -> Idle.
use crate::model::{Displacement, Point, SwipeConfig, SwipeEnd};

/// Where and when the current contact began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
    pub start_time: f64,
}

/// Transient per-gesture state. Lives from contact-start to contact-end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub origin: Origin,
    /// `None` until the first move sample.
    pub displacement: Option<Displacement>,
}

/// Owned single slot holding at most one live gesture.
#[derive(Default, Debug, Clone)]
pub struct Gesture {
    slot: Option<GestureState>,
}

impl Gesture {
    pub fn is_tracking(&self) -> bool {
        self.slot.is_some()
    }

    pub fn current(&self) -> Option<&GestureState> {
        self.slot.as_ref()
    }

    /// Begin a gesture at `point`. Returns `true` if the slot was idle, i.e.
    /// move/end listeners still need attaching. A start while tracking replaces
    /// the previous state.
    pub fn start(&mut self, point: Point, now: f64) -> bool {
        let was_idle = self.slot.is_none();
        self.slot = Some(GestureState {
            origin: Origin {
                x: point.x,
                y: point.y,
                start_time: now,
            },
            displacement: None,
        });
        was_idle
    }

    /// Record a move sample. Returns the cumulative displacement, or `None`
    /// when no gesture is live.
    pub fn advance(&mut self, point: Point) -> Option<Displacement> {
        let state = self.slot.as_mut()?;
        let d = Displacement {
            x: point.x - state.origin.x,
            y: point.y - state.origin.y,
        };
        state.displacement = Some(d);
        Some(d)
    }

    /// Close the gesture. The outer `Option` is `None` when nothing was live;
    /// the inner one is `None` for a tap (no move sample).
    pub fn finish(&mut self, now: f64, config: &SwipeConfig) -> Option<Option<SwipeEnd>> {
        let state = self.slot.take()?;
        Some(state.displacement.map(|d| SwipeEnd {
            dx: d.x,
            dy: d.y,
            is_quick: is_quick_swipe(d, now - state.origin.start_time, config),
        }))
    }

    /// Drop any live gesture without reporting it.
    pub fn abandon(&mut self) -> bool {
        self.slot.take().is_some()
    }
}

/// Strictly faster than the duration bound and strictly further than the
/// distance bound on at least one axis.
pub fn is_quick_swipe(d: Displacement, elapsed: f64, config: &SwipeConfig) -> bool {
    elapsed < config.quick_swipe_duration
        && (d.x.abs() > config.quick_swipe_distance || d.y.abs() > config.quick_swipe_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(duration: f64, distance: f64) -> SwipeConfig {
        SwipeConfig::default().with_quick_swipe(duration, distance)
    }

    #[test]
    fn displacement_is_cumulative_from_origin() {
        let mut g = Gesture::default();
        assert!(g.start(Point::new(150.0, 150.0), 0.0));
        assert_eq!(g.advance(Point::new(160.0, 140.0)), Some(Displacement { x: 10.0, y: -10.0 }));
        assert_eq!(g.advance(Point::new(200.0, 200.0)), Some(Displacement { x: 50.0, y: 50.0 }));
        assert_eq!(
            g.current().and_then(|s| s.displacement),
            Some(Displacement { x: 50.0, y: 50.0 })
        );
    }

    #[test]
    fn move_and_end_without_start_are_noops() {
        let mut g = Gesture::default();
        assert_eq!(g.advance(Point::new(1.0, 1.0)), None);
        assert_eq!(g.finish(10.0, &SwipeConfig::default()), None);
        assert!(!g.is_tracking());
    }

    #[test]
    fn tap_finishes_without_swipe_end() {
        let mut g = Gesture::default();
        g.start(Point::new(0.0, 0.0), 0.0);
        assert_eq!(g.finish(5.0, &SwipeConfig::default()), Some(None));
        assert!(!g.is_tracking());
    }

    #[test]
    fn restart_replaces_state_and_reports_already_tracking() {
        let mut g = Gesture::default();
        assert!(g.start(Point::new(0.0, 0.0), 0.0));
        g.advance(Point::new(30.0, 0.0));
        assert!(!g.start(Point::new(100.0, 100.0), 50.0));
        let s = g.current().copied().unwrap();
        assert_eq!(s.origin, Origin { x: 100.0, y: 100.0, start_time: 50.0 });
        assert_eq!(s.displacement, None);
    }

    #[test]
    fn quick_classification_uses_strict_bounds() {
        let cases = [
            ("quick", 99.0, 101.0, true),
            ("too slow", 100.0, 101.0, false),
            ("too short", 99.0, 100.0, false),
            ("too slow and too short", 100.0, 100.0, false),
        ];
        for (name, duration, distance, expected) in cases {
            let mut g = Gesture::default();
            g.start(Point::new(100.0, 100.0), 0.0);
            g.advance(Point::new(100.0 + distance, 100.0 + distance));
            let end = g.finish(duration, &cfg(100.0, 100.0)).flatten().unwrap();
            assert_eq!(end, SwipeEnd { dx: distance, dy: distance, is_quick: expected }, "{name}");
        }
    }

    #[test]
    fn one_axis_is_enough_for_quick() {
        let d = Displacement { x: -120.0, y: 3.0 };
        assert!(is_quick_swipe(d, 10.0, &cfg(100.0, 100.0)));
        let d = Displacement { x: 0.0, y: 101.0 };
        assert!(is_quick_swipe(d, 10.0, &cfg(100.0, 100.0)));
    }

    #[test]
    fn abandon_clears_slot() {
        let mut g = Gesture::default();
        assert!(!g.abandon());
        g.start(Point::new(0.0, 0.0), 0.0);
        assert!(g.abandon());
        assert!(!g.is_tracking());
    }
}
