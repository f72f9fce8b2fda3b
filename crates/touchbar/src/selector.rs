use crate::api::{Event, Feedback, Gesture, Handle, SelectorSnapshot};
use crate::config::TouchbarConfig;
use crate::error::{Result, TouchbarError};
use tracing::{debug, trace, warn};

/// Default height fraction of the bottom strip that addresses the z handle.
pub const DEFAULT_SCRUB_STRIP: f32 = 0.25;

/// Construction parameters for [`RangeSelector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorOptions {
    pub enabled: bool,
    pub initial_x: f32,
    pub initial_y: f32,
    pub initial_z: f32,
    /// Enables the third, independent scrub handle.
    pub z_handle: bool,
    /// Bottom fraction of the bar height where touches may grab the z handle.
    pub scrub_strip: f32,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_x: 0.0,
            initial_y: 1.0,
            initial_z: 0.0,
            z_handle: false,
            scrub_strip: DEFAULT_SCRUB_STRIP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchPoint {
    horizontal: f32,
    vertical: f32,
}

/// Multi-handle range selector driven by drag gestures.
///
/// Holds two boundary cursors `x <= y` and, when enabled, a scrub cursor `z`
/// kept inside `[x, y]`. All values are normalized to `[0, 1]`. `B` is the
/// host's preview image handle and is never inspected.
///
/// # Example
/// ```
/// use touchbar::{RangeSelector, SelectorOptions};
///
/// let mut selector: RangeSelector = RangeSelector::new(SelectorOptions {
///     initial_x: 0.2,
///     initial_y: 0.8,
///     ..SelectorOptions::default()
/// })
/// .expect("valid cursors");
///
/// selector.on_drag_start(0.2, 0.5);
/// selector.on_drag(0.05, 0.1);
/// assert!(selector.is_x_focus());
/// assert!((selector.x() - 0.25).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct RangeSelector<B = ()> {
    enabled: bool,
    z_handle: bool,
    scrub_strip: f32,
    x: f32,
    y: f32,
    z: f32,
    focus: Option<Handle>,
    touch: Option<TouchPoint>,
    background: Option<B>,
}

impl<B> RangeSelector<B> {
    /// Creates a selector, rejecting initial cursors that break
    /// `0 <= x <= y <= 1` (and `x <= z <= y` with the z handle).
    pub fn new(options: SelectorOptions) -> Result<Self> {
        let SelectorOptions {
            enabled,
            initial_x: x,
            initial_y: y,
            initial_z: z,
            z_handle,
            scrub_strip,
        } = options;

        let checked_z = z_handle.then_some(z);
        let ordered = 0.0 <= x
            && x <= y
            && y <= 1.0
            && checked_z.is_none_or(|z| x <= z && z <= y);
        if !ordered {
            warn!(x, y, z = ?checked_z, "selector rejected: invalid initial cursors");
            return Err(TouchbarError::InvalidInitialCursors { x, y, z: checked_z });
        }
        if !(0.0..=1.0).contains(&scrub_strip) {
            warn!(scrub_strip, "selector rejected: invalid scrub strip");
            return Err(TouchbarError::InvalidScrubStrip {
                fraction: scrub_strip,
            });
        }

        debug!(enabled, x, y, z = ?checked_z, scrub_strip, "selector created");
        Ok(Self {
            enabled,
            z_handle,
            scrub_strip,
            x,
            y,
            z,
            focus: None,
            touch: None,
            background: None,
        })
    }

    /// Creates a selector from a loaded widget configuration.
    pub fn from_config(config: &TouchbarConfig) -> Result<Self> {
        Self::new(config.selector_options())
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn z_handle(&self) -> bool {
        self.z_handle
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Scrub cursor, present only when the z handle is enabled.
    pub fn z(&self) -> Option<f32> {
        self.z_handle.then_some(self.z)
    }

    pub fn is_x_focus(&self) -> bool {
        self.focus == Some(Handle::X)
    }

    pub fn is_y_focus(&self) -> bool {
        self.focus == Some(Handle::Y)
    }

    pub fn is_z_focus(&self) -> bool {
        self.focus == Some(Handle::Z)
    }

    /// Cursor currently bound to the drag, if any.
    pub fn focus(&self) -> Option<Handle> {
        self.focus
    }

    /// Returns true between a drag start and its end or cancel.
    pub fn is_dragging(&self) -> bool {
        self.touch.is_some()
    }

    pub fn background(&self) -> Option<&B> {
        self.background.as_ref()
    }

    /// Replaces the preview asset shown behind the handles.
    pub fn set_background(&mut self, background: Option<B>) {
        self.background = background;
    }

    pub fn snapshot(&self) -> SelectorSnapshot {
        SelectorSnapshot {
            x: self.x,
            y: self.y,
            z: self.z(),
            is_x_focus: self.is_x_focus(),
            is_y_focus: self.is_y_focus(),
            is_z_focus: self.is_z_focus(),
            has_background: self.background.is_some(),
        }
    }

    /// Applies one gesture and returns emitted events.
    ///
    /// `default_hit_area` is used for drags that carry no hit area of their own.
    pub fn handle_gesture(&mut self, gesture: Gesture, default_hit_area: f32) -> Vec<Event> {
        match gesture {
            Gesture::DragStart {
                horizontal,
                vertical,
            } => {
                self.on_drag_start(horizontal, vertical);
                Vec::new()
            }
            Gesture::Drag { delta, hit_area } => {
                self.on_drag(delta, hit_area.unwrap_or(default_hit_area))
            }
            Gesture::DragEnd => self.on_drag_end(),
            Gesture::DragCancel => self.on_drag_cancel(),
        }
    }

    /// Records where the pointer went down. Cursors are not touched.
    pub fn on_drag_start(&mut self, horizontal: f32, vertical: f32) {
        trace!(horizontal, vertical, "drag started");
        self.touch = Some(TouchPoint {
            horizontal,
            vertical,
        });
    }

    pub fn on_drag_end(&mut self) -> Vec<Event> {
        trace!("drag ended");
        self.release()
    }

    pub fn on_drag_cancel(&mut self) -> Vec<Event> {
        trace!("drag cancelled");
        self.release()
    }

    /// Applies one pointer move of `delta` along the bar.
    ///
    /// A focused handle keeps receiving the drag. Without focus, the touch
    /// point is matched against the handles within `hit_area`, and a touch
    /// strictly inside the range drags both boundaries together. The joint
    /// move is dropped as a whole when either boundary would leave `[0, 1]`.
    pub fn on_drag(&mut self, delta: f32, hit_area: f32) -> Vec<Event> {
        if !self.enabled {
            trace!(delta, "drag ignored: selector disabled");
            return Vec::new();
        }
        let Some(touch) = self.touch else {
            trace!(delta, "drag ignored: no active gesture");
            return Vec::new();
        };
        if !delta.is_finite() || !hit_area.is_finite() {
            warn!(delta, hit_area, "drag rejected: non-finite input");
            return Vec::new();
        }

        let before = self.snapshot();
        let mut events = Vec::new();
        let target = match self.focus {
            Some(handle) => Some(handle),
            None => self.hit_test(touch, hit_area),
        };
        match target {
            Some(Handle::X) => self.move_x(delta, &mut events),
            Some(Handle::Y) => self.move_y(delta, &mut events),
            Some(Handle::Z) => self.move_z(delta, &mut events),
            Some(Handle::Range) => self.move_range(delta, &mut events),
            None => trace!(horizontal = touch.horizontal, "drag hit no handle"),
        }

        self.touch = Some(TouchPoint {
            horizontal: touch.horizontal + delta,
            ..touch
        });

        let after = self.snapshot();
        if after != before {
            events.push(Event::StateChanged(after));
        }
        events
    }

    fn hit_test(&self, touch: TouchPoint, hit_area: f32) -> Option<Handle> {
        let h = touch.horizontal;
        if self.z_handle && self.in_scrub_strip(touch.vertical) && (h - self.z).abs() <= hit_area {
            Some(Handle::Z)
        } else if (h - self.x).abs() <= hit_area {
            Some(Handle::X)
        } else if (h - self.y).abs() <= hit_area {
            Some(Handle::Y)
        } else if self.x < h && h < self.y {
            Some(Handle::Range)
        } else {
            None
        }
    }

    fn in_scrub_strip(&self, vertical: f32) -> bool {
        (1.0 - self.scrub_strip..=1.0).contains(&vertical)
    }

    fn acquire(&mut self, handle: Handle, events: &mut Vec<Event>) {
        if self.focus == Some(handle) {
            return;
        }
        debug!(?handle, "focus acquired");
        self.focus = Some(handle);
        events.push(Event::Feedback(Feedback::focused(handle)));
    }

    fn move_x(&mut self, delta: f32, events: &mut Vec<Event>) {
        self.acquire(Handle::X, events);
        let target = (self.x + delta).clamp(0.0, self.y);
        if self.z_handle {
            self.z = self.z.max(target);
        }
        if target != self.x {
            debug!(from = self.x, to = target, "x moved");
            self.x = target;
            events.push(Event::Feedback(Feedback::moved(Handle::X)));
        }
    }

    fn move_y(&mut self, delta: f32, events: &mut Vec<Event>) {
        self.acquire(Handle::Y, events);
        let target = (self.y + delta).clamp(self.x, 1.0);
        if self.z_handle {
            self.z = self.z.min(target);
        }
        if target != self.y {
            debug!(from = self.y, to = target, "y moved");
            self.y = target;
            events.push(Event::Feedback(Feedback::moved(Handle::Y)));
        }
    }

    fn move_z(&mut self, delta: f32, events: &mut Vec<Event>) {
        if !self.z_handle {
            return;
        }
        self.acquire(Handle::Z, events);
        let target = (self.z + delta).clamp(self.x, self.y);
        if target != self.z {
            debug!(from = self.z, to = target, "z moved");
            self.z = target;
            events.push(Event::Feedback(Feedback::moved(Handle::Z)));
        }
    }

    fn move_range(&mut self, delta: f32, events: &mut Vec<Event>) {
        let next_x = self.x + delta;
        let next_y = self.y + delta;
        if next_x < 0.0 || next_y > 1.0 {
            debug!(delta, x = self.x, y = self.y, "joint move rejected: out of range");
            return;
        }
        if delta == 0.0 {
            return;
        }

        debug!(delta, x = next_x, y = next_y, "range moved");
        self.x = next_x;
        self.y = next_y;
        if self.z_handle {
            self.z = self.z.clamp(next_x, next_y);
        }
        events.push(Event::Feedback(Feedback::moved(Handle::Range)));
    }

    fn release(&mut self) -> Vec<Event> {
        self.touch = None;
        match self.focus.take() {
            Some(handle) => {
                debug!(?handle, "focus released");
                vec![Event::StateChanged(self.snapshot())]
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RangeSelector, SelectorOptions};
    use crate::api::{Event, Feedback, FeedbackKind, Gesture, Handle};
    use crate::error::TouchbarError;

    const HIT: f32 = 0.1;

    fn selector(x: f32, y: f32) -> RangeSelector {
        RangeSelector::new(SelectorOptions {
            initial_x: x,
            initial_y: y,
            ..SelectorOptions::default()
        })
        .expect("valid cursors")
    }

    fn selector_with_z(x: f32, y: f32, z: f32) -> RangeSelector {
        RangeSelector::new(SelectorOptions {
            initial_x: x,
            initial_y: y,
            initial_z: z,
            z_handle: true,
            ..SelectorOptions::default()
        })
        .expect("valid cursors")
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    fn feedback(events: &[Event]) -> Vec<Feedback> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Feedback(feedback) => Some(*feedback),
                Event::StateChanged(_) => None,
            })
            .collect()
    }

    #[test]
    fn new_rejects_x_below_zero() {
        let result = RangeSelector::<()>::new(SelectorOptions {
            initial_x: -0.1,
            ..SelectorOptions::default()
        });
        assert!(matches!(
            result,
            Err(TouchbarError::InvalidInitialCursors { z: None, .. })
        ));
    }

    #[test]
    fn new_rejects_x_after_y_and_y_above_one() {
        let crossed = RangeSelector::<()>::new(SelectorOptions {
            initial_x: 0.6,
            initial_y: 0.4,
            ..SelectorOptions::default()
        });
        let overflow = RangeSelector::<()>::new(SelectorOptions {
            initial_y: 1.5,
            ..SelectorOptions::default()
        });
        assert!(crossed.is_err());
        assert!(overflow.is_err());
    }

    #[test]
    fn new_rejects_nan_cursor() {
        let result = RangeSelector::<()>::new(SelectorOptions {
            initial_y: f32::NAN,
            ..SelectorOptions::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn new_checks_z_only_when_z_handle_is_enabled() {
        let outside = SelectorOptions {
            initial_x: 0.2,
            initial_y: 0.8,
            initial_z: 0.9,
            ..SelectorOptions::default()
        };
        assert!(RangeSelector::<()>::new(outside).is_ok());

        let result = RangeSelector::<()>::new(SelectorOptions {
            z_handle: true,
            ..outside
        });
        assert!(matches!(
            result,
            Err(TouchbarError::InvalidInitialCursors { z: Some(_), .. })
        ));
    }

    #[test]
    fn new_rejects_scrub_strip_outside_unit_range() {
        let result = RangeSelector::<()>::new(SelectorOptions {
            scrub_strip: 1.5,
            ..SelectorOptions::default()
        });
        assert!(matches!(
            result,
            Err(TouchbarError::InvalidScrubStrip { .. })
        ));
    }

    #[test]
    fn drag_near_x_locks_x_and_moves_it() {
        let mut selector = selector(0.2, 0.8);
        selector.on_drag_start(0.2, 0.5);

        let events = selector.on_drag(0.05, HIT);

        assert_close(selector.x(), 0.25);
        assert_eq!(selector.y(), 0.8);
        assert!(selector.is_x_focus());
        assert!(!selector.is_y_focus());
        assert_eq!(
            feedback(&events),
            vec![Feedback::focused(Handle::X), Feedback::moved(Handle::X)]
        );
        assert!(matches!(events.last(), Some(Event::StateChanged(_))));
    }

    #[test]
    fn focused_handle_keeps_the_drag_when_pointer_leaves_hit_area() {
        let mut selector = selector(0.2, 0.8);
        selector.on_drag_start(0.8, 0.5);

        let _ = selector.on_drag(-0.3, HIT);
        let events = selector.on_drag(-0.1, HIT);

        assert_close(selector.y(), 0.4);
        assert!(selector.is_y_focus());
        assert_eq!(feedback(&events), vec![Feedback::moved(Handle::Y)]);
    }

    #[test]
    fn x_clamps_to_zero_exactly() {
        let mut selector = selector(0.05, 0.8);
        selector.on_drag_start(0.05, 0.5);

        let _ = selector.on_drag(-0.5, HIT);

        assert_eq!(selector.x(), 0.0);
    }

    #[test]
    fn y_clamps_to_one_exactly() {
        let mut selector = selector(0.2, 0.95);
        selector.on_drag_start(0.95, 0.5);

        let _ = selector.on_drag(0.5, HIT);

        assert_eq!(selector.y(), 1.0);
    }

    #[test]
    fn x_cannot_pass_y() {
        let mut selector = selector(0.4, 0.5);
        selector.on_drag_start(0.4, 0.5);

        let _ = selector.on_drag(0.3, 0.05);

        assert_eq!(selector.x(), 0.5);
        assert_eq!(selector.y(), 0.5);
    }

    #[test]
    fn x_wins_when_both_handles_are_within_hit_area() {
        let mut selector = selector(0.45, 0.5);
        selector.on_drag_start(0.48, 0.5);

        let _ = selector.on_drag(-0.1, HIT);

        assert!(selector.is_x_focus());
        assert_close(selector.x(), 0.35);
    }

    #[test]
    fn touch_inside_range_moves_both_boundaries_without_focus() {
        let mut selector = selector(0.3, 0.7);
        selector.on_drag_start(0.5, 0.5);

        let events = selector.on_drag(0.1, HIT);

        assert_close(selector.x(), 0.4);
        assert_close(selector.y(), 0.8);
        assert_eq!(selector.focus(), None);
        assert_eq!(feedback(&events), vec![Feedback::moved(Handle::Range)]);
    }

    #[test]
    fn joint_move_past_zero_is_rejected_entirely() {
        let mut selector = selector(0.3, 0.7);
        selector.on_drag_start(0.5, 0.5);

        let events = selector.on_drag(-0.35, HIT);

        assert_eq!(selector.x(), 0.3);
        assert_eq!(selector.y(), 0.7);
        assert!(events.is_empty());
    }

    #[test]
    fn joint_move_past_one_is_rejected_entirely() {
        let mut selector = selector(0.3, 0.7);
        selector.on_drag_start(0.5, 0.5);

        let _ = selector.on_drag(0.31, HIT);

        assert_eq!(selector.x(), 0.3);
        assert_eq!(selector.y(), 0.7);
    }

    #[test]
    fn joint_move_reclamps_z_into_the_new_range() {
        let mut selector = selector_with_z(0.3, 0.7, 0.3);
        selector.on_drag_start(0.5, 0.5);

        let _ = selector.on_drag(0.2, HIT);

        assert_close(selector.x(), 0.5);
        assert_close(selector.z().expect("z handle enabled"), 0.5);
    }

    #[test]
    fn touch_outside_range_and_handles_changes_nothing() {
        let mut selector = selector(0.4, 0.6);
        selector.on_drag_start(0.05, 0.5);

        let events = selector.on_drag(0.1, HIT);

        assert!(events.is_empty());
        assert_eq!(selector.x(), 0.4);
        assert_eq!(selector.y(), 0.6);
    }

    #[test]
    fn touch_point_advances_with_each_drag() {
        let mut selector = selector(0.3, 0.7);
        selector.on_drag_start(0.15, 0.5);

        // 0.15 is outside the hit area of x; after advancing it reaches 0.25.
        let first = selector.on_drag(0.1, HIT);
        let _ = selector.on_drag(0.01, HIT);

        assert!(first.is_empty());
        assert!(selector.is_x_focus());
        assert_close(selector.x(), 0.31);
    }

    #[test]
    fn rejected_joint_move_still_advances_touch_point() {
        let mut selector = selector(0.3, 0.7);
        selector.on_drag_start(0.5, 0.5);

        // Rejected at the left edge, yet the touch point moves to 0.15.
        let rejected = selector.on_drag(-0.35, HIT);
        // 0.15 hits nothing and the touch point moves on to 0.25.
        let missed = selector.on_drag(0.1, HIT);
        let _ = selector.on_drag(0.05, HIT);

        assert!(rejected.is_empty());
        assert!(missed.is_empty());
        assert!(selector.is_x_focus());
        assert_close(selector.x(), 0.35);
        assert_eq!(selector.y(), 0.7);
    }

    #[test]
    fn y_drag_down_pulls_z_in() {
        let mut selector = selector_with_z(0.2, 0.8, 0.3);
        selector.on_drag_start(0.8, 0.5);

        let _ = selector.on_drag(-0.5, HIT);

        assert!(selector.is_y_focus());
        assert_close(selector.y(), 0.3);
        assert_close(selector.z().expect("z handle enabled"), 0.3);
        assert!(selector.z().expect("z handle enabled") <= selector.y());
    }

    #[test]
    fn y_drag_below_x_stops_at_x_and_carries_z() {
        let mut selector = selector_with_z(0.2, 0.8, 0.3);
        selector.on_drag_start(0.8, 0.5);

        let _ = selector.on_drag(-0.6, HIT);

        assert_close(selector.y(), 0.2);
        assert_eq!(selector.y(), selector.x());
        assert_eq!(selector.z(), Some(selector.y()));
    }

    #[test]
    fn x_drag_up_pushes_z() {
        let mut selector = selector_with_z(0.2, 0.8, 0.3);
        selector.on_drag_start(0.2, 0.1);

        let _ = selector.on_drag(0.3, HIT);

        assert_close(selector.x(), 0.5);
        assert_close(selector.z().expect("z handle enabled"), 0.5);
    }

    #[test]
    fn touch_in_scrub_strip_grabs_z_before_x() {
        let mut selector = selector_with_z(0.2, 0.8, 0.25);
        selector.on_drag_start(0.22, 0.9);

        let events = selector.on_drag(0.1, HIT);

        assert!(selector.is_z_focus());
        assert_close(selector.z().expect("z handle enabled"), 0.35);
        assert_eq!(selector.x(), 0.2);
        assert_eq!(
            feedback(&events),
            vec![Feedback::focused(Handle::Z), Feedback::moved(Handle::Z)]
        );
    }

    #[test]
    fn scrub_strip_upper_edge_is_inclusive() {
        let mut on_edge = selector_with_z(0.2, 0.8, 0.25);
        on_edge.on_drag_start(0.22, 0.75);
        let _ = on_edge.on_drag(0.1, HIT);

        let mut just_above = selector_with_z(0.2, 0.8, 0.25);
        just_above.on_drag_start(0.22, 0.74);
        let _ = just_above.on_drag(0.1, HIT);

        assert!(on_edge.is_z_focus());
        assert_eq!(on_edge.x(), 0.2);
        assert!(just_above.is_x_focus());
    }

    #[test]
    fn touch_above_scrub_strip_grabs_x_instead_of_z() {
        let mut selector = selector_with_z(0.2, 0.8, 0.25);
        selector.on_drag_start(0.22, 0.5);

        let _ = selector.on_drag(0.1, HIT);

        assert!(selector.is_x_focus());
        assert_close(selector.z().expect("z handle enabled"), 0.3);
    }

    #[test]
    fn z_stays_within_range_while_focused() {
        let mut selector = selector_with_z(0.2, 0.8, 0.5);
        selector.on_drag_start(0.5, 1.0);

        let _ = selector.on_drag(0.6, HIT);
        assert_eq!(selector.z(), Some(0.8));

        let _ = selector.on_drag(-2.0, HIT);
        assert_eq!(selector.z(), Some(0.2));
    }

    #[test]
    fn z_is_hidden_without_z_handle() {
        let mut selector = selector(0.2, 0.8);
        selector.on_drag_start(0.0, 1.0);

        let _ = selector.on_drag(0.1, HIT);

        assert_eq!(selector.z(), None);
        assert!(!selector.is_z_focus());
    }

    #[test]
    fn drag_end_clears_focus_without_moving_cursors() {
        let mut selector = selector(0.2, 0.8);
        selector.on_drag_start(0.2, 0.5);
        let _ = selector.on_drag(0.1, HIT);
        let x = selector.x();

        let events = selector.on_drag_end();

        assert_eq!(selector.focus(), None);
        assert!(!selector.is_dragging());
        assert_eq!(selector.x(), x);
        assert!(matches!(
            events.as_slice(),
            [Event::StateChanged(snapshot)] if !snapshot.is_x_focus
        ));
    }

    #[test]
    fn drag_cancel_mid_move_resets_gesture() {
        let mut selector = selector_with_z(0.2, 0.8, 0.5);
        selector.on_drag_start(0.5, 0.95);
        let _ = selector.on_drag(0.1, HIT);

        let _ = selector.on_drag_cancel();
        let events = selector.on_drag(0.1, HIT);

        assert!(!selector.is_z_focus());
        assert!(events.is_empty());
        assert_close(selector.z().expect("z handle enabled"), 0.6);
    }

    #[test]
    fn drag_end_without_focus_emits_nothing() {
        let mut selector = selector(0.2, 0.8);
        selector.on_drag_start(0.5, 0.5);

        assert!(selector.on_drag_end().is_empty());
    }

    #[test]
    fn disabled_selector_ignores_drags() {
        let mut selector: RangeSelector = RangeSelector::new(SelectorOptions {
            enabled: false,
            initial_x: 0.2,
            initial_y: 0.8,
            ..SelectorOptions::default()
        })
        .expect("valid cursors");
        selector.on_drag_start(0.2, 0.5);

        let events = selector.on_drag(0.1, HIT);

        assert!(events.is_empty());
        assert_eq!(selector.x(), 0.2);
        assert_eq!(selector.focus(), None);
    }

    #[test]
    fn non_finite_delta_is_dropped() {
        let mut selector = selector(0.2, 0.8);
        selector.on_drag_start(0.2, 0.5);

        assert!(selector.on_drag(f32::NAN, HIT).is_empty());
        assert!(selector.on_drag(f32::INFINITY, HIT).is_empty());
        assert!(selector.on_drag(0.1, f32::NAN).is_empty());
        assert_eq!(selector.x(), 0.2);
        assert_eq!(selector.focus(), None);
    }

    #[test]
    fn zero_delta_on_handle_acquires_focus_without_move_feedback() {
        let mut selector = selector(0.2, 0.8);
        selector.on_drag_start(0.2, 0.5);

        let events = selector.on_drag(0.0, HIT);

        assert!(selector.is_x_focus());
        assert_eq!(feedback(&events), vec![Feedback::focused(Handle::X)]);
    }

    #[test]
    fn handle_gesture_falls_back_to_default_hit_area() {
        let mut selector = selector(0.2, 0.8);
        let _ = selector.handle_gesture(
            Gesture::DragStart {
                horizontal: 0.25,
                vertical: 0.5,
            },
            HIT,
        );

        let narrow = selector.handle_gesture(
            Gesture::Drag {
                delta: 0.0,
                hit_area: Some(0.01),
            },
            HIT,
        );
        let wide = selector.handle_gesture(
            Gesture::Drag {
                delta: 0.05,
                hit_area: None,
            },
            HIT,
        );

        // With the narrow area the touch lands inside the range and a zero
        // joint move is a no-op.
        assert!(narrow.is_empty());
        assert!(
            feedback(&wide)
                .iter()
                .any(|feedback| feedback.kind == FeedbackKind::FocusAcquired)
        );
        assert!(selector.is_x_focus());
    }

    #[test]
    fn background_is_replaced_and_reported_in_snapshot() {
        let mut selector: RangeSelector<&'static str> =
            RangeSelector::new(SelectorOptions::default()).expect("valid cursors");
        assert!(!selector.snapshot().has_background);

        selector.set_background(Some("strip-a"));
        selector.set_background(Some("strip-b"));

        assert_eq!(selector.background(), Some(&"strip-b"));
        assert!(selector.snapshot().has_background);

        selector.set_background(None);
        assert_eq!(selector.background(), None);
    }
}
