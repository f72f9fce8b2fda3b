use serde::{Deserialize, Serialize};

/// Gesture input accepted by the selector.
///
/// Positions and deltas are normalized against the bar size, so `0.0` is the
/// left (or top) edge and `1.0` the right (or bottom) edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gesture {
    DragStart {
        horizontal: f32,
        vertical: f32,
    },
    /// One pointer move inside an active drag.
    ///
    /// `hit_area` is the normalized half width around a handle that still
    /// counts as touching it. When absent, the host's default is used.
    ///
    /// # Example
    /// ```
    /// use touchbar::Gesture;
    ///
    /// let gesture: Gesture = serde_json::from_str(r#"{"type":"drag","delta":0.05}"#)
    ///     .expect("valid gesture");
    /// assert_eq!(gesture, Gesture::Drag { delta: 0.05, hit_area: None });
    /// ```
    Drag {
        delta: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hit_area: Option<f32>,
    },
    DragEnd,
    DragCancel,
}

/// Cursor addressed by a focus change or a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    X,
    Y,
    Z,
    /// Both boundaries moved together.
    Range,
}

/// Kind of feedback a host may map onto haptics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    HandleMoved,
    FocusAcquired,
}

/// One feedback notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub handle: Handle,
}

impl Feedback {
    pub fn moved(handle: Handle) -> Self {
        Self {
            kind: FeedbackKind::HandleMoved,
            handle,
        }
    }

    pub fn focused(handle: Handle) -> Self {
        Self {
            kind: FeedbackKind::FocusAcquired,
            handle,
        }
    }
}

/// Read-only selector state handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorSnapshot {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    pub is_x_focus: bool,
    pub is_y_focus: bool,
    pub is_z_focus: bool,
    pub has_background: bool,
}

/// Events emitted by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Event {
    StateChanged(SelectorSnapshot),
    Feedback(Feedback),
}
