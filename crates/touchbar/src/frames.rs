//! Seam to the thumbnail provider shown behind the selector.
//!
//! Decoding is left to the host. The selector only reports normalized cursors;
//! these helpers turn them into frame indices and timeline positions.

/// Progress of one thumbnail as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameLoad<F> {
    Loading,
    Ready(F),
    Failed(String),
}

impl<F> FrameLoad<F> {
    pub fn ready(&self) -> Option<&F> {
        match self {
            Self::Ready(frame) => Some(frame),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Ordered thumbnails extracted from one media item.
pub trait FrameSource {
    type Frame;

    /// Total media duration in milliseconds.
    fn duration_ms(&self) -> u64;

    /// Number of thumbnails the source will eventually produce.
    fn frame_count(&self) -> usize;

    /// Current state of thumbnail `index`.
    fn frame(&self, index: usize) -> FrameLoad<&Self::Frame>;

    /// Thumbnail under a normalized cursor, if it finished loading.
    fn frame_at(&self, position: f32) -> Option<&Self::Frame> {
        let index = frame_index(position, self.frame_count())?;
        match self.frame(index) {
            FrameLoad::Ready(frame) => Some(frame),
            FrameLoad::Loading | FrameLoad::Failed(_) => None,
        }
    }
}

/// Maps a normalized cursor onto one of `frame_count` thumbnails.
///
/// Uses `round(position * frame_count)`, clamped to the last frame.
///
/// # Example
/// ```
/// use touchbar::frames::frame_index;
///
/// assert_eq!(frame_index(0.25, 10), Some(3));
/// assert_eq!(frame_index(1.0, 10), Some(9));
/// assert_eq!(frame_index(0.5, 0), None);
/// ```
pub fn frame_index(position: f32, frame_count: usize) -> Option<usize> {
    if frame_count == 0 || !position.is_finite() {
        return None;
    }
    let scaled = (position.clamp(0.0, 1.0) * frame_count as f32).round() as usize;
    Some(scaled.min(frame_count - 1))
}

/// Maps a normalized cursor onto the media timeline.
pub fn position_ms(position: f32, duration_ms: u64) -> u64 {
    if !position.is_finite() {
        return 0;
    }
    (f64::from(position.clamp(0.0, 1.0)) * duration_ms as f64).round() as u64
}

/// In-memory source that can be filled progressively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecFrameSource<F> {
    duration_ms: u64,
    frames: Vec<FrameLoad<F>>,
}

impl<F> VecFrameSource<F> {
    /// Creates a source whose `frame_count` thumbnails are all still loading.
    pub fn new(duration_ms: u64, frame_count: usize) -> Self {
        Self {
            duration_ms,
            frames: (0..frame_count).map(|_| FrameLoad::Loading).collect(),
        }
    }

    /// Stores the outcome for thumbnail `index`. Returns false when out of range.
    pub fn set(&mut self, index: usize, load: FrameLoad<F>) -> bool {
        match self.frames.get_mut(index) {
            Some(slot) => {
                *slot = load;
                true
            }
            None => false,
        }
    }

    /// Number of thumbnails that finished decoding.
    pub fn ready_count(&self) -> usize {
        self.frames
            .iter()
            .filter(|load| matches!(load, FrameLoad::Ready(_)))
            .count()
    }
}

impl<F> FrameSource for VecFrameSource<F> {
    type Frame = F;

    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frame(&self, index: usize) -> FrameLoad<&F> {
        match self.frames.get(index) {
            Some(FrameLoad::Ready(frame)) => FrameLoad::Ready(frame),
            Some(FrameLoad::Failed(reason)) => FrameLoad::Failed(reason.clone()),
            Some(FrameLoad::Loading) => FrameLoad::Loading,
            None => FrameLoad::Failed(format!("frame {index} out of range")),
        }
    }
}
