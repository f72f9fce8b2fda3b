//! UI-agnostic gesture core for the video scrubbing touch bar.

pub mod api;
pub mod config;
pub mod error;
pub mod feedback;
pub mod frames;
pub mod selector;
pub mod speeder;

pub use api::{Event, Feedback, FeedbackKind, Gesture, Handle, SelectorSnapshot};
pub use config::TouchbarConfig;
pub use error::{Result, TouchbarError};
pub use feedback::{FeedbackSink, FnSink, dispatch_feedback};
pub use frames::{FrameLoad, FrameSource, VecFrameSource};
pub use selector::{RangeSelector, SelectorOptions};
pub use speeder::Speeder;
