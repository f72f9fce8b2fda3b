use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Result type used by the touchbar crate.
pub type Result<T> = std::result::Result<T, TouchbarError>;

/// Errors produced while building a selector or loading its configuration.
#[derive(Debug)]
pub enum TouchbarError {
    InvalidInitialCursors {
        x: f32,
        y: f32,
        z: Option<f32>,
    },
    InvalidScrubStrip {
        fraction: f32,
    },
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for TouchbarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInitialCursors { x, y, z: None } => {
                write!(f, "initial cursors must satisfy 0 <= x <= y <= 1, got x={x} y={y}")
            }
            Self::InvalidInitialCursors { x, y, z: Some(z) } => write!(
                f,
                "initial cursors must satisfy 0 <= x <= z <= y <= 1, got x={x} z={z} y={y}"
            ),
            Self::InvalidScrubStrip { fraction } => {
                write!(f, "scrub strip fraction must lie in [0, 1], got {fraction}")
            }
            Self::ConfigIo { path, source } => {
                write!(f, "failed to read config: {} ({source})", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(f, "failed to parse config at {} ({source})", path.display())
            }
        }
    }
}

impl std::error::Error for TouchbarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigIo { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
