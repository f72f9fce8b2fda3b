use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use touchbar::frames::{frame_index, position_ms};
use touchbar::{
    Feedback, FeedbackKind, FnSink, Gesture, RangeSelector, Speeder, dispatch_feedback,
};
use tracing::debug;

/// Time assumed between two script lines that carry no `elapsed_ms`.
pub const DEFAULT_GESTURE_STEP: Duration = Duration::from_millis(16);

/// Inputs of one replay besides the selector and the script.
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub hit_area: f32,
    pub frame_count: usize,
    pub duration_ms: u64,
    pub step: Duration,
    pub speeder: Speeder,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            hit_area: 0.0,
            frame_count: 0,
            duration_ms: 0,
            step: DEFAULT_GESTURE_STEP,
            speeder: Speeder::default(),
        }
    }
}

/// Counters reported once a script has been replayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub gestures: usize,
    pub events: usize,
    pub haptics: usize,
}

/// Replays a JSON-lines gesture script and writes every emitted event as one
/// JSON line to `out`.
///
/// Blank lines and lines starting with `#` are skipped. A line may carry
/// `elapsed_ms`, the time since the previous gesture; otherwise
/// `options.step` is assumed. The speeder relaxes by that time before the
/// gesture is applied. When `frame_count` is positive a final line maps the
/// cursors onto thumbnail indices and timeline positions.
pub fn replay<B, R, W>(
    selector: &mut RangeSelector<B>,
    reader: R,
    mut out: W,
    options: ReplayOptions,
) -> Result<ReplaySummary>
where
    R: BufRead,
    W: Write,
{
    let ReplayOptions {
        hit_area,
        frame_count,
        duration_ms,
        step,
        mut speeder,
    } = options;
    let mut summary = ReplaySummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("reading script line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (gesture, elapsed) = parse_line(trimmed, step)
            .with_context(|| format!("parsing gesture on line {line_no}"))?;
        speeder.decay(elapsed);
        let events = selector.handle_gesture(gesture, hit_area);
        debug!(line_no, ?gesture, events = events.len(), "gesture replayed");

        let mut moved = false;
        summary.haptics += dispatch_feedback(
            &events,
            &mut FnSink(|feedback: Feedback| {
                moved |= feedback.kind == FeedbackKind::HandleMoved;
            }),
        );
        if let Gesture::Drag { delta, .. } = gesture
            && moved
        {
            speeder.record(delta);
        }

        for event in &events {
            serde_json::to_writer(&mut out, event).context("writing event")?;
            writeln!(out).context("writing event")?;
        }
        summary.gestures += 1;
        summary.events += events.len();
    }

    if frame_count > 0 {
        let z = selector.z();
        let frames = json!({
            "frames": {
                "count": frame_count,
                "x": frame_index(selector.x(), frame_count),
                "y": frame_index(selector.y(), frame_count),
                "z": z.and_then(|z| frame_index(z, frame_count)),
            },
            "position_ms": {
                "x": position_ms(selector.x(), duration_ms),
                "y": position_ms(selector.y(), duration_ms),
                "z": z.map(|z| position_ms(z, duration_ms)),
            },
            "tilt_degrees": speeder.tilt_degrees(),
        });
        writeln!(out, "{frames}").context("writing frame summary")?;
    }
    out.flush().context("flushing output")?;

    Ok(summary)
}

fn parse_line(line: &str, step: Duration) -> Result<(Gesture, Duration)> {
    let mut value: Value = serde_json::from_str(line)?;
    let elapsed = match value.as_object_mut().and_then(|map| map.remove("elapsed_ms")) {
        Some(raw) => Duration::from_millis(
            raw.as_u64()
                .context("elapsed_ms must be a non-negative integer")?,
        ),
        None => step,
    };
    let gesture = serde_json::from_value(value)?;
    Ok((gesture, elapsed))
}
