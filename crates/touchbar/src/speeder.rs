use std::time::Duration;

/// Default interval after which the speed relaxes by one step.
pub const DEFAULT_FORGIVENESS: Duration = Duration::from_millis(150);

const STEP: f32 = 0.1;
const MAX_TILT_DEGREES: f32 = 15.0;

/// Signed drag speed indicator in `[-1, 1]`.
///
/// Every drag step nudges the speed by `0.1` in the drag direction and every
/// elapsed `forgiveness` interval relaxes it by `0.1` toward zero. Renderers
/// use [`Speeder::tilt_degrees`] to lean a handle while it is dragged fast.
///
/// # Example
/// ```
/// use std::time::Duration;
///
/// use touchbar::Speeder;
///
/// let mut speeder = Speeder::default();
/// speeder.record(0.02);
/// speeder.record(0.03);
/// assert!((speeder.tilt_degrees() - 3.0).abs() < 1e-4);
///
/// speeder.decay(Duration::from_millis(300));
/// assert_eq!(speeder.speed(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Speeder {
    speed: f32,
    forgiveness: Duration,
    pending: Duration,
}

impl Default for Speeder {
    fn default() -> Self {
        Self::new(DEFAULT_FORGIVENESS)
    }
}

impl Speeder {
    pub fn new(forgiveness: Duration) -> Self {
        Self {
            speed: 0.0,
            forgiveness,
            pending: Duration::ZERO,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn increase(&mut self) {
        self.speed = (self.speed + STEP).min(1.0);
    }

    pub fn decrease(&mut self) {
        self.speed = (self.speed - STEP).max(-1.0);
    }

    /// Nudges the speed in the direction of one drag delta.
    pub fn record(&mut self, delta: f32) {
        if delta > 0.0 {
            self.increase();
        } else if delta < 0.0 {
            self.decrease();
        }
    }

    /// Relaxes the speed toward zero for every whole `forgiveness` interval
    /// contained in the accumulated elapsed time.
    pub fn decay(&mut self, elapsed: Duration) {
        if self.forgiveness.is_zero() {
            self.speed = 0.0;
            return;
        }

        self.pending += elapsed;
        while self.pending >= self.forgiveness {
            self.pending -= self.forgiveness;
            self.speed = if self.speed.abs() <= STEP + f32::EPSILON {
                0.0
            } else {
                self.speed - STEP.copysign(self.speed)
            };
            if self.speed == 0.0 {
                self.pending = Duration::ZERO;
                break;
            }
        }
    }

    /// Handle tilt for the current speed, linear in `[-15, 15]` degrees.
    pub fn tilt_degrees(&self) -> f32 {
        self.speed * MAX_TILT_DEGREES
    }
}
