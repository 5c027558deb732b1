use crate::config::{ROLL_AMPLITUDE, ROLL_PERIOD, ROLL_STEP, SIDE_ROLL_LIMIT};

/// Which of the roll-driving movement keys are held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollInput {
    pub forward: bool,
    pub left: bool,
    pub right: bool,
}

impl RollInput {
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.left || self.right)
    }
}

/// Procedural lean animation.
///
/// The roll frame is a purely visual signal. Holding forward winds it up
/// without bound until the period wrap, strafing leans it toward
/// `±side_limit`, and with no movement key held it steps back to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollAnimator {
    pub step: f64,
    pub amplitude: f64,
    pub period: f64,
    pub side_limit: f64,
}

impl RollAnimator {
    pub fn new() -> Self {
        Self {
            step: ROLL_STEP,
            amplitude: ROLL_AMPLITUDE,
            period: ROLL_PERIOD,
            side_limit: SIDE_ROLL_LIMIT,
        }
    }

    /// Next roll frame given the current one and the held keys
    pub fn advance(&self, frame: f64, input: RollInput) -> f64 {
        let mut frame = frame;

        if input.forward {
            frame += self.step;
        } else if input.is_idle() {
            frame = self.decay(frame);
        }

        if input.left {
            frame = if frame < self.side_limit {
                (frame + self.step).min(self.side_limit)
            } else {
                self.side_limit
            };
        }
        if input.right {
            frame = if frame > -self.side_limit {
                (frame - self.step).max(-self.side_limit)
            } else {
                -self.side_limit
            };
        }

        // Only the integer part is dropped, so e.g. 6.4 wraps to 0.4
        if frame > self.period {
            frame -= frame.floor();
        }

        frame
    }

    fn decay(&self, frame: f64) -> f64 {
        if frame.abs() <= self.step {
            0.0
        } else if frame > 0.0 {
            frame - self.step
        } else {
            frame + self.step
        }
    }

    /// Sideways offset of the camera up vector for a roll frame
    pub fn lean(&self, frame: f64) -> f64 {
        self.amplitude * frame.sin()
    }
}

impl Default for RollAnimator {
    fn default() -> Self {
        Self::new()
    }
}
