/// A range of scalar values between `min` and `max`.
///
/// Gates which hit distances a ray cast accepts and bounds color channels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// The unit range every color channel lives in.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Every finite distance strictly greater than `epsilon`.
    pub fn beyond(epsilon: f32) -> Self {
        Self::new(epsilon, f32::INFINITY)
    }

    /// Strict membership: `min < x < max`.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Pull `x` into `[min, max]`. NaN lands on `min`.
    pub fn clamp(&self, x: f32) -> f32 {
        if x.is_nan() {
            self.min
        } else {
            x.clamp(self.min, self.max)
        }
    }
}
