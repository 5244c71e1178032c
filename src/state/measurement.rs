//! One-time size measurement.

/// Progress of a one-time measurement.
///
/// A header is laid out invisibly once (`Measuring`) and its natural height is
/// captured exactly once. A height of `0.0` is a valid result and is never
/// re-measured.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Measurement {
    /// Nothing has been laid out yet
    #[default]
    Unmeasured,
    /// A sizing pass is in flight
    Measuring,
    /// The natural height has been captured
    Measured(f32),
}

impl Measurement {
    /// Starts the sizing pass. Returns true only on the `Unmeasured -> Measuring` transition.
    pub fn begin(&mut self) -> bool {
        if *self == Measurement::Unmeasured {
            *self = Measurement::Measuring;
            true
        } else {
            false
        }
    }

    /// Captures the measured height. Returns true only the first time a value is accepted.
    ///
    /// A completion without a preceding [`Measurement::begin`] is accepted as well,
    /// so a view reporting its size directly is still captured once.
    pub fn complete(&mut self, height: f32) -> bool {
        match *self {
            Measurement::Unmeasured | Measurement::Measuring => {
                *self = Measurement::Measured(height);
                true
            }
            Measurement::Measured(_) => false,
        }
    }

    /// Returns true once a height has been captured.
    pub fn is_measured(&self) -> bool {
        matches!(self, Measurement::Measured(_))
    }

    /// Returns the captured height, or `0.0` while unmeasured.
    pub fn height(&self) -> f32 {
        match *self {
            Measurement::Measured(height) => height,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unmeasured() {
        let m = Measurement::default();
        assert!(!m.is_measured());
        assert_eq!(m.height(), 0.0);
    }

    #[test]
    fn test_begin_only_once() {
        let mut m = Measurement::default();
        assert!(m.begin());
        assert!(!m.begin());
        assert_eq!(m, Measurement::Measuring);
    }

    #[test]
    fn test_capture_fires_exactly_once() {
        let mut m = Measurement::default();
        m.begin();

        let captures = [80.0, 95.0, 60.0, 80.0]
            .into_iter()
            .filter(|&h| m.complete(h))
            .count();

        assert_eq!(captures, 1);
        assert_eq!(m.height(), 80.0);
        assert!(!m.begin());
    }

    #[test]
    fn test_zero_height_is_a_real_measurement() {
        let mut m = Measurement::default();
        m.begin();
        assert!(m.complete(0.0));
        assert!(m.is_measured());
        assert!(!m.begin());
        assert!(!m.complete(42.0));
        assert_eq!(m.height(), 0.0);
    }
}
