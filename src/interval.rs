use std::fmt;

use crate::config;

/// A range of the real line whose endpoints are independently open or closed.
///
/// `low <= high` is not enforced; producers in this crate always normalize
/// before handing an interval out. Unbounded ends are stored as infinities and
/// are always open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub low: f64,
    pub low_closed: bool,
    pub high: f64,
    pub high_closed: bool,
}

impl Interval {
    pub fn new(low: f64, low_closed: bool, high: f64, high_closed: bool) -> Self {
        Interval {
            low,
            low_closed: low_closed && low.is_finite(),
            high,
            high_closed: high_closed && high.is_finite(),
        }
    }

    pub fn closed(low: f64, high: f64) -> Self {
        Self::new(low, true, high, true)
    }

    pub fn open(low: f64, high: f64) -> Self {
        Self::new(low, false, high, false)
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, x: f64) -> bool {
        let above = if self.low_closed { x >= self.low } else { x > self.low };
        let below = if self.high_closed { x <= self.high } else { x < self.high };

        above && below
    }

    /// The smallest interval covering both.
    pub fn hull(&self, other: &Interval) -> Interval {
        let (low, low_closed) = if self.low < other.low || (self.low == other.low && self.low_closed) {
            (self.low, self.low_closed)
        } else {
            (other.low, other.low_closed)
        };
        let (high, high_closed) = if self.high > other.high || (self.high == other.high && self.high_closed) {
            (self.high, self.high_closed)
        } else {
            (other.high, other.high_closed)
        };

        Interval::new(low, low_closed, high, high_closed)
    }

    /// Replaces unbounded or out-of-range ends with the given bounds, closed.
    /// A finite end already on a bound keeps its own closedness.
    pub fn clamp_to(&self, min: f64, max: f64) -> Interval {
        let (low, low_closed) = if self.low.is_infinite() || self.low < min {
            (min, true)
        } else {
            (self.low, self.low_closed)
        };
        let (high, high_closed) = if self.high.is_infinite() || self.high > max {
            (max, true)
        } else {
            (self.high, self.high_closed)
        };

        Interval::new(low, low_closed, high, high_closed)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = config::precision();

        write!(
            f,
            "{}{:.*}, {:.*}{}",
            if self.low_closed { '[' } else { '(' },
            precision,
            self.low,
            precision,
            self.high,
            if self.high_closed { ']' } else { ')' },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_respects_endpoint_flags() {
        let closed = Interval::closed(2.5, 7.5);
        let open = Interval::open(2.5, 7.5);

        assert!(closed.contains(2.5) && closed.contains(7.5));
        assert!(!open.contains(2.5) && !open.contains(7.5));
        assert!(open.contains(5.));
    }

    #[test]
    fn test_infinite_ends_are_open() {
        let unbounded = Interval::closed(f64::NEG_INFINITY, 3.);

        assert!(!unbounded.low_closed);
        assert_eq!(unbounded.clamp_to(0., 10.), Interval::closed(0., 3.));
    }

    #[test]
    fn test_clamp_keeps_open_ends_on_bounds() {
        let support = Interval::open(0., 10.);

        assert_eq!(support.clamp_to(0., 10.), Interval::open(0., 10.));
        assert_eq!(Interval::open(-2., 12.).clamp_to(0., 10.), Interval::closed(0., 10.));
        assert_eq!(Interval::new(0., false, f64::INFINITY, false).clamp_to(0., 10.), Interval::new(0., false, 10., true));
    }

    #[test]
    fn test_hull() {
        let a = Interval::new(1., false, 2., true);
        let b = Interval::new(1., true, 4., false);

        assert_eq!(a.hull(&b), Interval::new(1., true, 4., false));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(2.5, true, 7.5, false).to_string(), "[2.5000, 7.5000)");
    }
}
