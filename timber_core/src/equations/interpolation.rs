//! # Code Table Interpolation
//!
//! Piecewise-linear lookup over a sorted breakpoint table, as used for design
//! code tables such as the AS 1720.1 Table 2.6 bearing-length factor. Values
//! outside the table range clamp to the first/last entry.
//!
//! ## Example
//!
//! ```rust
//! use timber_core::equations::interpolation::InterpolationTable;
//!
//! let table = InterpolationTable::new(&[(0.0, 1.0), (10.0, 2.0)]).unwrap();
//! assert_eq!(table.lookup(5.0), 1.5);
//! assert_eq!(table.lookup(-3.0), 1.0);
//! assert_eq!(table.lookup(25.0), 2.0);
//! ```

/// A borrowed, non-empty table of `(x, y)` breakpoints sorted by ascending `x`.
#[derive(Debug, Clone, Copy)]
pub struct InterpolationTable<'a> {
    points: &'a [(f64, f64)],
}

impl<'a> InterpolationTable<'a> {
    /// Wrap a breakpoint slice, or `None` if it is empty.
    ///
    /// Usable in `const` items, so a code table can be checked at compile
    /// time. Ascending `x` order is checked in debug builds only.
    pub const fn new(points: &'a [(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(InterpolationTable { points })
        }
    }

    /// The breakpoints backing this table
    pub fn points(&self) -> &'a [(f64, f64)] {
        self.points
    }

    /// Interpolated value at `x`, clamped to the table's end values.
    pub fn lookup(&self, x: f64) -> f64 {
        debug_assert!(
            self.points.windows(2).all(|w| w[0].0 < w[1].0),
            "interpolation table must be sorted by ascending x"
        );

        // Non-empty by construction
        let (first_x, first_y) = self.points[0];
        let (last_x, last_y) = self.points[self.points.len() - 1];
        if x <= first_x {
            return first_y;
        }
        if x >= last_x {
            return last_y;
        }

        // First breakpoint strictly greater than x; x > first_x guarantees idx >= 1
        let idx = self.points.partition_point(|&(px, _)| px <= x);
        let (x0, y0) = self.points[idx - 1];
        let (x1, y1) = self.points[idx];
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [(f64, f64); 4] = [(12.0, 1.75), (25.0, 1.40), (50.0, 1.20), (150.0, 1.00)];

    #[test]
    fn test_exact_breakpoints() {
        let t = InterpolationTable::new(&TABLE).unwrap();
        assert_eq!(t.lookup(12.0), 1.75);
        assert_eq!(t.lookup(25.0), 1.40);
        assert_eq!(t.lookup(50.0), 1.20);
        assert_eq!(t.lookup(150.0), 1.00);
    }

    #[test]
    fn test_between_breakpoints() {
        let t = InterpolationTable::new(&TABLE).unwrap();
        // Halfway between 50 and 150
        assert!((t.lookup(100.0) - 1.10).abs() < 1e-12);
        // A fifth of the way from 25 to 50
        assert!((t.lookup(30.0) - 1.36).abs() < 1e-12);
    }

    #[test]
    fn test_clamps_outside_range() {
        let t = InterpolationTable::new(&TABLE).unwrap();
        assert_eq!(t.lookup(0.0), 1.75);
        assert_eq!(t.lookup(500.0), 1.00);
    }

    #[test]
    fn test_single_point_table() {
        let single = [(10.0, 3.0)];
        let t = InterpolationTable::new(&single).unwrap();
        assert_eq!(t.lookup(1.0), 3.0);
        assert_eq!(t.lookup(100.0), 3.0);
    }

    #[test]
    fn test_empty_table_rejected() {
        let empty: [(f64, f64); 0] = [];
        assert!(InterpolationTable::new(&empty).is_none());
    }
}
