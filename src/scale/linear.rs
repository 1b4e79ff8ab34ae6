//! Linear scale transformation.

use super::nice_ticks;

/// A linear scale mapping a data range onto normalized [0, 1] coordinates.
#[derive(Debug, Clone)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    /// Create a linear scale with automatic range (to be set later).
    pub fn auto() -> Self {
        LinearScale { min: 0.0, max: 1.0 }
    }

    /// Transform a data value to normalized coordinates (0.0 - 1.0).
    pub fn transform(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.5;
        }
        (value - self.min) / range
    }

    /// Set the data range for this scale.
    pub fn set_range(&mut self, min: f64, max: f64) {
        if min >= max {
            // Degenerate range: pad so the data sits mid-scale
            let padding = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            self.min = min - padding;
            self.max = max + padding;
        } else {
            self.min = min;
            self.max = max;
        }
    }

    /// Get the current data range.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Generate nice tick values for this scale.
    pub fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, num_ticks)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_maps_range_to_unit_interval() {
        let mut scale = LinearScale::auto();
        scale.set_range(10.0, 20.0);
        assert_eq!(scale.transform(10.0), 0.0);
        assert_eq!(scale.transform(20.0), 1.0);
        assert_eq!(scale.transform(15.0), 0.5);
    }

    #[test]
    fn degenerate_range_is_padded() {
        let mut scale = LinearScale::auto();
        scale.set_range(5.0, 5.0);
        let (min, max) = scale.range();
        assert!(min < 5.0 && max > 5.0);
    }
}
