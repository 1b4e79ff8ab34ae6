//! Axis scaling and transformation.

mod linear;

pub use linear::LinearScale;

/// Compute "nice" numbers for axis ticks.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate nice tick positions for a given range.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let tick_spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let nice_min = (min / tick_spacing).floor() * tick_spacing;
    let nice_max = (max / tick_spacing).ceil() * tick_spacing;

    let mut ticks = Vec::new();
    let mut tick = nice_min;
    while tick <= nice_max + tick_spacing * 0.5 {
        if tick >= min - tick_spacing * 0.001 && tick <= max + tick_spacing * 0.001 {
            ticks.push(tick);
        }
        tick += tick_spacing;
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_stay_within_range() {
        let ticks = nice_ticks(0.0, 10.0, 5);
        assert!(!ticks.is_empty());
        for t in &ticks {
            assert!(*t >= -0.01 && *t <= 10.01);
        }
    }

    #[test]
    fn nice_number_rounds_to_pleasant_values() {
        assert_eq!(nice_number(9.0, true), 10.0);
        assert_eq!(nice_number(2.2, true), 2.0);
    }
}
