//! Statistical helpers for histogram, box, and density renderers.

/// A single histogram bin: [start, end) with a count.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Bin a data collection into `bins` equal-width intervals spanning the data
/// range. The final bin is closed on both ends so the maximum lands in it.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Constant data: one bin centered on the value
    let (min, max) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in &finite {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Five-number summary for a box plot, with outliers beyond 1.5 IQR fences.
#[derive(Debug, Clone)]
pub struct BoxStats {
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

/// Compute box plot statistics. Returns `None` for empty or all-NaN data.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len();

    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    let q1 = sorted[n / 4];
    let q3 = sorted[(3 * n / 4).min(n - 1)];

    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|&v| v >= lower_fence)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= upper_fence)
        .unwrap_or(q3);

    let outliers: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|&v| v < lower_fence || v > upper_fence)
        .collect();

    Some(BoxStats {
        whisker_low,
        q1,
        median,
        q3,
        whisker_high,
        outliers,
    })
}

/// Sample a Gaussian kernel density estimate of `values` at `samples` evenly
/// spaced points, using Silverman's rule of thumb for the bandwidth. The
/// sampled range extends 10% beyond the data range on each side.
pub fn kernel_density(values: &[f64], samples: usize) -> Vec<(f64, f64)> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.len() < 2 || samples < 2 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min >= max {
        return Vec::new();
    }

    let n = finite.len() as f64;
    let mean = finite.iter().sum::<f64>() / n;
    let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    // Silverman's rule of thumb
    let bandwidth = (1.06 * std_dev * n.powf(-0.2)).max(1e-3);

    let range = max - min;
    let x_min = min - range * 0.1;
    let x_max = max + range * 0.1;

    let norm = (2.0 * std::f64::consts::PI).sqrt() * bandwidth;
    (0..samples)
        .map(|i| {
            let x = x_min + (i as f64 / (samples - 1) as f64) * (x_max - x_min);
            let density: f64 = finite
                .iter()
                .map(|&xi| {
                    let u = (x - xi) / bandwidth;
                    (-0.5 * u * u).exp() / norm
                })
                .sum::<f64>()
                / n;
            (x, density)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_cover_all_values() {
        let values = vec![1.0, 2.0, 2.5, 3.0, 4.0, 4.9];
        let bins = histogram_bins(&values, 4);
        assert_eq!(bins.len(), 4);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn histogram_maximum_lands_in_last_bin() {
        let bins = histogram_bins(&[0.0, 1.0, 2.0, 3.0, 4.0], 5);
        assert_eq!(bins.last().unwrap().count, 1);
    }

    #[test]
    fn histogram_of_constant_data_is_centered() {
        let bins = histogram_bins(&[5.0, 5.0, 5.0], 3);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn box_stats_order_invariants() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0];
        let stats = box_stats(&values).unwrap();
        assert!(stats.q1 <= stats.median);
        assert!(stats.median <= stats.q3);
        assert!(stats.whisker_low <= stats.q1);
        assert!(stats.whisker_high >= stats.q3);
        assert_eq!(stats.outliers, vec![100.0]);
    }

    #[test]
    fn box_stats_empty_is_none() {
        assert!(box_stats(&[]).is_none());
        assert!(box_stats(&[f64::NAN]).is_none());
    }

    #[test]
    fn kde_integrates_to_roughly_one() {
        let values: Vec<f64> = (0..100).map(|i| (i as f64) * 0.1).collect();
        let curve = kernel_density(&values, 200);
        assert_eq!(curve.len(), 200);
        let dx = curve[1].0 - curve[0].0;
        let area: f64 = curve.iter().map(|(_, d)| d * dx).sum();
        assert!((area - 1.0).abs() < 0.1, "area was {}", area);
    }
}
