//! The 3D renderer set.

use crate::axes3::{Axes3, SpatialElement};
use crate::config::StyleConfig;
use crate::error::{PlotError, PlotResult};
use crate::plot::{Bar3Plot, Line3Plot, Scatter3Plot};
use crate::series::Series;
use crate::style::{palette_color, Color};

/// Renders the 3D chart kinds.
pub(crate) struct SpatialCharts;

impl SpatialCharts {
    fn series_colors(series: &[Series], style: &StyleConfig) -> PlotResult<Vec<Color>> {
        (0..series.len())
            .map(|i| palette_color(i, &style.palette))
            .collect()
    }

    fn series_z<'a>(record: &'a Series) -> PlotResult<&'a Vec<f64>> {
        record.z.as_ref().ok_or_else(|| {
            PlotError::InvalidData(format!(
                "series '{}' has no z values for a 3D chart",
                record.label
            ))
        })
    }

    fn decorate(&self, axes: &mut Axes3, style: &StyleConfig) {
        axes.set_xlabel(&style.x_label, style.x_label_size);
        axes.set_ylabel(&style.y_label, style.y_label_size);
        axes.set_zlabel(&style.z_label, 14.0);
        if style.equal_aspect {
            axes.box_aspect = (1.0, 1.0, 1.0);
        }
        axes.show_legend();
    }

    /// Draw one 3D polyline per series.
    pub fn line3(&self, axes: &mut Axes3, series: &[Series], style: &StyleConfig) -> PlotResult<()> {
        let colors = Self::series_colors(series, style)?;
        // Validate before any element lands on the axes
        for record in series {
            Self::series_z(record)?;
        }

        for (record, color) in series.iter().zip(colors) {
            let z = Self::series_z(record)?;
            axes.add_element(SpatialElement::Line(
                Line3Plot::new(record.x.clone(), record.y.clone(), z.clone())
                    .color(color)
                    .label(&record.label),
            ));
        }
        self.decorate(axes, style);
        Ok(())
    }

    /// Draw one 3D point cloud per series.
    pub fn scatter3(
        &self,
        axes: &mut Axes3,
        series: &[Series],
        style: &StyleConfig,
    ) -> PlotResult<()> {
        let colors = Self::series_colors(series, style)?;
        for record in series {
            Self::series_z(record)?;
        }

        for (record, color) in series.iter().zip(colors) {
            let z = Self::series_z(record)?;
            axes.add_element(SpatialElement::Scatter(
                Scatter3Plot::new(record.x.clone(), record.y.clone(), z.clone())
                    .color(color)
                    .size(style.marker_size)
                    .label(&record.label),
            ));
        }
        self.decorate(axes, style);
        Ok(())
    }

    /// Draw volumetric bars: bases at z = 0, heights from the z field,
    /// footprints from the extents. Negative heights or extents are
    /// rejected before anything is drawn.
    pub fn bar3(&self, axes: &mut Axes3, series: &[Series], style: &StyleConfig) -> PlotResult<()> {
        let colors = Self::series_colors(series, style)?;

        // Validate heights and footprints before anything lands on the axes
        let mut validated = Vec::with_capacity(series.len());
        for record in series {
            let heights = Self::series_z(record)?;
            let (dx, dy) = record.extent.ok_or_else(|| {
                PlotError::InvalidData(format!(
                    "series '{}' has no extents for volumetric bars",
                    record.label
                ))
            })?;
            for &value in [dx, dy].iter() {
                if value < 0.0 {
                    return Err(PlotError::NegativeExtent {
                        label: record.label.clone(),
                        value,
                    });
                }
            }
            for &height in heights {
                if height < 0.0 {
                    return Err(PlotError::NegativeExtent {
                        label: record.label.clone(),
                        value: height,
                    });
                }
            }
            validated.push((heights.clone(), (dx, dy)));
        }

        for ((record, color), (heights, extent)) in series.iter().zip(colors).zip(validated) {
            axes.add_element(SpatialElement::Bar(
                Bar3Plot::new(record.x.clone(), record.y.clone(), heights, extent)
                    .color(color)
                    .label(&record.label),
            ));
        }
        self.decorate(axes, style);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlotOptions, PlotterDefaults};
    use crate::style::Theme;

    fn style() -> StyleConfig {
        let (style, _) = PlotOptions::new().resolve(&PlotterDefaults::default());
        style
    }

    fn axes() -> Axes3 {
        Axes3::new(Theme::Default.config())
    }

    #[test]
    fn line3_adds_one_element_per_series() {
        let charts = SpatialCharts;
        let mut axes = axes();
        let series = vec![
            Series::xyz(vec![1.0, 2.0], vec![1.0, 2.0], vec![0.0, 1.0], "a"),
            Series::xyz(vec![1.0, 2.0], vec![2.0, 1.0], vec![1.0, 0.0], "b"),
        ];
        charts.line3(&mut axes, &series, &style()).unwrap();
        assert_eq!(axes.element_count(), 2);
    }

    #[test]
    fn missing_z_is_rejected_before_drawing() {
        let charts = SpatialCharts;
        let mut axes = axes();
        let series = vec![
            Series::xyz(vec![1.0], vec![1.0], vec![1.0], "good"),
            Series::xy(vec![1.0], vec![1.0], "flat"),
        ];
        assert!(charts.scatter3(&mut axes, &series, &style()).is_err());
        assert_eq!(axes.element_count(), 0);
    }

    #[test]
    fn equal_aspect_sets_unit_box() {
        let charts = SpatialCharts;
        let mut axes = axes();
        let (eq_style, _) = PlotOptions::new()
            .equal_aspect(true)
            .resolve(&PlotterDefaults::default());
        let series = vec![Series::xyz(vec![1.0], vec![1.0], vec![1.0], "a")];
        charts.scatter3(&mut axes, &series, &eq_style).unwrap();
        assert_eq!(axes.box_aspect, (1.0, 1.0, 1.0));
    }

    #[test]
    fn bar3_rejects_negative_heights() {
        let charts = SpatialCharts;
        let mut axes = axes();
        let series = vec![Series::volumetric(
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![3.0, -1.0],
            0.1,
            0.1,
            "bad",
        )];
        let err = charts.bar3(&mut axes, &series, &style()).unwrap_err();
        assert!(matches!(err, PlotError::NegativeExtent { value, .. } if value == -1.0));
        assert_eq!(axes.element_count(), 0);
    }

    #[test]
    fn bar3_rejects_negative_extents() {
        let charts = SpatialCharts;
        let mut axes = axes();
        let series = vec![Series::volumetric(
            vec![1.0],
            vec![1.0],
            vec![1.0],
            -0.1,
            0.1,
            "bad",
        )];
        assert!(matches!(
            charts.bar3(&mut axes, &series, &style()),
            Err(PlotError::NegativeExtent { .. })
        ));
    }

    #[test]
    fn bar3_accepts_valid_series() {
        let charts = SpatialCharts;
        let mut axes = axes();
        let series = vec![Series::volumetric(
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0, 4.0],
            0.1,
            0.1,
            "ok",
        )];
        charts.bar3(&mut axes, &series, &style()).unwrap();
        assert_eq!(axes.element_count(), 1);
    }
}
