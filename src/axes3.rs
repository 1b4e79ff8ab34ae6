//! 3D axes: orthographic projection, decoration, and the render pass.
//!
//! Elements keep data-space coordinates; at render time each axis range is
//! normalized onto a unit box (scaled by the box aspect), rotated by a
//! fixed azimuth/elevation view, and dropped onto the 2D backend. Bars are
//! depth-sorted so nearer bars paint over farther ones.

use crate::axes::render_legend;
use crate::backend::SvgBackend;
use crate::element::{Bounds, Legend, LegendEntry, Text};
use crate::plot::spatial::{Bar3Plot, Bounds3, Line3Plot, Scatter3Plot};
use crate::scale::LinearScale;
use crate::style::{FillStyle, LineStyle, TextAnchor, ThemeConfig};

/// Default view angles, in degrees.
const AZIMUTH: f64 = -60.0;
const ELEVATION: f64 = 30.0;

/// One 3D plot element.
pub enum SpatialElement {
    Line(Line3Plot),
    Scatter(Scatter3Plot),
    Bar(Bar3Plot),
}

impl SpatialElement {
    fn bounds(&self) -> Bounds3 {
        match self {
            SpatialElement::Line(p) => p.bounds(),
            SpatialElement::Scatter(p) => p.bounds(),
            SpatialElement::Bar(p) => p.bounds(),
        }
    }

    fn legend_entry(&self) -> Option<LegendEntry> {
        match self {
            SpatialElement::Line(p) => p.legend_entry(),
            SpatialElement::Scatter(p) => p.legend_entry(),
            SpatialElement::Bar(p) => p.legend_entry(),
        }
    }
}

/// An axes object representing a single 3D plot volume.
pub struct Axes3 {
    /// Position within the figure (normalized coordinates)
    pub position: Bounds,
    elements: Vec<SpatialElement>,
    /// X-axis label
    pub x_label: Option<Text>,
    /// Y-axis label
    pub y_label: Option<Text>,
    /// Z-axis label
    pub z_label: Option<Text>,
    /// Legend configuration
    pub legend: Option<Legend>,
    /// Box aspect (x, y, z); (1, 1, 1) when equal aspect is requested
    pub box_aspect: (f64, f64, f64),
    data_bounds: Option<Bounds3>,
    /// Theme configuration
    pub theme: ThemeConfig,
}

/// The fixed orthographic view: normalized box coordinates in, screen
/// offsets out.
struct Projection {
    sin_a: f64,
    cos_a: f64,
    sin_e: f64,
    cos_e: f64,
    aspect: (f64, f64, f64),
}

impl Projection {
    fn new(aspect: (f64, f64, f64)) -> Self {
        let (sin_a, cos_a) = AZIMUTH.to_radians().sin_cos();
        let (sin_e, cos_e) = ELEVATION.to_radians().sin_cos();
        Projection {
            sin_a,
            cos_a,
            sin_e,
            cos_e,
            aspect,
        }
    }

    /// Project normalized box coordinates (each in [0, 1]) to screen
    /// offsets. Screen v grows upward; the caller flips for SVG.
    fn project(&self, nx: f64, ny: f64, nz: f64) -> (f64, f64) {
        let x = self.aspect.0 * (nx - 0.5);
        let y = self.aspect.1 * (ny - 0.5);
        let z = self.aspect.2 * (nz - 0.5);

        let u = self.cos_a * x - self.sin_a * y;
        let depth = self.sin_a * x + self.cos_a * y;
        let v = self.cos_e * z - self.sin_e * depth;
        (u, v)
    }

    /// Depth of a normalized point; larger is nearer to the camera.
    fn depth(&self, nx: f64, ny: f64, nz: f64) -> f64 {
        let x = self.aspect.0 * (nx - 0.5);
        let y = self.aspect.1 * (ny - 0.5);
        let z = self.aspect.2 * (nz - 0.5);
        -(self.cos_e * (self.sin_a * x + self.cos_a * y) + self.sin_e * z)
    }
}

impl Axes3 {
    /// Create a new 3D axes with default settings.
    pub fn new(theme: ThemeConfig) -> Self {
        Axes3 {
            position: Bounds::new(0.08, 0.95, 0.08, 0.95),
            elements: Vec::new(),
            x_label: None,
            y_label: None,
            z_label: None,
            legend: None,
            box_aspect: (1.0, 1.0, 0.75),
            data_bounds: None,
            theme,
        }
    }

    /// Set the x-axis label with an explicit font size.
    pub fn set_xlabel(&mut self, label: impl Into<String>, font_size: f64) {
        let style = self.theme.label_style.clone().font_size(font_size);
        self.x_label = Some(Text::new(label, 0.0, 0.0).style(style));
    }

    /// Set the y-axis label with an explicit font size.
    pub fn set_ylabel(&mut self, label: impl Into<String>, font_size: f64) {
        let style = self.theme.label_style.clone().font_size(font_size);
        self.y_label = Some(Text::new(label, 0.0, 0.0).style(style));
    }

    /// Set the z-axis label with an explicit font size.
    pub fn set_zlabel(&mut self, label: impl Into<String>, font_size: f64) {
        let style = self.theme.label_style.clone().font_size(font_size);
        self.z_label = Some(Text::new(label, 0.0, 0.0).style(style));
    }

    /// Show the legend.
    pub fn show_legend(&mut self) {
        let legend = self.legend.get_or_insert_with(Legend::new);
        legend.visible = true;
        legend.text_style = self.theme.tick_style.clone();
    }

    /// Add a 3D element to this axes.
    pub fn add_element(&mut self, element: SpatialElement) {
        let bounds = element.bounds();
        if bounds.is_valid() {
            if let Some(ref mut existing) = self.data_bounds {
                existing.include_bounds(&bounds);
            } else {
                self.data_bounds = Some(bounds);
            }
        }

        if let Some(entry) = element.legend_entry() {
            let legend = self.legend.get_or_insert_with(|| {
                let mut l = Legend::new();
                l.visible = false;
                l
            });
            legend.add_entry(entry);
        }

        self.elements.push(element);
    }

    /// Number of elements on this axes.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn scales(&self) -> (LinearScale, LinearScale, LinearScale) {
        let b = self.data_bounds.unwrap_or(Bounds3 {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
            z_min: 0.0,
            z_max: 1.0,
        });
        let mut sx = LinearScale::auto();
        sx.set_range(b.x_min, b.x_max);
        let mut sy = LinearScale::auto();
        sy.set_range(b.y_min, b.y_max);
        let mut sz = LinearScale::auto();
        sz.set_range(b.z_min, b.z_max);
        (sx, sy, sz)
    }

    /// Render this axes into the backend.
    pub fn render(&mut self, backend: &mut SvgBackend) {
        let pixel_bounds = Bounds::new(
            self.position.x_min * backend.width,
            self.position.x_max * backend.width,
            (1.0 - self.position.y_max) * backend.height,
            (1.0 - self.position.y_min) * backend.height,
        );

        let projection = Projection::new(self.box_aspect);

        // Fit the projected unit box into the pixel area
        let mut u_min = f64::INFINITY;
        let mut u_max = f64::NEG_INFINITY;
        let mut v_min = f64::INFINITY;
        let mut v_max = f64::NEG_INFINITY;
        for corner in 0..8 {
            let nx = (corner & 1) as f64;
            let ny = ((corner >> 1) & 1) as f64;
            let nz = ((corner >> 2) & 1) as f64;
            let (u, v) = projection.project(nx, ny, nz);
            u_min = u_min.min(u);
            u_max = u_max.max(u);
            v_min = v_min.min(v);
            v_max = v_max.max(v);
        }

        let margin = 0.08;
        let usable_w = pixel_bounds.width() * (1.0 - 2.0 * margin);
        let usable_h = pixel_bounds.height() * (1.0 - 2.0 * margin);
        let scale = (usable_w / (u_max - u_min)).min(usable_h / (v_max - v_min));
        let (cx, cy) = pixel_bounds.center();
        let u_mid = (u_min + u_max) / 2.0;
        let v_mid = (v_min + v_max) / 2.0;

        let (sx, sy, sz) = self.scales();
        // Data space -> screen pixels through the normalized box
        let to_screen = move |x: f64, y: f64, z: f64| -> (f64, f64) {
            let (u, v) =
                projection.project(sx.transform(x), sy.transform(y), sz.transform(z));
            (cx + (u - u_mid) * scale, cy - (v - v_mid) * scale)
        };
        let projection = Projection::new(self.box_aspect);
        let (sx, sy, sz) = self.scales();
        let norm = move |x: f64, y: f64, z: f64| -> (f64, f64, f64) {
            (sx.transform(x), sy.transform(y), sz.transform(z))
        };

        self.render_frame(backend, &to_screen);

        for element in &self.elements {
            match element {
                SpatialElement::Line(plot) => {
                    let points: Vec<(f64, f64)> = plot
                        .x
                        .iter()
                        .zip(&plot.y)
                        .zip(&plot.z)
                        .filter(|((x, y), z)| {
                            x.is_finite() && y.is_finite() && z.is_finite()
                        })
                        .map(|((&x, &y), &z)| to_screen(x, y, z))
                        .collect();
                    if points.len() >= 2 {
                        backend.draw_polyline(&points, &plot.line_style);
                    }
                }
                SpatialElement::Scatter(plot) => {
                    for ((&x, &y), &z) in plot.x.iter().zip(&plot.y).zip(&plot.z) {
                        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
                            continue;
                        }
                        let (px, py) = to_screen(x, y, z);
                        backend.add_content(plot.marker_style.render_at(px, py));
                    }
                }
                SpatialElement::Bar(plot) => {
                    self.render_bars(backend, plot, &projection, &norm, &to_screen);
                }
            }
        }

        self.render_labels(backend, &to_screen);

        if let Some(ref legend) = self.legend {
            if legend.visible && !legend.entries.is_empty() {
                render_legend(backend, legend, &pixel_bounds);
            }
        }
    }

    /// Draw the bottom pane, its grid, and the three visible box edges.
    fn render_frame(
        &self,
        backend: &mut SvgBackend,
        to_screen: &impl Fn(f64, f64, f64) -> (f64, f64),
    ) {
        let (sx, sy, sz) = self.scales();
        let (x0, x1) = sx.range();
        let (y0, y1) = sy.range();
        let (z0, z1) = sz.range();

        // Bottom pane
        let pane = [
            to_screen(x0, y0, z0),
            to_screen(x1, y0, z0),
            to_screen(x1, y1, z0),
            to_screen(x0, y1, z0),
        ];
        let pane_fill = FillStyle::new(self.theme.plot_background.clone()).opacity(0.6);
        backend.draw_polygon(&pane, &pane_fill);

        // Pane grid at nice ticks
        let mut grid_style = LineStyle::new()
            .color(self.theme.grid_color.clone())
            .width(self.theme.grid_width);
        grid_style.opacity = self.theme.grid_opacity;
        for tx in sx.ticks(5) {
            let (ax, ay) = to_screen(tx, y0, z0);
            let (bx, by) = to_screen(tx, y1, z0);
            backend.draw_line(ax, ay, bx, by, &grid_style);
        }
        for ty in sy.ticks(5) {
            let (ax, ay) = to_screen(x0, ty, z0);
            let (bx, by) = to_screen(x1, ty, z0);
            backend.draw_line(ax, ay, bx, by, &grid_style);
        }

        // Box edges carrying the axes
        let axis_style = LineStyle::new()
            .color(self.theme.axis_color.clone())
            .width(self.theme.axis_width);
        let edges = [
            ((x0, y0, z0), (x1, y0, z0)), // x edge
            ((x1, y0, z0), (x1, y1, z0)), // y edge
            ((x0, y0, z0), (x0, y0, z1)), // z edge
        ];
        for ((ax3, ay3, az3), (bx3, by3, bz3)) in edges {
            let (ax, ay) = to_screen(ax3, ay3, az3);
            let (bx, by) = to_screen(bx3, by3, bz3);
            backend.draw_line(ax, ay, bx, by, &axis_style);
        }

        // Tick labels along the x, y, and z edges
        let mut tick_style = self.theme.tick_style.clone();
        tick_style.anchor = TextAnchor::Middle;
        for tx in sx.ticks(5) {
            let (px, py) = to_screen(tx, y0, z0);
            backend.draw_text(px, py + 14.0, &format_tick(tx), &tick_style);
        }
        for ty in sy.ticks(5) {
            let (px, py) = to_screen(x1, ty, z0);
            backend.draw_text(px + 16.0, py + 8.0, &format_tick(ty), &tick_style);
        }
        let mut z_style = self.theme.tick_style.clone();
        z_style.anchor = TextAnchor::End;
        for tz in sz.ticks(5) {
            let (px, py) = to_screen(x0, y0, tz);
            backend.draw_text(px - 8.0, py + 3.0, &format_tick(tz), &z_style);
        }
    }

    fn render_labels(
        &self,
        backend: &mut SvgBackend,
        to_screen: &impl Fn(f64, f64, f64) -> (f64, f64),
    ) {
        let (sx, sy, sz) = self.scales();
        let (x0, x1) = sx.range();
        let (y0, y1) = sy.range();
        let (z0, z1) = sz.range();

        if let Some(ref label) = self.x_label {
            let (px, py) = to_screen((x0 + x1) / 2.0, y0, z0);
            backend.add_content(label.clone().at(px - 20.0, py + 34.0, TextAnchor::Middle).to_svg());
        }
        if let Some(ref label) = self.y_label {
            let (px, py) = to_screen(x1, (y0 + y1) / 2.0, z0);
            backend.add_content(label.clone().at(px + 44.0, py + 20.0, TextAnchor::Middle).to_svg());
        }
        if let Some(ref label) = self.z_label {
            let (px, py) = to_screen(x0, y0, (z0 + z1) / 2.0);
            let mut text = label.clone().at(px - 34.0, py, TextAnchor::Middle);
            text.style.rotation = -90.0;
            backend.add_content(text.to_svg());
        }
    }

    /// Draw volumetric bars far-to-near with shaded side faces.
    fn render_bars(
        &self,
        backend: &mut SvgBackend,
        plot: &Bar3Plot,
        projection: &Projection,
        norm: &impl Fn(f64, f64, f64) -> (f64, f64, f64),
        to_screen: &impl Fn(f64, f64, f64) -> (f64, f64),
    ) {
        let (dx, dy) = plot.extent;

        let mut order: Vec<usize> = (0..plot.x.len().min(plot.y.len()).min(plot.heights.len()))
            .collect();
        order.sort_by(|&a, &b| {
            let (nax, nay, naz) = norm(plot.x[a] + dx / 2.0, plot.y[a] + dy / 2.0, 0.0);
            let (nbx, nby, nbz) = norm(plot.x[b] + dx / 2.0, plot.y[b] + dy / 2.0, 0.0);
            let da = projection.depth(nax, nay, naz);
            let db = projection.depth(nbx, nby, nbz);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

        let top_fill = plot.fill.clone();
        let front_fill = FillStyle::new(plot.fill.color.shaded(0.8));
        let side_fill = FillStyle::new(plot.fill.color.shaded(0.65));

        for i in order {
            let (x, y, h) = (plot.x[i], plot.y[i], plot.heights[i]);
            if !(x.is_finite() && y.is_finite() && h.is_finite()) {
                continue;
            }

            // Visible faces for the fixed view: top, front (low-y side),
            // right (high-x side)
            let top = [
                to_screen(x, y, h),
                to_screen(x + dx, y, h),
                to_screen(x + dx, y + dy, h),
                to_screen(x, y + dy, h),
            ];
            let front = [
                to_screen(x, y, 0.0),
                to_screen(x + dx, y, 0.0),
                to_screen(x + dx, y, h),
                to_screen(x, y, h),
            ];
            let side = [
                to_screen(x + dx, y, 0.0),
                to_screen(x + dx, y + dy, 0.0),
                to_screen(x + dx, y + dy, h),
                to_screen(x + dx, y, h),
            ];

            backend.draw_polygon(&front, &front_fill);
            backend.draw_polygon(&side, &side_fill);
            backend.draw_polygon(&top, &top_fill);
        }
    }
}

fn format_tick(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1000.0 || value.abs() < 0.01 {
        format!("{:.2e}", value)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
