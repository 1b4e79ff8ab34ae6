//! Canvas lifecycle: acquisition, rendering, persistence, and display.
//!
//! A [`Canvas`] wraps one figure-sized surface holding either a 2D or a 3D
//! axes. Fresh canvases are created per plot call; a canvas passed back
//! into an overlay call is reused unchanged, and its finalization belongs
//! to whoever created it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info};

use crate::axes::Axes;
use crate::axes3::Axes3;
use crate::backend::SvgBackend;
use crate::config::{OutputPolicy, StyleConfig};
use crate::error::{PlotError, PlotResult};
use crate::style::{FillStyle, ThemeConfig};

static SHOW_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The drawing surface held by a canvas.
pub(crate) enum Surface {
    Planar(Axes),
    Spatial(Axes3),
}

/// An owned drawing surface: one figure with one axes.
pub struct Canvas {
    width: f64,
    height: f64,
    theme: ThemeConfig,
    pub(crate) surface: Surface,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    fn new(size: (f64, f64), theme: ThemeConfig, surface: Surface) -> Self {
        Canvas {
            width: size.0,
            height: size.1,
            theme,
            surface,
        }
    }

    /// Figure width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Figure height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The 2D axes, if this canvas holds one.
    pub(crate) fn axes_mut(&mut self) -> Option<&mut Axes> {
        match self.surface {
            Surface::Planar(ref mut axes) => Some(axes),
            Surface::Spatial(_) => None,
        }
    }

    /// The 3D axes, if this canvas holds one.
    pub(crate) fn axes3_mut(&mut self) -> Option<&mut Axes3> {
        match self.surface {
            Surface::Planar(_) => None,
            Surface::Spatial(ref mut axes) => Some(axes),
        }
    }

    /// Render the canvas to an SVG document.
    pub fn render(&mut self) -> String {
        let mut backend = SvgBackend::new(self.width, self.height);
        backend.draw_rect(
            0.0,
            0.0,
            self.width,
            self.height,
            &FillStyle::new(self.theme.background.clone()),
        );
        match self.surface {
            Surface::Planar(ref mut axes) => axes.render(&mut backend),
            Surface::Spatial(ref mut axes) => axes.render(&mut backend),
        }
        backend.render()
    }

    /// Persist the canvas to `path`.
    ///
    /// Missing parent directories are created. The document is written to a
    /// temporary sibling and renamed into place so a failed write never
    /// leaves a truncated file at the target.
    pub fn save(&mut self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        let persist_err = |source: io::Error| PlotError::Persistence {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(persist_err)?;
            }
        }

        let svg = self.render();
        let tmp = temp_sibling(path);
        fs::write(&tmp, svg).map_err(persist_err)?;
        if let Err(source) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(persist_err(source));
        }
        Ok(())
    }

    /// Render the canvas and open it in the default browser.
    pub fn show(&mut self) -> PlotResult<()> {
        let n = SHOW_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "quickplot-{}-{}.svg",
            std::process::id(),
            n
        ));
        self.save(&path)?;
        webbrowser::open(&format!("file://{}", path.display()))
            .map_err(|e| PlotError::Render(format!("failed to open viewer: {}", e)))?;
        debug!("opened {} in the default browser", path.display());
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Acquires and finalizes canvases on behalf of the plotter.
pub(crate) struct CanvasManager {
    theme: ThemeConfig,
}

impl CanvasManager {
    pub fn new(theme: ThemeConfig) -> Self {
        CanvasManager { theme }
    }

    /// Return `existing` untouched (overlay mode), or create a fresh 2D
    /// canvas sized per the resolved style.
    pub fn acquire(&self, existing: Option<Canvas>, style: &StyleConfig) -> Canvas {
        match existing {
            Some(canvas) => canvas,
            None => Canvas::new(
                style.figure_size,
                self.theme.clone(),
                Surface::Planar(Axes::new(self.theme.clone())),
            ),
        }
    }

    /// Return `existing` untouched (overlay mode), or create a fresh 3D
    /// canvas sized per the resolved style.
    pub fn acquire3(&self, existing: Option<Canvas>, style: &StyleConfig) -> Canvas {
        match existing {
            Some(canvas) => canvas,
            None => Canvas::new(
                style.figure_size,
                self.theme.clone(),
                Surface::Spatial(Axes3::new(self.theme.clone())),
            ),
        }
    }

    /// Run the configured output side effects.
    ///
    /// Persist and display are independent: both are attempted, and the
    /// persist failure (if any) is reported ahead of a display failure.
    pub fn finalize(canvas: &mut Canvas, policy: &OutputPolicy) -> PlotResult<()> {
        let mut persist_err = None;
        if policy.persist {
            match policy.output_path {
                Some(ref path) => match canvas.save(path) {
                    Ok(()) => info!("saved plot to {}", path.display()),
                    Err(e) => persist_err = Some(e),
                },
                None => debug!("persist requested without an output path; nothing saved"),
            }
        }

        let mut display_err = None;
        if policy.display {
            if let Err(e) = canvas.show() {
                display_err = Some(e);
            }
        }

        match (persist_err, display_err) {
            (Some(e), _) => Err(e),
            (None, Some(e)) => Err(e),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlotOptions, PlotterDefaults};
    use crate::plot::LinePlot;
    use crate::style::Theme;

    fn test_style() -> StyleConfig {
        let (style, _) = PlotOptions::new().resolve(&PlotterDefaults::default());
        style
    }

    fn unique_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quickplot-test-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn acquire_reuses_an_existing_canvas_unchanged() {
        let manager = CanvasManager::new(Theme::Default.config());
        let style = test_style();
        let mut first = manager.acquire(None, &style);
        first
            .axes_mut()
            .unwrap()
            .add_plot(Box::new(LinePlot::new(vec![0.0, 1.0], vec![0.0, 1.0])));

        let small = {
            let (style, _) = PlotOptions::new()
                .figure_size(10.0, 10.0)
                .resolve(&PlotterDefaults::default());
            style
        };
        let mut reused = manager.acquire(Some(first), &small);
        // Overlay mode: no new figure, no resize
        assert_eq!(reused.width(), 960.0);
        assert_eq!(reused.axes_mut().unwrap().plot_count(), 1);
    }

    #[test]
    fn save_creates_nested_directories() {
        let dir = unique_dir("nested");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("a/b/chart.svg");

        let manager = CanvasManager::new(Theme::Default.config());
        let mut canvas = manager.acquire(None, &test_style());
        canvas.save(&path).unwrap();

        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = unique_dir("tmpfile");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("chart.svg");

        let manager = CanvasManager::new(Theme::Default.config());
        let mut canvas = manager.acquire(None, &test_style());
        canvas.save(&path).unwrap();

        assert!(path.exists());
        assert!(!temp_sibling(&path).exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn finalize_without_side_effects_is_a_no_op() {
        let manager = CanvasManager::new(Theme::Default.config());
        let mut canvas = manager.acquire(None, &test_style());
        let policy = OutputPolicy {
            persist: false,
            output_path: None,
            display: false,
        };
        assert!(CanvasManager::finalize(&mut canvas, &policy).is_ok());
    }

    #[test]
    fn finalize_persists_when_path_is_set() {
        let dir = unique_dir("finalize");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("out.svg");

        let manager = CanvasManager::new(Theme::Default.config());
        let mut canvas = manager.acquire(None, &test_style());
        let policy = OutputPolicy {
            persist: true,
            output_path: Some(path.clone()),
            display: false,
        };
        CanvasManager::finalize(&mut canvas, &policy).unwrap();
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn theme_background_reaches_the_document() {
        let manager = CanvasManager::new(Theme::Dark.config());
        let mut canvas = manager.acquire(None, &test_style());
        let svg = canvas.render();
        assert!(svg.contains("rgb(30,30,30)"));
    }
}
