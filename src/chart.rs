use crate::colormap::{Colormap, Normalize};
use crate::error::PlotError;
use crate::grid::WordGrid;
use crate::print_if;
use num_traits::AsPrimitive;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

const VERBOSE: bool = cfg!(feature = "verbose");

/// The default path where the plot will be saved
const PATH: &str = "tmp.png";

/// 16:9 canvas, wide enough for a few hundred columns
const WIDTH: u32 = 1600;
const HEIGHT: u32 = 900;

const FONT_SIZE: u32 = 20;
const MARGIN: i32 = 20;
const COLORBAR_WIDTH: u32 = 110;
const COLORBAR_STEPS: usize = 256;

/// Configuration for a word-vector heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Title drawn above the heatmap, none by default.
    pub caption: Option<String>,
    /// Output file used by [`WordVecPlot::save_default`].
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub colormap: Colormap,
    /// Use symmetric limits `±max|v|` so that zero sits on the colormap
    /// midpoint. Otherwise the data min/max are used.
    pub centered: bool,
    /// Draw a color scale next to the heatmap.
    pub colorbar: bool,
    /// Draw axes with tick labels. Disabling skips every text element.
    pub axes: bool,
    pub font_size: u32,
}

impl ChartConfig {
    /// Builder pattern for configuring the chart
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::default()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            caption: None,
            path: PATH.to_string(),
            width: WIDTH,
            height: HEIGHT,
            colormap: Colormap::Bwr,
            centered: true,
            colorbar: false,
            axes: true,
            font_size: FONT_SIZE,
        }
    }
}

/// Builder pattern for `ChartConfig` struct to allow flexible configuration
#[derive(Default)]
pub struct ChartConfigBuilder {
    caption: Option<String>,
    path: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    colormap: Option<Colormap>,
    centered: Option<bool>,
    colorbar: Option<bool>,
    axes: Option<bool>,
    font_size: Option<u32>,
}

impl ChartConfigBuilder {
    pub fn caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = Some(colormap);
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = Some(centered);
        self
    }

    pub fn colorbar(mut self, colorbar: bool) -> Self {
        self.colorbar = Some(colorbar);
        self
    }

    pub fn axes(mut self, axes: bool) -> Self {
        self.axes = Some(axes);
        self
    }

    pub fn font_size(mut self, font_size: u32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Build and return the final `ChartConfig`, filling unset fields with defaults
    pub fn build(self) -> ChartConfig {
        let defaults = ChartConfig::default();
        ChartConfig {
            caption: self.caption.or(defaults.caption),
            path: self.path.unwrap_or(defaults.path),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            colormap: self.colormap.unwrap_or(defaults.colormap),
            centered: self.centered.unwrap_or(defaults.centered),
            colorbar: self.colorbar.unwrap_or(defaults.colorbar),
            axes: self.axes.unwrap_or(defaults.axes),
            font_size: self.font_size.unwrap_or(defaults.font_size),
        }
    }
}

/// A heatmap of word vectors, ready to be drawn.
///
/// Holds no drawing state: every render builds its own drawing area, so the
/// same plot can be rendered any number of times.
#[derive(Debug, Clone)]
pub struct WordVecPlot {
    grid: WordGrid,
    config: ChartConfig,
}

/// Stacks `vectors` into a grid and wraps it in a plot.
///
/// # Arguments
/// * `labels` - One word per vector, in the same order
/// * `vectors` - Equal-length numeric vectors
/// * `config` - Optional custom chart configuration
pub fn make_word_vec_plot<S, V, F>(
    labels: &[S],
    vectors: &[V],
    config: Option<ChartConfig>,
) -> Result<WordVecPlot, PlotError>
where
    S: AsRef<str>,
    V: AsRef<[F]>,
    F: AsPrimitive<f64>,
{
    let grid = WordGrid::stack(labels, vectors)?;
    Ok(WordVecPlot::new(grid, config.unwrap_or_default()))
}

impl WordVecPlot {
    pub fn new(grid: WordGrid, config: ChartConfig) -> Self {
        WordVecPlot { grid, config }
    }

    pub fn grid(&self) -> &WordGrid {
        &self.grid
    }

    pub fn labels(&self) -> &[String] {
        self.grid.labels()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.grid.shape()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Normalization used to color the cells. Only diverging colormaps are
    /// centered on zero; sequential ones always span the data range.
    pub fn norm(&self) -> Normalize {
        if self.config.centered && self.config.colormap.is_diverging() {
            return Normalize::centered(self.grid.abs_max());
        }
        match self.grid.value_range() {
            Some((lo, hi)) => Normalize::new(lo, hi),
            None => Normalize::centered(0.0),
        }
    }

    /// Renders the plot onto a caller-provided drawing area.
    pub fn draw_on<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), PlotError> {
        root.fill(&WHITE)?;

        let norm = self.norm();

        if self.config.colorbar {
            let (width, _) = root.dim_in_pixel();
            let split = width.saturating_sub(COLORBAR_WIDTH) as i32;
            let (heatmap, scale) = root.split_horizontally(split);
            self.draw_heatmap(&heatmap, &norm)?;
            self.draw_colorbar(&scale, &norm)?;
        } else {
            self.draw_heatmap(root, &norm)?;
        }

        Ok(())
    }

    fn draw_heatmap<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        norm: &Normalize,
    ) -> Result<(), PlotError> {
        let (rows, dims) = self.grid.shape();
        let labels = self.grid.labels();
        let cmap = self.config.colormap;

        let mut builder = ChartBuilder::on(area);
        if self.config.axes {
            builder
                .margin(MARGIN)
                .x_label_area_size(self.font() * 2)
                .y_label_area_size(self.y_label_area_size() as i32);
            if let Some(caption) = &self.config.caption {
                builder.caption(caption, ("sans-serif", self.font() + 10));
            }
        }

        // cells are centered on integer coordinates, one tick per row
        let centers: Vec<f64> = (0..rows).map(|r| row_center(rows, r)).collect();
        let columns: Vec<f64> = column_ticks(dims).map(|c| c as f64).collect();
        let mut chart = builder.build_cartesian_2d(
            CellAxis::new(dims, columns),
            CellAxis::new(rows, centers),
        )?;

        if self.config.axes {
            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc("dimension")
                .x_label_formatter(&|x: &f64| format!("{}", x.round() as i64))
                .y_label_formatter(&|y: &f64| row_tick_label(labels, *y))
                .label_style(("sans-serif", self.font()))
                .draw()?;
        }

        print_if!(VERBOSE, "Rendering {rows}×{dims} grid with {} colormap", cmap);

        chart.draw_series(self.grid.data().indexed_iter().map(|((r, c), &value)| {
            let x = c as f64;
            let y = row_center(rows, r);
            Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                cmap.map(value, norm).filled(),
            )
        }))?;

        Ok(())
    }

    fn draw_colorbar<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        norm: &Normalize,
    ) -> Result<(), PlotError> {
        let (lo, hi) = if norm.vmax > norm.vmin {
            (norm.vmin, norm.vmax)
        } else {
            (norm.vmin - 1.0, norm.vmax + 1.0)
        };
        let cmap = self.config.colormap;

        let mut builder = ChartBuilder::on(area);
        builder.margin(MARGIN);
        if self.config.axes {
            builder
                .margin_top(MARGIN + self.font() * 2)
                .margin_bottom(MARGIN + self.font() * 2)
                .set_label_area_size(LabelAreaPosition::Right, (COLORBAR_WIDTH / 2) as i32);
        }
        // laid out in colormap units so that huge data ranges stay finite
        let mut chart = builder.build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

        if self.config.axes {
            chart
                .configure_mesh()
                .disable_mesh()
                .x_labels(0)
                .y_labels(5)
                .y_label_formatter(&|t: &f64| format!("{:.2}", lerp(lo, hi, *t)))
                .label_style(("sans-serif", self.font()))
                .draw()?;
        }

        let step = 1.0 / COLORBAR_STEPS as f64;
        chart.draw_series((0..COLORBAR_STEPS).map(|i| {
            let t0 = step * i as f64;
            let t1 = t0 + step;
            Rectangle::new([(0.0, t0), (1.0, t1)], cmap.color((t0 + t1) / 2.0).filled())
        }))?;

        Ok(())
    }

    fn font(&self) -> i32 {
        self.config.font_size as i32
    }

    fn y_label_area_size(&self) -> u32 {
        let longest = self
            .grid
            .labels()
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u32;
        // rough glyph width of a sans-serif face
        longest * self.config.font_size * 3 / 5 + self.config.font_size
    }

    /// Renders into an RGB buffer of `width * height * 3` bytes.
    pub fn render_rgb(&self) -> Result<Vec<u8>, PlotError> {
        let (width, height) = (self.config.width, self.config.height);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.draw_on(&root)?;
            root.present()?;
        }
        Ok(buffer)
    }

    /// Renders into an SVG document.
    pub fn render_svg(&self) -> Result<String, PlotError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.config.width, self.config.height))
                .into_drawing_area();
            self.draw_on(&root)?;
            root.present()?;
        }
        Ok(svg)
    }

    /// Writes the plot to `path`. `.svg` files are written as vector graphics,
    /// any other extension is handed to the bitmap encoder (png, bmp, jpg).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let path = path.as_ref();
        let size = (self.config.width, self.config.height);

        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            let root = SVGBackend::new(path, size).into_drawing_area();
            self.draw_on(&root)?;
            root.present()?;
        } else {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            self.draw_on(&root)?;
            root.present()?;
        }

        print_if!(VERBOSE, "Plot saved to {}", path.display());
        Ok(())
    }

    /// Writes the plot to the path stored in its config.
    pub fn save_default(&self) -> Result<(), PlotError> {
        self.save(&self.config.path)
    }
}

/// Axis over `cells` unit-wide cells centered on `0, 1, .., cells - 1`,
/// with ticks only at the given positions.
#[derive(Debug, Clone)]
pub struct CellAxis {
    cells: usize,
    ticks: Vec<f64>,
}

impl CellAxis {
    pub fn new(cells: usize, ticks: Vec<f64>) -> Self {
        CellAxis { cells, ticks }
    }
}

impl Ranged for CellAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let t = (value + 0.5) / self.cells.max(1) as f64;
        limit.0 + ((limit.1 - limit.0) as f64 * t).round() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        -0.5..self.cells as f64 - 0.5
    }
}

/// Point `t` of the way from `lo` to `hi`, without overflowing on wide ranges.
fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo * (1.0 - t) + hi * t
}

/// Column indices that get an x tick: about ten of them, evenly spaced.
pub fn column_ticks(dims: usize) -> impl Iterator<Item = usize> {
    (0..dims).step_by((dims / 10).max(1))
}

/// Vertical position of row `row`, with row 0 at the top like an image.
pub fn row_center(rows: usize, row: usize) -> f64 {
    (rows - 1 - row) as f64
}

/// Tick label for the vertical coordinate `y`: the word of the row whose
/// center is nearest, or an empty string outside the grid.
pub fn row_tick_label(labels: &[String], y: f64) -> String {
    let rows = labels.len();
    let pos = y.round();
    if !pos.is_finite() || pos < 0.0 || pos >= rows as f64 {
        return String::new();
    }
    labels[rows - 1 - pos as usize].clone()
}
