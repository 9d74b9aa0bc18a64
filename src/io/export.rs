//! Export the chart to an image file with Plotters.
//!
//! The format follows the file extension:
//! - `.svg` -> `SVGBackend` (text is emitted as SVG text, no fonts needed)
//! - `.png` / `.bmp` -> `BitMapBackend`, only with the `ttf` feature
//!
//! Without a font backend plotters cannot rasterize text, so bitmap formats
//! are refused up front in the default build.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::domain::{ChartBounds, ChartText, Series};
use crate::error::AppError;
use crate::plot::palette::plotters_color;

const CAPTION_HEIGHT: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    #[cfg(feature = "ttf")]
    Bitmap,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "svg" => Ok(Self::Svg),
            "png" | "bmp" => bitmap_format(path),
            _ => Err(AppError::input(format!(
                "Unsupported export format for '{}': use a .svg, .png or .bmp file name.",
                path.display()
            ))),
        }
    }
}

#[cfg(feature = "ttf")]
fn bitmap_format(_path: &Path) -> Result<ImageFormat, AppError> {
    Ok(ImageFormat::Bitmap)
}

#[cfg(not(feature = "ttf"))]
fn bitmap_format(path: &Path) -> Result<ImageFormat, AppError> {
    Err(AppError::input(format!(
        "Cannot export '{}': PNG/BMP output needs a build with the `ttf` feature; use a .svg file name.",
        path.display()
    )))
}

/// Draw all series and write the chart to `path`.
pub fn export_chart(
    path: &Path,
    size: (u32, u32),
    series: &[Series],
    bounds: ChartBounds,
    text: ChartText<'_>,
) -> Result<(), AppError> {
    let render_err = |e: String| AppError::input(format!("Failed to export chart '{}': {e}", path.display()));

    match ImageFormat::from_path(path)? {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_cdf_chart(&root, series, bounds, text).map_err(|e| render_err(e.to_string()))?;
            root.present().map_err(|e| render_err(e.to_string()))?;
        }
        #[cfg(feature = "ttf")]
        ImageFormat::Bitmap => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_cdf_chart(&root, series, bounds, text).map_err(|e| render_err(e.to_string()))?;
            root.present().map_err(|e| render_err(e.to_string()))?;
        }
    }

    tracing::info!(path = %path.display(), width = size.0, height = size.1, "exported chart");
    Ok(())
}

/// Draw the full chart (title, grid, axis labels, lines, legend, caption) onto `root`.
pub fn draw_cdf_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[Series],
    bounds: ChartBounds,
    text: ChartText<'_>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let Some(caption) = text.caption else {
        return draw_plot(root, series, bounds, text);
    };

    let (width, height) = root.dim_in_pixel();
    let (plot_area, caption_area) = root.split_vertically(height as i32 - CAPTION_HEIGHT);
    draw_plot(&plot_area, series, bounds, text)?;

    let style = ("sans-serif", 18)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    caption_area.draw_text(caption, &style, (width as i32 / 2, CAPTION_HEIGHT / 2))?;

    Ok(())
}

fn draw_plot<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &[Series],
    bounds: ChartBounds,
    text: ChartText<'_>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut chart = ChartBuilder::on(area)
        .caption(text.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.x[0]..bounds.x[1], bounds.y[0]..bounds.y[1])?;

    chart
        .configure_mesh()
        .x_desc(text.xlabel)
        .y_desc(text.ylabel)
        .label_style(("sans-serif", 16))
        .draw()?;

    for (i, s) in series.iter().enumerate() {
        let color = plotters_color(i);
        let drawn = chart.draw_series(LineSeries::new(s.curve.points(), color.stroke_width(2)))?;
        if let Some(label) = &s.label {
            drawn
                .label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }
    }

    if series.iter().any(|s| s.label.is_some()) {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    Ok(())
}
