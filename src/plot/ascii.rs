//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual checks in a terminal or over ssh
//! - deterministic output (helpful for golden tests)
//!
//! Each series is drawn as a connected line with its own glyph. Where lines
//! overlap, the series drawn first keeps the cell.

use crate::domain::{ChartBounds, ChartText, Series};
use crate::plot::palette::series_glyph;

/// Render all series on one character grid of `cols` x `rows` cells.
pub fn render_ascii_chart(
    series: &[Series],
    bounds: ChartBounds,
    text: ChartText<'_>,
    cols: usize,
    rows: usize,
) -> String {
    let width = cols.max(10);
    let height = rows.max(5);
    let [x_min, x_max] = bounds.x;
    let [y_min, y_max] = bounds.y;

    let mut grid = vec![vec![' '; width]; height];
    for (i, s) in series.iter().enumerate() {
        let points = s.curve.points();
        draw_curve(&mut grid, &points, bounds, series_glyph(i));
    }

    let mut out = String::new();
    out.push_str(text.title);
    out.push('\n');
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out.push_str(&format!("x: {} | y: {}\n", text.xlabel, text.ylabel));

    for (i, s) in series.iter().enumerate() {
        if let Some(label) = &s.label {
            out.push_str(&format!("  {} {label}\n", series_glyph(i)));
        }
    }
    if let Some(caption) = text.caption {
        out.push_str(caption);
        out.push('\n');
    }

    out
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], bounds: ChartBounds, ch: char) {
    let height = grid.len();
    let width = grid[0].len();
    let [x_min, x_max] = bounds.x;
    let [y_min, y_max] = bounds.y;

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        match prev {
            Some((c0, r0)) => draw_line(grid, c0, r0, col, row, ch),
            None => {
                if grid[row][col] == ' ' {
                    grid[row][col] = ch;
                }
            }
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::domain::{CdfCurve, CdfMethod, SampleStats};

    fn series(label: Option<&str>, x: Vec<f64>, y: Vec<f64>) -> Series {
        Series {
            path: PathBuf::from("f.txt"),
            label: label.map(str::to_string),
            stats: SampleStats { n: 2, mean: 0.0, max: 0.0, min: 0.0, stdev: 0.0 },
            curve: CdfCurve { method: CdfMethod::Histogram, x, y },
        }
    }

    fn text<'a>(caption: Option<&'a str>) -> ChartText<'a> {
        ChartText { title: "T", xlabel: "data", ylabel: "CDF", caption }
    }

    #[test]
    fn ascii_golden_snapshot_small() {
        let s = vec![series(None, vec![5.0, 10.0], vec![0.5, 1.0])];
        let bounds = ChartBounds { x: [0.0, 10.0], y: [0.0, 1.0] };

        let txt = render_ascii_chart(&s, bounds, text(None), 10, 5);
        let expected = concat!(
            "T\n",
            "Plot: x=[0.000, 10.000] | y=[0.00, 1.00]\n",
            "        **\n",
            "      **  \n",
            "     *    \n",
            "          \n",
            "          \n",
            "x: data | y: CDF\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn legend_and_caption_only_when_present() {
        let s = vec![
            series(Some("A"), vec![0.0, 10.0], vec![0.0, 1.0]),
            series(Some("data0"), vec![10.0], vec![1.0]),
        ];
        let bounds = ChartBounds { x: [0.0, 10.0], y: [0.0, 1.0] };

        let txt = render_ascii_chart(&s, bounds, text(Some("run 7")), 20, 6);
        assert!(txt.contains("  * A\n"));
        assert!(txt.contains("  + data0\n"));
        assert!(txt.ends_with("run 7\n"));

        let bare = render_ascii_chart(&[series(None, vec![1.0], vec![1.0])], bounds, text(None), 20, 6);
        assert!(bare.ends_with("x: data | y: CDF\n"));
    }
}
