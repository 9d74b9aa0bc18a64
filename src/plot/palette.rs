//! Series styling shared by the image export, the viewer and the ASCII chart.
//!
//! Series `i` always gets entry `i % len` so a file keeps its color everywhere.

use plotters::style::RGBColor;

/// The ten-color "tab10" cycle.
pub const SERIES_RGB: [(u8, u8, u8); 10] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];

/// Line glyphs for the ASCII chart.
pub const SERIES_GLYPHS: [char; 8] = ['*', '+', 'o', 'x', '#', '@', '%', '='];

pub fn series_rgb(index: usize) -> (u8, u8, u8) {
    SERIES_RGB[index % SERIES_RGB.len()]
}

pub fn plotters_color(index: usize) -> RGBColor {
    let (r, g, b) = series_rgb(index);
    RGBColor(r, g, b)
}

pub fn ratatui_color(index: usize) -> ratatui::style::Color {
    let (r, g, b) = series_rgb(index);
    ratatui::style::Color::Rgb(r, g, b)
}

pub fn series_glyph(index: usize) -> char {
    SERIES_GLYPHS[index % SERIES_GLYPHS.len()]
}
