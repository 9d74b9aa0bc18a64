//! Ratatui-based chart viewer.
//!
//! Shows every CDF series on one Plotters chart, with a legend and a
//! statistics panel next to it. The caption (if any) sits in the footer.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use plotters::style::RGBColor;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::pipeline::RunOutput;
use crate::domain::{ChartBounds, ChartText, Series};
use crate::error::AppError;
use crate::plot::palette::{plotters_color, ratatui_color};

mod plotters_chart;

use plotters_chart::CdfPlottersChart;

/// Open the viewer and block until the user quits.
pub fn run(output: &RunOutput, text: ChartText<'_>) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::render(format!("Failed to initialize terminal: {e}")))?;

    let viewer = Viewer::new(output, text);
    viewer.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::render(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::render(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct Viewer<'a> {
    series: &'a [Series],
    bounds: ChartBounds,
    text: ChartText<'a>,
    lines: Vec<(Vec<(f64, f64)>, RGBColor)>,
}

impl<'a> Viewer<'a> {
    fn new(output: &'a RunOutput, text: ChartText<'a>) -> Self {
        let lines = output
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| (s.curve.points(), plotters_color(i)))
            .collect();
        Self {
            series: &output.series,
            bounds: output.bounds,
            text,
            lines,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::render(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::render(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::render(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            self.text.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(area);

        self.draw_chart(frame, chunks[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);
        self.draw_legend(frame, side[0]);
        self.draw_stats(frame, side[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("CDF").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (chart_rect, insets) = chart_layout(inner);
        let widget = CdfPlottersChart {
            lines: &self.lines,
            x_bounds: self.bounds.x,
            y_bounds: self.bounds.y,
            x_label: self.text.xlabel,
            y_label: self.text.ylabel,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, self.bounds, self.text);
        }
    }

    fn draw_legend(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Legend").borders(Borders::ALL);

        if self.series.iter().all(|s| s.label.is_none()) {
            let p = Paragraph::new("(no labels)")
                .style(Style::default().fg(Color::Gray))
                .block(block);
            frame.render_widget(p, area);
            return;
        }

        let items: Vec<ListItem> = self
            .series
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                s.label.as_ref().map(|label| {
                    ListItem::new(Line::from(vec![
                        Span::styled("── ", Style::default().fg(ratatui_color(i))),
                        Span::raw(label.as_str()),
                    ]))
                })
            })
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }

    fn draw_stats(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut items = Vec::new();
        for (i, s) in self.series.iter().enumerate() {
            let name = s
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| s.path.display().to_string());
            items.push(ListItem::new(Span::styled(name, Style::default().fg(ratatui_color(i)))));
            items.push(ListItem::new(format!(
                "  n={} avg={:.4} sd={:.4}",
                s.stats.n, s.stats.mean, s.stats.stdev
            )));
            items.push(ListItem::new(format!(
                "  min={:.4} max={:.4}",
                s.stats.min, s.stats.max
            )));
        }

        let list = List::new(items).block(Block::default().title("Statistics").borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut spans = vec![Span::styled("q/Esc quit", Style::default().fg(Color::Gray))];
        if let Some(caption) = self.text.caption {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(caption, Style::default().fg(Color::Yellow)));
        }
        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    bounds: ChartBounds,
    text: ChartText<'_>,
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = bounds.x[0] + u * (bounds.x[1] - bounds.x[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = fmt_tick(x_val);
        let start = x.saturating_sub((label.len() / 2) as u16);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        let width = label.len() as u16;
        frame.render_widget(Paragraph::new(label).style(style), Rect { x: start, y, width, height: 1 });
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = bounds.y[0] + u * (bounds.y[1] - bounds.y[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = format!("{y_val:.2}");
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label.len() as u16);
        if start < inner.x {
            continue;
        }
        let width = label.len() as u16;
        frame.render_widget(Paragraph::new(label).style(style), Rect { x: start, y, width, height: 1 });
    }

    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        let x_label = Paragraph::new(text.xlabel)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new(text.ylabel)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}

/// Compact tick text: large magnitudes drop decimals.
fn fmt_tick(v: f64) -> String {
    if v.abs() >= 1000.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
