//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI and draws the bar chart in the
//! terminal, one horizontal bar per element.

use std::io::Write;

use terminal_size::{terminal_size, Width};

use crate::animation::{BarChart, BarColor, DisplaySurface};
use crate::app::{Dialog, DialogKind};
use crate::error::ExecutionError;
use crate::registry::AlgorithmRegistry;
use crate::steps::Value;

const RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Get the current terminal width, constrained to a reasonable range
pub fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn ansi_color(color: BarColor) -> &'static str {
    match color {
        BarColor::Neutral => "\x1b[34m",
        BarColor::Found => "\x1b[32m",
        BarColor::Probing => "\x1b[31m",
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Lay out one row per bar within `width` columns.
///
/// Bar length is proportional to the magnitude of the value; negative values
/// are drawn with a lighter shade. Non-zero values always get at least one cell.
pub fn render_bars(chart: &BarChart, width: usize, colored: bool) -> Vec<String> {
    let index_width = chart.len().saturating_sub(1).to_string().len();
    let value_width = chart
        .heights()
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    // "idx │" + bar + " value"
    let bar_width = width
        .saturating_sub(index_width + 3 + value_width + 1)
        .max(1);
    let max_abs = chart
        .heights()
        .iter()
        .map(|v| v.unsigned_abs())
        .max()
        .unwrap_or(0);

    chart
        .bars()
        .enumerate()
        .map(|(index, (value, color))| {
            let len = bar_length(value, max_abs, bar_width);
            let cell = if value < 0 { "░" } else { "█" };
            let bar = cell.repeat(len);
            let padding = " ".repeat(bar_width - len);

            if colored {
                format!(
                    "{:>iw$} │{}{}{}{} {:>vw$}",
                    index,
                    ansi_color(color),
                    bar,
                    RESET,
                    padding,
                    value,
                    iw = index_width,
                    vw = value_width
                )
            } else {
                format!(
                    "{:>iw$} │{}{} {:>vw$}",
                    index,
                    bar,
                    padding,
                    value,
                    iw = index_width,
                    vw = value_width
                )
            }
        })
        .collect()
}

fn bar_length(value: Value, max_abs: u64, bar_width: usize) -> usize {
    if max_abs == 0 || value == 0 {
        return 0;
    }
    let scaled = (value.unsigned_abs() as u128 * bar_width as u128 / max_abs as u128) as usize;
    scaled.clamp(1, bar_width)
}

/// Terminal display surface: keeps a [`BarChart`] and redraws it on `present`.
pub struct TerminalSurface<W: Write> {
    chart: BarChart,
    out: W,
    title: String,
    width: usize,
    colored: bool,
    frames: usize,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, title: impl Into<String>, chart: BarChart) -> Self {
        Self {
            chart,
            out,
            title: title.into(),
            width: get_term_width(),
            colored: true,
            frames: 0,
        }
    }

    /// Plain output: no ANSI colors or screen clearing, fixed width.
    pub fn plain(out: W, title: impl Into<String>, chart: BarChart, width: usize) -> Self {
        Self {
            colored: false,
            width,
            ..Self::new(out, title, chart)
        }
    }

    pub fn chart(&self) -> &BarChart {
        &self.chart
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self) -> std::io::Result<()> {
        if self.colored {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        writeln!(self.out, "{} (frame {})", self.title, self.frames)?;
        writeln!(self.out, "{}", "─".repeat(self.width.min(80)))?;
        for line in render_bars(&self.chart, self.width, self.colored) {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn set_heights(&mut self, heights: &[Value]) {
        self.chart.set_heights(heights);
    }

    fn reset_colors(&mut self) {
        self.chart.reset_colors();
    }

    fn highlight(&mut self, index: usize, color: BarColor) {
        self.chart.highlight(index, color);
    }

    fn present(&mut self) -> Result<(), ExecutionError> {
        self.frames += 1;
        self.draw()?;
        Ok(())
    }
}

/// Print the chart once, outside of any animation.
pub fn print_chart(title: &str, chart: &BarChart) {
    println!("{}", title);
    for line in render_bars(chart, get_term_width(), true) {
        println!("{}", line);
    }
    println!();
}

/// Format a dialog as a box
pub fn format_dialog(dialog: &Dialog, term_width: usize) -> Vec<String> {
    let max_content_width = term_width.saturating_sub(4).max(40);
    let marker = match dialog.kind {
        DialogKind::Info => "ℹ",
        DialogKind::Error => "✖",
    };
    let title_line = format!("{} {}", marker, dialog.title);

    let content_width = std::iter::once(title_line.chars().count())
        .chain(dialog.message.lines().map(|l| l.chars().count()))
        .max()
        .unwrap_or(40)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let mut lines = Vec::new();

    lines.push(format!("┌{}┐", border));
    lines.push(format!(
        "│ {:<width$} │",
        truncate(&title_line, content_width),
        width = content_width
    ));
    lines.push(format!("├{}┤", border));
    for line in dialog.message.lines() {
        lines.push(format!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        ));
    }
    lines.push(format!("└{}┘", border));
    lines
}

/// Print a modal dialog box (errors go to stderr)
pub fn print_dialog(dialog: &Dialog) {
    let lines = format_dialog(dialog, get_term_width());
    for line in lines {
        match dialog.kind {
            DialogKind::Info => println!("{}", line),
            DialogKind::Error => eprintln!("{}", line),
        }
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Sorting Algorithm Analyzer ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: sortviz [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --algorithm, -a NAME      Algorithm to run (default: Bubble Sort)");
    println!("  --values, -v LIST         List to use, e.g. \"[5, 3, 8, 1]\" (default: random)");
    println!("  --min N                   Minimum random value (default: 0)");
    println!("  --max N                   Maximum random value (default: 100)");
    println!("  --count N                 Number of random elements (default: 30)");
    println!("  --target, -t N            Value to look for with Linear Search");
    println!("  --seed N                  Random seed for reproducible lists (default: OS entropy)");
    println!("  --sort-interval-ms N      Delay between sorting frames (default: 100)");
    println!("  --search-interval-ms N    Delay between search frames (default: 500)");
    println!("  --interactive, -i         Edit fields and run commands from a prompt");
    println!("  --gui                     Open the desktop window (requires the `gui` feature)");
    println!("  --algorithms, -l          List all available algorithms");
    println!("  --help, -h                Show this help message");
    println!();
    println!("Examples:");
    println!("  sortviz                                   # Bubble sort 30 random values");
    println!("  sortviz -a quick -v \"[5, 3, 8, 1]\"        # Quick sort a given list");
    println!("  sortviz -a linear -v \"[10, 20, 30]\" -t 20 # Linear search");
    println!("  sortviz --seed 12345 --count 10           # Reproducible list");
    println!("  RUST_LOG=debug sortviz -a merge           # With logging");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<16} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bars_scales_to_width() {
        let chart = BarChart::new(&[10, 5, 0]);
        let lines = render_bars(&chart, 20, false);

        // index(1) + " │"(2) + " " + bar + " " + value(2) => bar width 13
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("0 │{} 10", "█".repeat(13)));
        assert_eq!(lines[1], format!("1 │{}{}  5", "█".repeat(6), " ".repeat(7)));
        assert_eq!(lines[2], format!("2 │{}  0", " ".repeat(13)));
    }

    #[test]
    fn test_render_bars_negative_and_tiny_values() {
        let chart = BarChart::new(&[-1000, 1]);
        let lines = render_bars(&chart, 30, false);
        assert!(lines[0].contains('░'));
        assert_eq!(lines[1].matches('█').count(), 1);
    }

    #[test]
    fn test_render_bars_colored() {
        let mut chart = BarChart::new(&[1, 2]);
        chart.highlight(1, BarColor::Found);
        let lines = render_bars(&chart, 40, true);
        assert!(lines[0].contains("\x1b[34m"));
        assert!(lines[1].contains("\x1b[32m"));
    }

    #[test]
    fn test_render_empty_chart() {
        assert!(render_bars(&BarChart::default(), 40, false).is_empty());
    }

    #[test]
    fn test_terminal_surface_presents_frames() {
        let mut surface = TerminalSurface::plain(Vec::new(), "Bubble Sort", BarChart::new(&[2, 1]), 30);
        surface.set_heights(&[1, 2]);
        surface.present().unwrap();

        let output = String::from_utf8(surface.into_inner()).unwrap();
        assert!(output.starts_with("Bubble Sort (frame 1)\n"));
        assert!(!output.contains('\x1b'));
        assert_eq!(output.lines().filter(|l| l.contains('│')).count(), 2);
    }

    #[test]
    fn test_format_dialog() {
        let dialog = Dialog::info("Search Result", "Value 20 found at index 1.".into());
        let lines = format_dialog(&dialog, 80);

        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Search Result"));
        assert!(lines[3].contains("Value 20 found at index 1."));
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
