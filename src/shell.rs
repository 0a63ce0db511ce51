//! Interactive prompt: the terminal counterpart of the entry fields and buttons.
//!
//! Each line edits one field or triggers one command. Fields keep raw text
//! until `generate` or `run` parses them, exactly like the desktop form.

use std::io::{BufRead, Write};

use log::debug;

use crate::animation::BarChart;
use crate::app::{Controller, Dialog, RunReport};
use crate::error::{Error, ExecutionError};
use crate::registry::AlgorithmRegistry;
use crate::utils::tui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Min,
    Max,
    Count,
    Values,
    Target,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Algorithm(String),
    Generate,
    Run,
    Show,
    Algorithms,
    Help,
    Quit,
}

/// Parse one prompt line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let field = |field| Command::Set(field, rest.to_string());
    let command = match word.to_ascii_lowercase().as_str() {
        "min" => field(Field::Min),
        "max" => field(Field::Max),
        "count" => field(Field::Count),
        "values" | "list" => field(Field::Values),
        "target" => field(Field::Target),
        "algorithm" | "algo" if rest.is_empty() => {
            return Err("usage: algorithm <name>".to_string());
        }
        "algorithm" | "algo" => Command::Algorithm(rest.to_string()),
        "generate" | "gen" => Command::Generate,
        "run" => Command::Run,
        "show" => Command::Show,
        "algorithms" => Command::Algorithms,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command {:?} (try `help`)", other)),
    };

    Ok(Some(command))
}

const HELP: &str = "\
Fields (raw text, validated on generate/run):
  min N | max N | count N    randomizer settings
  values [a, b, ...]         the list to sort or search
  target N                   value for Linear Search
Commands:
  algorithm NAME             select an algorithm (see `algorithms`)
  generate                   fill `values` with count random numbers in [min, max]
  run                        run the selected algorithm and replay its steps
  show                       print the current fields and chart
  quit";

/// Drives a [`Controller`] from text commands.
pub struct Shell<'a> {
    controller: &'a mut Controller,
    registry: &'a AlgorithmRegistry,
}

impl<'a> Shell<'a> {
    pub fn new(controller: &'a mut Controller, registry: &'a AlgorithmRegistry) -> Self {
        Self {
            controller,
            registry,
        }
    }

    /// Read commands until `quit` or end of input.
    ///
    /// `replay` is called with each successful run and the chart to start from.
    pub fn run<R, W, P>(&mut self, input: R, mut out: W, mut replay: P) -> std::io::Result<()>
    where
        R: BufRead,
        W: Write,
        P: FnMut(&mut RunReport, &BarChart) -> Result<(), ExecutionError>,
    {
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;

            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => {
                    debug!("shell command: {:?}", command);
                    if let Err(err) = self.execute(command, &mut out, &mut replay) {
                        write_dialog(&mut out, &Dialog::error(&err))?;
                    }
                }
                Err(message) => writeln!(out, "{}", message)?,
            }

            write!(out, "> ")?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }

    fn execute<W, P>(&mut self, command: Command, out: &mut W, replay: &mut P) -> Result<(), Error>
    where
        W: Write,
        P: FnMut(&mut RunReport, &BarChart) -> Result<(), ExecutionError>,
    {
        let state = self.controller.state_mut();

        match command {
            Command::Set(field, text) => {
                let slot = match field {
                    Field::Min => &mut state.min_value,
                    Field::Max => &mut state.max_value,
                    Field::Count => &mut state.num_elements,
                    Field::Values => &mut state.list_text,
                    Field::Target => &mut state.search_value,
                };
                *slot = text;
            }
            Command::Algorithm(name) => {
                state.selected = self.registry.find(&name)?;
                writeln!(out, "selected {}", state.selected).map_err(ExecutionError::from)?;
            }
            Command::Generate => {
                self.controller.generate_list()?;
                writeln!(out, "values {}", self.controller.state().list_text)
                    .map_err(ExecutionError::from)?;
            }
            Command::Run => {
                let mut report = self.controller.run()?;
                replay(&mut report, &self.controller.state().chart)?;
                write_dialog(out, &report.dialog()).map_err(ExecutionError::from)?;
            }
            Command::Show => {
                let state = self.controller.state();
                let summary = format!(
                    "min {}\nmax {}\ncount {}\nvalues {}\ntarget {}\nalgorithm {}",
                    state.min_value,
                    state.max_value,
                    state.num_elements,
                    state.list_text,
                    state.search_value,
                    state.selected
                );
                writeln!(out, "{}", summary).map_err(ExecutionError::from)?;
                for line in tui::render_bars(&state.chart, tui::get_term_width(), false) {
                    writeln!(out, "{}", line).map_err(ExecutionError::from)?;
                }
            }
            Command::Algorithms => {
                for algo in self.registry.all() {
                    writeln!(out, "  {:<16} [{}]", algo.name(), algo.category())
                        .map_err(ExecutionError::from)?;
                }
            }
            Command::Help => writeln!(out, "{}", HELP).map_err(ExecutionError::from)?,
            Command::Quit => {}
        }

        Ok(())
    }
}

fn write_dialog<W: Write>(out: &mut W, dialog: &Dialog) -> std::io::Result<()> {
    for line in tui::format_dialog(dialog, tui::get_term_width()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
