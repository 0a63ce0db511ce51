//! Command-line front end for the visualizer.
//!
//! Usage:
//!   sortviz                              # Bubble sort 30 random values
//!   sortviz -a quick -v "[5, 3, 8, 1]"   # Quick sort a given list
//!   sortviz -a linear -v "[10, 20, 30]" -t 20
//!   sortviz --interactive                # Prompt-driven session
//!   sortviz --help                       # Show help

use std::env;
use std::io;
use std::process;
use std::time::Duration;

use log::{error, LevelFilter};
use sort_visualizer::animation::{play, BarChart};
use sort_visualizer::app::{Controller, Dialog, RunReport};
use sort_visualizer::config::VisualizerConfig;
use sort_visualizer::error::{Error, ExecutionError};
use sort_visualizer::registry::{build_registry, AlgorithmRegistry};
use sort_visualizer::shell::Shell;
use sort_visualizer::tui::{self, TerminalSurface};

/// Settings gathered from the command line.
#[derive(Default)]
struct Options {
    config: VisualizerConfig,
    algorithm: Option<String>,
    values: Option<String>,
    target: Option<String>,
    interactive: bool,
    gui: bool,
    show_list: bool,
    show_help: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("Missing value for {}", flag))
        };

        match flag {
            "--help" | "-h" => options.show_help = true,
            "--algorithms" | "-l" => options.show_list = true,
            "--interactive" | "-i" => options.interactive = true,
            "--gui" => options.gui = true,
            "--algorithm" | "-a" => options.algorithm = Some(value()?),
            "--values" | "-v" => options.values = Some(value()?),
            "--target" | "-t" => options.target = Some(value()?),
            "--min" => options.config.min_value = value()?,
            "--max" => options.config.max_value = value()?,
            "--count" => options.config.num_elements = value()?,
            "--seed" => {
                let raw = value()?;
                options.config.seed =
                    Some(raw.parse().map_err(|_| format!("Invalid seed: {}", raw))?);
            }
            "--sort-interval-ms" => options.config.sort_interval = parse_millis(&value()?)?,
            "--search-interval-ms" => options.config.search_interval = parse_millis(&value()?)?,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn parse_millis(raw: &str) -> Result<Duration, String> {
    raw.parse()
        .map(Duration::from_millis)
        .map_err(|_| format!("Invalid interval in milliseconds: {}", raw))
}

/// Replay a run in the terminal, starting from `chart`.
fn replay_in_terminal(report: &mut RunReport, chart: &BarChart) -> Result<(), ExecutionError> {
    let mut surface = TerminalSurface::new(io::stdout(), report.algorithm.name(), chart.clone());
    play(&mut report.animation, &mut surface, std::thread::sleep)?;
    Ok(())
}

fn run_once(
    controller: &mut Controller,
    registry: &AlgorithmRegistry,
    options: &Options,
) -> Result<(), Error> {
    let state = controller.state_mut();

    if let Some(name) = &options.algorithm {
        state.selected = registry.find(name)?;
    }
    if let Some(target) = &options.target {
        state.search_value = target.clone();
    }

    match &options.values {
        Some(values) => controller.state_mut().list_text = values.clone(),
        None => {
            controller.generate_list()?;
        }
    }

    let mut report = controller.run()?;
    replay_in_terminal(&mut report, &controller.state().chart)?;
    tui::print_dialog(&report.dialog());
    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(controller: Controller) -> Result<(), Error> {
    sort_visualizer::gui::VisualizerApp::new(controller)
        .run()
        .map_err(|e| ExecutionError::Frontend(e.to_string()).into())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_controller: Controller) -> Result<(), Error> {
    Err(ExecutionError::Frontend(
        "this build has no desktop window; rebuild with `--features gui`".into(),
    )
    .into())
}

fn fail(err: &Error) -> ! {
    error!("{}", err);
    tui::print_dialog(&Dialog::error(err));
    process::exit(1);
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Try `sortviz --help`.");
            process::exit(1);
        }
    };

    if options.show_help {
        tui::print_help();
        return;
    }

    let registry = build_registry();
    if options.show_list {
        tui::print_available_algorithms(&registry);
        return;
    }

    let mut controller = match Controller::new(options.config.clone()) {
        Ok(controller) => controller,
        Err(e) => fail(&e.into()),
    };

    if options.gui {
        if let Err(e) = run_gui(controller) {
            fail(&e);
        }
        return;
    }

    if options.interactive {
        tui::print_header();
        let stdin = io::stdin();
        let result = Shell::new(&mut controller, &registry).run(
            stdin.lock(),
            io::stdout(),
            replay_in_terminal,
        );
        if let Err(e) = result {
            fail(&ExecutionError::from(e).into());
        }
        return;
    }

    if let Err(e) = run_once(&mut controller, &registry, &options) {
        fail(&e);
    }
}
