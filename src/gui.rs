//! Desktop front end: an egui window with the entry fields, algorithm radio
//! buttons and an `egui_plot` bar chart.
//!
//! Frames advance on repaint: after each frame the window asks egui for a
//! repaint once the animation interval has elapsed.

use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Bar, BarChart as PlotBars, Plot};
use log::{debug, error};

use crate::animation::{Animation, BarColor};
use crate::app::{Controller, Dialog, DialogKind};
use crate::error::Error;
use crate::registry::ALGORITHMS;

const WINDOW_TITLE: &str = "Sorting Algorithm Analyzer";

fn fill(color: BarColor) -> egui::Color32 {
    match color {
        BarColor::Neutral => egui::Color32::from_rgb(31, 119, 180),
        BarColor::Found => egui::Color32::from_rgb(44, 160, 44),
        BarColor::Probing => egui::Color32::from_rgb(214, 39, 40),
    }
}

/// Animation currently being replayed and when its next frame is due.
struct Playback {
    animation: Animation,
    next_frame_at: Instant,
}

/// A runnable egui application wrapping a [`Controller`].
pub struct VisualizerApp {
    controller: Controller,
    playback: Option<Playback>,
    dialog: Option<Dialog>,
}

impl VisualizerApp {
    #[must_use]
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            playback: None,
            dialog: None,
        }
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([750.0, 700.0]),
            ..Default::default()
        };

        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }

    fn generate(&mut self) {
        // A new list replaces whatever was being replayed
        self.stop_playback();
        if let Err(e) = self.controller.generate_list() {
            self.show_error(Error::from(e));
        }
    }

    fn run_animation(&mut self) {
        self.stop_playback();
        match self.controller.run() {
            Ok(report) => {
                self.dialog = Some(report.dialog());
                self.playback = Some(Playback {
                    animation: report.animation,
                    next_frame_at: Instant::now(),
                });
            }
            Err(e) => self.show_error(e),
        }
    }

    fn stop_playback(&mut self) {
        if let Some(mut playback) = self.playback.take() {
            playback.animation.cancel();
        }
    }

    fn show_error(&mut self, err: Error) {
        error!("{}", err);
        self.dialog = Some(Dialog::error(&err));
    }

    /// Render every frame that is due and return the delay until the next one.
    fn advance(&mut self, now: Instant) -> Option<Duration> {
        let playback = self.playback.as_mut()?;
        let chart = &mut self.controller.state_mut().chart;

        while playback.next_frame_at <= now {
            if playback.animation.render_next(&mut *chart).is_none() {
                break;
            }
            playback.next_frame_at += playback.animation.interval();
        }

        if playback.animation.is_finished() {
            debug!("replay finished");
            self.playback = None;
            None
        } else {
            Some(playback.next_frame_at.saturating_duration_since(now))
        }
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        let mut generate = false;
        let mut run = false;

        {
            let state = self.controller.state_mut();

            ui.group(|ui| {
                ui.label("Randomizer Settings");
                ui.horizontal(|ui| {
                    ui.label("Min Value");
                    ui.add(egui::TextEdit::singleline(&mut state.min_value).desired_width(40.0));
                    ui.label("Max Value");
                    ui.add(egui::TextEdit::singleline(&mut state.max_value).desired_width(40.0));
                    ui.label("Num Elements");
                    ui.add(egui::TextEdit::singleline(&mut state.num_elements).desired_width(40.0));
                    generate = ui.button("Auto-Generate List").clicked();
                });
            });

            ui.group(|ui| {
                ui.label("Unsorted Data");
                ui.add(egui::TextEdit::singleline(&mut state.list_text).desired_width(f32::INFINITY));
            });

            ui.group(|ui| {
                ui.label("Choose Sorting Algorithm");
                ui.horizontal_wrapped(|ui| {
                    for algo in ALGORITHMS {
                        ui.radio_value(&mut state.selected, algo, algo.name());
                    }
                });
            });

            ui.group(|ui| {
                ui.label("Linear Search");
                ui.horizontal(|ui| {
                    ui.label("Search Value");
                    ui.add(egui::TextEdit::singleline(&mut state.search_value).desired_width(80.0));
                });
            });

            ui.vertical_centered(|ui| {
                run = ui
                    .button(egui::RichText::new("Run Animation").strong().size(16.0))
                    .clicked();
            });
        }

        if generate {
            self.generate();
        }
        if run {
            self.run_animation();
        }
    }

    fn chart(&self, ui: &mut egui::Ui) {
        let bars: Vec<Bar> = self
            .controller
            .state()
            .chart
            .bars()
            .enumerate()
            .map(|(i, (height, color))| Bar::new(i as f64, height as f64).width(0.8).fill(fill(color)))
            .collect();

        Plot::new("sorting-visualization")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(PlotBars::new(bars).name("values"));
            });
    }

    fn dialog_window(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.dialog else {
            return;
        };

        let mut close = false;
        egui::Window::new(dialog.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let text = egui::RichText::new(&dialog.message);
                match dialog.kind {
                    DialogKind::Info => ui.label(text),
                    DialogKind::Error => ui.label(text.color(egui::Color32::RED)),
                };
                close = ui.button("OK").clicked();
            });

        if close {
            self.dialog = None;
        }
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(delay) = self.advance(Instant::now()) {
            ctx.request_repaint_after(delay);
        }

        egui::TopBottomPanel::top("form").show(ctx, |ui| self.form(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Sorting Visualization");
            self.chart(ui);
        });
        self.dialog_window(ctx);
    }
}
