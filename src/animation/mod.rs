//! # Animation Driver
//!
//! Replays a [`StepSequence`] against a [`DisplaySurface`], one frame per
//! tick at a fixed interval:
//!
//! - **Sorting frame**: every bar takes its height from the snapshot
//! - **Search frame**: all bars reset to neutral, then the probed bar turns
//!   green (match) or red (no match)
//!
//! Replay is one-shot. The driver does not own a clock; front ends either call
//! [`play`] (blocking, terminal) or call [`Animation::render_next`] from their
//! own timer (egui repaint).

#[cfg(test)]
pub mod test;

use std::time::Duration;

use log::{debug, trace};

use crate::config::VisualizerConfig;
use crate::error::ExecutionError;
use crate::steps::{Probe, StepSequence, Value};

/// Bar highlight state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarColor {
    /// Blue
    #[default]
    Neutral,
    /// Green: the probed element matched the target
    Found,
    /// Red: the probed element did not match
    Probing,
}

/// A render target for bar heights and colors.
pub trait DisplaySurface {
    /// Replace all bar heights.
    fn set_heights(&mut self, heights: &[Value]);

    /// Paint every bar [`BarColor::Neutral`].
    fn reset_colors(&mut self);

    /// Paint one bar. Out-of-range indices are ignored.
    fn highlight(&mut self, index: usize, color: BarColor);

    /// Flush the current frame to the screen.
    fn present(&mut self) -> Result<(), ExecutionError> {
        Ok(())
    }
}

/// In-memory bar chart shared by all front ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BarChart {
    heights: Vec<Value>,
    colors: Vec<BarColor>,
}

impl BarChart {
    /// Chart of `values` with every bar neutral.
    pub fn new(values: &[Value]) -> Self {
        Self {
            heights: values.to_vec(),
            colors: vec![BarColor::Neutral; values.len()],
        }
    }

    pub fn heights(&self) -> &[Value] {
        &self.heights
    }

    pub fn colors(&self) -> &[BarColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Iterate `(height, color)` pairs in bar order.
    pub fn bars(&self) -> impl Iterator<Item = (Value, BarColor)> + '_ {
        self.heights.iter().copied().zip(self.colors.iter().copied())
    }
}

impl DisplaySurface for BarChart {
    fn set_heights(&mut self, heights: &[Value]) {
        self.heights.clear();
        self.heights.extend_from_slice(heights);
        self.colors.resize(heights.len(), BarColor::Neutral);
    }

    fn reset_colors(&mut self) {
        self.colors.fill(BarColor::Neutral);
    }

    fn highlight(&mut self, index: usize, color: BarColor) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
    }
}

/// One-shot replay of a Step Sequence.
#[derive(Clone, Debug)]
pub struct Animation {
    steps: StepSequence,
    interval: Duration,
    next_frame: usize,
    cancelled: bool,
}

impl Animation {
    pub fn new(steps: StepSequence, interval: Duration) -> Self {
        Self {
            steps,
            interval,
            next_frame: 0,
            cancelled: false,
        }
    }

    /// Pick the frame interval for the kind of steps: sorting or search.
    pub fn for_steps(steps: StepSequence, config: &VisualizerConfig) -> Self {
        let interval = match steps {
            StepSequence::Sort(_) => config.sort_interval,
            StepSequence::Search { .. } => config.search_interval,
        };
        Self::new(steps, interval)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    pub fn frame_count(&self) -> usize {
        self.steps.len()
    }

    /// Frames not yet rendered.
    pub fn remaining(&self) -> usize {
        if self.cancelled {
            0
        } else {
            self.frame_count() - self.next_frame
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Stop the replay; no further frames are rendered.
    pub fn cancel(&mut self) {
        if !self.cancelled {
            debug!(
                "animation cancelled at frame {}/{}",
                self.next_frame,
                self.frame_count()
            );
        }
        self.cancelled = true;
    }

    /// Show the state before the first frame: initial heights, all neutral.
    pub fn prepare(&self, surface: &mut dyn DisplaySurface) {
        surface.set_heights(self.steps.initial_values());
        surface.reset_colors();
    }

    /// Render the next frame onto `surface`.
    ///
    /// Returns the index of the rendered frame, or `None` once finished.
    pub fn render_next(&mut self, surface: &mut dyn DisplaySurface) -> Option<usize> {
        if self.is_finished() {
            return None;
        }

        let frame = self.next_frame;
        match &self.steps {
            StepSequence::Sort(snapshots) => surface.set_heights(&snapshots[frame]),
            StepSequence::Search { probes, .. } => {
                let Probe { index, matched } = probes[frame];
                surface.reset_colors();
                let color = if matched {
                    BarColor::Found
                } else {
                    BarColor::Probing
                };
                surface.highlight(index, color);
            }
        }

        trace!("rendered frame {}/{}", frame + 1, self.frame_count());
        self.next_frame += 1;
        Some(frame)
    }
}

/// Replay every remaining frame, presenting each and sleeping between them.
///
/// `sleep` receives the frame interval; tests pass a no-op.
pub fn play<S>(
    animation: &mut Animation,
    surface: &mut dyn DisplaySurface,
    mut sleep: S,
) -> Result<usize, ExecutionError>
where
    S: FnMut(Duration),
{
    let interval = animation.interval();
    let mut rendered = 0;

    debug!(
        "replaying {} frames at {:?} per frame",
        animation.remaining(),
        interval
    );

    while animation.render_next(surface).is_some() {
        surface.present()?;
        rendered += 1;

        if !animation.is_finished() {
            sleep(interval);
        }
    }

    Ok(rendered)
}
