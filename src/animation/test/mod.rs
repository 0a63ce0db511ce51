//! Tests for the animation driver.

use std::time::Duration;

use super::{play, Animation, BarChart, BarColor, DisplaySurface};
use crate::config::VisualizerConfig;
use crate::error::ExecutionError;
use crate::steps::{Probe, StepSequence, Value};

/// Records every call so frame effects can be asserted in order.
#[derive(Default)]
struct RecordingSurface {
    chart: BarChart,
    presented: Vec<(Vec<Value>, Vec<BarColor>)>,
}

impl DisplaySurface for RecordingSurface {
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
        self.presented
            .push((self.chart.heights().to_vec(), self.chart.colors().to_vec()));
        Ok(())
    }
}

fn search_steps() -> StepSequence {
    StepSequence::Search {
        values: vec![10, 20, 30],
        probes: vec![Probe::new(0, false), Probe::new(1, true)],
    }
}

#[test]
fn test_intervals_follow_step_kind() {
    let config = VisualizerConfig::default();

    let sort = Animation::for_steps(StepSequence::Sort(vec![vec![1]]), &config);
    assert_eq!(sort.interval(), Duration::from_millis(100));

    let search = Animation::for_steps(search_steps(), &config);
    assert_eq!(search.interval(), Duration::from_millis(500));
}

#[test]
fn test_sorting_frames_update_heights_in_order() {
    let steps = StepSequence::Sort(vec![vec![3, 1, 2], vec![1, 3, 2], vec![1, 2, 3]]);
    let mut animation = Animation::new(steps, Duration::from_millis(100));
    let mut surface = RecordingSurface::default();

    animation.prepare(&mut surface);
    assert_eq!(surface.chart.heights(), &[3, 1, 2]);

    let rendered = play(&mut animation, &mut surface, |_| {}).unwrap();
    assert_eq!(rendered, 3);

    let heights: Vec<Vec<Value>> = surface.presented.iter().map(|(h, _)| h.clone()).collect();
    assert_eq!(heights, vec![vec![3, 1, 2], vec![1, 3, 2], vec![1, 2, 3]]);
    assert!(animation.is_finished());
}

#[test]
fn test_search_frames_recolor_single_bar() {
    let mut animation = Animation::for_steps(search_steps(), &VisualizerConfig::default());
    let mut surface = RecordingSurface::default();
    animation.prepare(&mut surface);

    play(&mut animation, &mut surface, |_| {}).unwrap();

    use BarColor::*;
    assert_eq!(
        surface.presented,
        vec![
            (vec![10, 20, 30], vec![Probing, Neutral, Neutral]),
            (vec![10, 20, 30], vec![Neutral, Found, Neutral]),
        ]
    );
}

#[test]
fn test_sleeps_between_frames_only() {
    let steps = StepSequence::Sort(vec![vec![2, 1], vec![1, 2], vec![1, 2]]);
    let mut animation = Animation::new(steps, Duration::from_millis(100));
    let mut chart = BarChart::default();
    let mut sleeps = Vec::new();

    play(&mut animation, &mut chart, |d| sleeps.push(d)).unwrap();

    assert_eq!(sleeps, vec![Duration::from_millis(100); 2]);
}

#[test]
fn test_replay_is_one_shot() {
    let mut animation = Animation::new(StepSequence::Sort(vec![vec![]]), Duration::from_millis(1));
    let mut chart = BarChart::default();

    assert_eq!(animation.render_next(&mut chart), Some(0));
    assert_eq!(animation.render_next(&mut chart), None);
    assert_eq!(play(&mut animation, &mut chart, |_| {}).unwrap(), 0);
}

#[test]
fn test_cancel_stops_replay() {
    let steps = StepSequence::Sort(vec![vec![2, 1], vec![1, 2]]);
    let mut animation = Animation::new(steps, Duration::from_millis(100));
    let mut chart = BarChart::default();

    assert_eq!(animation.render_next(&mut chart), Some(0));
    animation.cancel();

    assert!(animation.is_finished());
    assert_eq!(animation.render_next(&mut chart), None);
    assert_eq!(chart.heights(), &[2, 1]);
}

#[test]
fn test_highlight_out_of_range_is_ignored() {
    let mut chart = BarChart::new(&[1, 2]);
    chart.highlight(5, BarColor::Found);
    assert_eq!(chart.colors(), &[BarColor::Neutral, BarColor::Neutral]);
}

#[test]
fn test_set_heights_resizes_colors() {
    let mut chart = BarChart::new(&[1]);
    chart.set_heights(&[4, 5, 6]);
    assert_eq!(chart.len(), 3);
    assert_eq!(chart.colors().len(), 3);
}
