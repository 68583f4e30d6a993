use crate::models::{MoodLevel, MoodSample};
use std::collections::VecDeque;

pub const WINDOW_SIZE: usize = 7;
pub const TODAY_LABEL: &str = "Today";

#[derive(Debug, Clone, Default)]
pub struct MoodTracker {
    samples: VecDeque<MoodSample>,
    selection: Option<MoodLevel>,
}

impl MoodTracker {
    pub fn new(seed: impl IntoIterator<Item = MoodSample>) -> Self {
        let mut samples: VecDeque<MoodSample> = seed.into_iter().collect();
        while samples.len() > WINDOW_SIZE {
            samples.pop_front();
        }
        Self {
            samples,
            selection: None,
        }
    }

    pub fn samples(&self) -> impl ExactSizeIterator<Item = &MoodSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn selection(&self) -> Option<MoodLevel> {
        self.selection
    }

    pub fn select_mood(&mut self, level: MoodLevel) {
        self.selection = Some(level);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Returns `None` and leaves the window untouched when nothing is selected.
    pub fn submit_check_in(&mut self) -> Option<MoodSample> {
        let level = self.selection.take()?;
        let sample = MoodSample::new(TODAY_LABEL, level);
        self.samples.push_back(sample.clone());
        if self.samples.len() > WINDOW_SIZE {
            self.samples.pop_front();
        }
        Some(sample)
    }
}
