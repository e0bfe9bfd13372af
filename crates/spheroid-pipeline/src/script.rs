//! Scripted operator
//!
//! A deterministic [`Operator`] fed from queues of prepared answers.
//! Used by the pipeline tests to drive full review cycles without a
//! terminal; it also records everything it was shown, so tests can
//! assert on the prompts the pipeline issued.
//!
//! Popping an empty queue panics: a script that runs dry mid-flow is a
//! test defect, not an operator decision.

use crate::operator::Operator;
use spheroid_core::GrayImage;
use spheroid_region::Roi;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Queue-driven operator for deterministic runs.
#[derive(Debug, Default)]
pub struct ScriptedOperator {
    /// Answers for [`Operator::choose`], front first
    pub choices: VecDeque<Option<usize>>,
    /// Answers for [`Operator::slider`]
    pub sliders: VecDeque<Option<i32>>,
    /// Answers for [`Operator::select_regions`]
    pub selections: VecDeque<Option<Vec<usize>>>,
    /// Answers for [`Operator::pick_directory`]
    pub directories: VecDeque<Option<PathBuf>>,
    /// Titles of every message shown
    pub messages: Vec<String>,
    /// Title and region count of every overlay display
    pub displays: Vec<(String, usize)>,
}

impl ScriptedOperator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operator for ScriptedOperator {
    fn message(&mut self, title: &str, _text: &str) {
        self.messages.push(title.to_string());
    }

    fn choose(
        &mut self,
        title: &str,
        _prompt: &str,
        _options: &[&str],
        _default: usize,
    ) -> Option<usize> {
        self.choices
            .pop_front()
            .unwrap_or_else(|| panic!("script ran out of choices at '{title}'"))
    }

    fn slider(
        &mut self,
        title: &str,
        _prompt: &str,
        _min: i32,
        _max: i32,
        _default: i32,
    ) -> Option<i32> {
        self.sliders
            .pop_front()
            .unwrap_or_else(|| panic!("script ran out of slider values at '{title}'"))
    }

    fn select_regions(
        &mut self,
        title: &str,
        _prompt: &str,
        _names: &[String],
    ) -> Option<Vec<usize>> {
        self.selections
            .pop_front()
            .unwrap_or_else(|| panic!("script ran out of selections at '{title}'"))
    }

    fn show_regions(&mut self, title: &str, _image: &GrayImage, rois: &[Roi]) {
        self.displays.push((title.to_string(), rois.len()));
    }

    fn pick_directory(&mut self, title: &str, _prompt: &str) -> Option<PathBuf> {
        self.directories
            .pop_front()
            .unwrap_or_else(|| panic!("script ran out of directories at '{title}'"))
    }
}
