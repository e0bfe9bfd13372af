//! Operator abstraction
//!
//! Every operator-facing prompt in the pipeline is a blocking call on
//! this trait, returning a typed decision. `None` from a prompt means
//! the operator cancelled it; what cancellation means is decided at the
//! call site (abort the batch for the alternative choice, no-op for
//! narrower prompts).
//!
//! The pipeline never talks to the terminal directly, so the whole
//! review flow can be driven by a scripted implementation in tests.

use spheroid_core::GrayImage;
use spheroid_region::Roi;
use std::path::PathBuf;

/// Blocking operator prompts. One method per dialog kind.
pub trait Operator {
    /// Free-text message with a single acknowledge.
    fn message(&mut self, title: &str, text: &str);

    /// Single choice out of `options`; `None` if cancelled.
    fn choose(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[&str],
        default: usize,
    ) -> Option<usize>;

    /// Numeric value in `[min, max]`; `None` if cancelled.
    fn slider(&mut self, title: &str, prompt: &str, min: i32, max: i32, default: i32)
    -> Option<i32>;

    /// Subset of `names` by index; `None` if cancelled.
    fn select_regions(&mut self, title: &str, prompt: &str, names: &[String]) -> Option<Vec<usize>>;

    /// Display the current region set overlaid on the working image.
    /// Purely informational; returns immediately.
    fn show_regions(&mut self, title: &str, image: &GrayImage, rois: &[Roi]);

    /// Ask for a directory; `None` if declined.
    fn pick_directory(&mut self, title: &str, prompt: &str) -> Option<PathBuf>;
}
