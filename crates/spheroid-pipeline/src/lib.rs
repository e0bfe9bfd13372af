//! spheroid-pipeline - Interactive segmentation-and-review pipeline
//!
//! Coordinates the deterministic image-processing stages with the
//! operator's decisions for each image of a batch:
//!
//! 1. [`candidate`] - three fixed filter-chain configurations, each
//!    producing a candidate segmentation
//! 2. [`review`] - the per-image state machine: show candidates, take
//!    the operator's choice, re-derive the winning region set
//! 3. [`refine`] - manual region deletion
//! 4. [`enlarge`] - optional, repeatable region growth
//! 5. [`aggregate`] / [`skiplog`] - batch-wide summary and skip record
//! 6. [`batch`] - the driver tying the stages together
//!
//! All operator interaction goes through the [`Operator`] trait;
//! [`script::ScriptedOperator`] drives the pipeline deterministically
//! in tests.

pub mod aggregate;
pub mod batch;
pub mod candidate;
pub mod enlarge;
mod error;
pub mod operator;
pub mod refine;
pub mod review;
pub mod script;
pub mod skiplog;

pub use aggregate::Aggregator;
pub use batch::{BatchReport, run_batch};
pub use candidate::{CIRC_MAX, CIRC_MIN, Candidate, FilterConfig, SIZE_MIN, generate};
pub use enlarge::maybe_enlarge;
pub use error::{PipelineError, PipelineResult};
pub use operator::Operator;
pub use refine::deletion_pass;
pub use review::{ReviewDecision, ReviewOutcome, review_image};
pub use skiplog::SkipLog;
