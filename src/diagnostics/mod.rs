//! Diagnostics data model returned by the solver and written by the binary.
//!
//! `CoverReport` is the main entry point: it pairs the compact
//! [`CoverResult`](crate::types::CoverResult) with a `PipelineTrace` that
//! records stage timings and per-block sizes.

pub mod blocks;
pub mod pipeline;
pub mod timing;

pub use blocks::{BlockReport, CoverLine};
pub use pipeline::{CoverReport, InputDescriptor, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
