//! HR reporting over the record stores. Read-only: every number here is a
//! rollup of persisted rows, never a re-score.

mod summary;
pub mod views;

pub use summary::RecruitingReport;
