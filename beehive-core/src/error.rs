use thiserror::Error;

use crate::brood::QueenId;

/// The one failure family in the hive: something was not available.
///
/// Spec-form operations (`consume_honey`, `assign_bee`, ...) swallow these and
/// leave state unchanged; the `try_*` forms hand them back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HiveError {
    #[error("not enough honey: needed {needed:.2}, vault holds {available:.2}")]
    InsufficientHoney { needed: f32, available: f32 },

    #[error("not enough nectar: needed {needed:.2}, vault holds {available:.2}")]
    InsufficientNectar { needed: f32, available: f32 },

    #[error("not enough eggs: needed {needed:.2}, brood holds {available:.2}")]
    InsufficientEggs { needed: f32, available: f32 },

    #[error("no unassigned worker for {job} ({available:.2} available)")]
    NoUnassignedWorkers { job: &'static str, available: f32 },

    #[error("unknown job: {0:?}")]
    UnknownJob(String),

    #[error("egg care handle {0:?} does not belong to this brood")]
    ForeignQueen(QueenId),
}
