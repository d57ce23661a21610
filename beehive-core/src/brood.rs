use log::trace;
use serde::Serialize;

use crate::error::HiveError;

/// Non-owning handle to a queen. Egg care workers carry one so they can report
/// incubation progress without holding a reference back into their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QueenId(u64);

impl QueenId {
    pub fn new(id: u64) -> Self {
        QueenId(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Incubating eggs and the pool of potential workers they hatch into.
#[derive(Debug, Clone, PartialEq)]
pub struct Brood {
    queen: QueenId,
    eggs: f32,
    unassigned_workers: f32,
}

impl Brood {
    pub fn new(queen: QueenId, unassigned_workers: f32) -> Self {
        Brood {
            queen,
            eggs: 0.0,
            unassigned_workers,
        }
    }

    pub fn queen(&self) -> QueenId {
        self.queen
    }

    pub fn eggs(&self) -> f32 {
        self.eggs
    }

    pub fn unassigned_workers(&self) -> f32 {
        self.unassigned_workers
    }

    pub fn lay_eggs(&mut self, amount: f32) {
        self.eggs += amount;
    }

    /// Moves `amount` egg mass into the unassigned-worker pool.
    pub fn try_care_for_eggs(&mut self, amount: f32) -> Result<(), HiveError> {
        if self.eggs < amount {
            return Err(HiveError::InsufficientEggs {
                needed: amount,
                available: self.eggs,
            });
        }
        self.eggs -= amount;
        self.unassigned_workers += amount;
        Ok(())
    }

    pub fn care_for_eggs(&mut self, amount: f32) -> bool {
        match self.try_care_for_eggs(amount) {
            Ok(()) => true,
            Err(err) => {
                trace!("{}", err);
                false
            }
        }
    }

    /// Same as [`Brood::try_care_for_eggs`], but only when `queen` resolves to
    /// this brood's owner.
    pub fn try_care_for_eggs_of(&mut self, queen: QueenId, amount: f32) -> Result<(), HiveError> {
        if queen != self.queen {
            return Err(HiveError::ForeignQueen(queen));
        }
        self.try_care_for_eggs(amount)
    }

    /// Takes one unit from the pool for a new `job` worker.
    pub fn try_take_worker(&mut self, job: &'static str) -> Result<(), HiveError> {
        if self.unassigned_workers < 1.0 {
            return Err(HiveError::NoUnassignedWorkers {
                job,
                available: self.unassigned_workers,
            });
        }
        self.unassigned_workers -= 1.0;
        Ok(())
    }
}
