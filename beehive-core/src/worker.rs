use log::trace;
use serde::Serialize;

use crate::brood::{Brood, QueenId};
use crate::role::{Bee, Role};
use crate::vault::HoneyVault;

const NECTAR_COLLECTED_PER_SHIFT: f32 = 33.25;
const NECTAR_PROCESSED_PER_SHIFT: f32 = 33.15;
const CARE_PROGRESS_PER_SHIFT: f32 = 0.15;

/// Result of one bee's shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShiftOutcome {
    /// Upkeep was paid and the job ran.
    Worked,
    /// Upkeep was unaffordable; nothing happened.
    Skipped,
}

/// An assigned, non-queen bee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Worker {
    NectarCollector,
    HoneyManufacturer,
    EggCare { queen: QueenId },
}

impl Worker {
    /// Builds a worker for an assignable role. `queen` is only kept by egg care.
    pub fn for_role(role: Role, queen: QueenId) -> Option<Worker> {
        match role {
            Role::NectarCollector => Some(Worker::NectarCollector),
            Role::HoneyManufacturer => Some(Worker::HoneyManufacturer),
            Role::EggCare => Some(Worker::EggCare { queen }),
            Role::Queen => None,
        }
    }

    /// Pays upkeep, then does the job. An unpaid shift is skipped outright.
    pub fn work_the_next_shift(&self, vault: &mut HoneyVault, brood: &mut Brood) -> ShiftOutcome {
        if !vault.consume_honey(self.cost_per_shift()) {
            trace!("{} skipped its shift", self.job());
            return ShiftOutcome::Skipped;
        }
        self.do_job(vault, brood);
        ShiftOutcome::Worked
    }

    fn do_job(&self, vault: &mut HoneyVault, brood: &mut Brood) {
        match *self {
            Worker::NectarCollector => vault.collect_nectar(NECTAR_COLLECTED_PER_SHIFT),
            Worker::HoneyManufacturer => {
                vault.convert_nectar_to_honey(NECTAR_PROCESSED_PER_SHIFT);
            }
            Worker::EggCare { queen } => {
                if let Err(err) = brood.try_care_for_eggs_of(queen, CARE_PROGRESS_PER_SHIFT) {
                    trace!("{}", err);
                }
            }
        }
    }
}

impl Bee for Worker {
    fn role(&self) -> Role {
        match self {
            Worker::NectarCollector => Role::NectarCollector,
            Worker::HoneyManufacturer => Role::HoneyManufacturer,
            Worker::EggCare { .. } => Role::EggCare,
        }
    }
}
