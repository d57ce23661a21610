use log::{debug, trace};

use crate::brood::{Brood, QueenId};
use crate::error::HiveError;
use crate::report::HiveStatus;
use crate::role::{Bee, Role};
use crate::vault::HoneyVault;
use crate::worker::{ShiftOutcome, Worker};

pub const EGGS_PER_SHIFT: f32 = 0.45;
/// Charged per assigned worker after every shift the queen works.
pub const HONEY_PER_WORKER: f32 = 0.5;
pub const INITIAL_UNASSIGNED_WORKERS: f32 = 3.0;

/// The hive's queen: lays eggs, owns the workforce and keeps the status report.
#[derive(Debug, Clone)]
pub struct Queen {
    id: QueenId,
    workers: Vec<Worker>,
    brood: Brood,
    shifts_worked: u64,
    status_report: String,
}

impl Queen {
    /// Creates the queen and assigns one bee to each role, in table order.
    pub fn new(id: QueenId, vault: &HoneyVault) -> Self {
        let mut queen = Queen {
            id,
            workers: Vec::new(),
            brood: Brood::new(id, INITIAL_UNASSIGNED_WORKERS),
            shifts_worked: 0,
            status_report: String::new(),
        };
        for role in Role::ASSIGNABLE {
            queen.assign_bee(role.job(), vault);
        }
        queen
    }

    pub fn id(&self) -> QueenId {
        self.id
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn eggs(&self) -> f32 {
        self.brood.eggs()
    }

    pub fn unassigned_workers(&self) -> f32 {
        self.brood.unassigned_workers()
    }

    pub fn shifts_worked(&self) -> u64 {
        self.shifts_worked
    }

    /// Text of the last regenerated report.
    pub fn status_report(&self) -> &str {
        &self.status_report
    }

    /// Adds a worker for `job`, spending one unassigned worker.
    /// The report is regenerated whether or not the assignment went through.
    pub fn try_assign_bee(&mut self, job: &str, vault: &HoneyVault) -> Result<Role, HiveError> {
        let result = self.add_worker(job);
        self.update_status_report(vault);
        result
    }

    pub fn assign_bee(&mut self, job: &str, vault: &HoneyVault) -> bool {
        match self.try_assign_bee(job, vault) {
            Ok(role) => {
                debug!("assigned a {} bee", role.job());
                true
            }
            Err(err) => {
                debug!("assignment ignored: {}", err);
                false
            }
        }
    }

    fn add_worker(&mut self, job: &str) -> Result<Role, HiveError> {
        let role = Role::assignable(job).ok_or_else(|| HiveError::UnknownJob(job.to_string()))?;
        let worker = Worker::for_role(role, self.id).ok_or_else(|| HiveError::UnknownJob(job.to_string()))?;
        self.brood.try_take_worker(role.job())?;
        self.workers.push(worker);
        Ok(role)
    }

    pub fn care_for_eggs(&mut self, eggs_to_convert: f32) -> bool {
        self.brood.care_for_eggs(eggs_to_convert)
    }

    /// Pays the queen's upkeep, then lays eggs, runs every worker in
    /// assignment order and charges the workforce upkeep.
    pub fn work_the_next_shift(&mut self, vault: &mut HoneyVault) -> ShiftOutcome {
        if !vault.consume_honey(self.cost_per_shift()) {
            trace!("queen skipped her shift");
            return ShiftOutcome::Skipped;
        }
        self.do_job(vault);
        ShiftOutcome::Worked
    }

    fn do_job(&mut self, vault: &mut HoneyVault) {
        self.brood.lay_eggs(EGGS_PER_SHIFT);

        let mut skipped = 0;
        for worker in &self.workers {
            if worker.work_the_next_shift(vault, &mut self.brood) == ShiftOutcome::Skipped {
                skipped += 1;
            }
        }

        vault.consume_honey(HONEY_PER_WORKER * self.workers.len() as f32);
        self.shifts_worked += 1;
        debug!(
            "shift {}: {} of {} workers skipped, honey {:.1}, nectar {:.1}",
            self.shifts_worked,
            skipped,
            self.workers.len(),
            vault.honey(),
            vault.nectar()
        );
        self.update_status_report(vault);
    }

    pub fn status(&self, shift: u64, vault: &HoneyVault) -> HiveStatus {
        HiveStatus::capture(
            shift,
            vault,
            self.brood.eggs(),
            self.brood.unassigned_workers(),
            self.workers.iter().map(|worker| worker.job()),
        )
    }

    fn update_status_report(&mut self, vault: &HoneyVault) {
        self.status_report = self.status(self.shifts_worked, vault).to_string();
    }
}

impl Bee for Queen {
    fn role(&self) -> Role {
        Role::Queen
    }
}
