pub mod brood;
pub mod error;
pub mod queen;
pub mod report;
pub mod role;
pub mod vault;
pub mod worker;

pub use brood::{Brood, QueenId};
pub use error::HiveError;
pub use queen::Queen;
pub use report::{HiveStatus, RoleCount};
pub use role::{Bee, Role, RoleSpec, ROLES};
pub use vault::HoneyVault;
pub use worker::{ShiftOutcome, Worker};

/// The whole colony: one vault, one queen and her workers.
#[derive(Debug, Clone)]
pub struct Hive {
    vault: HoneyVault,
    queen: Queen,
    shift: u64,
}

impl Default for Hive {
    fn default() -> Self {
        Self::new()
    }
}

impl Hive {
    pub fn new() -> Self {
        Self::with_vault(HoneyVault::new())
    }

    pub fn with_vault(vault: HoneyVault) -> Self {
        let queen = Queen::new(QueenId::new(0), &vault);
        Hive {
            vault,
            queen,
            shift: 0,
        }
    }

    pub fn vault(&self) -> &HoneyVault {
        &self.vault
    }

    pub fn queen(&self) -> &Queen {
        &self.queen
    }

    /// Number of shifts triggered so far, worked or not.
    pub fn shift(&self) -> u64 {
        self.shift
    }

    /// Advances the hive by one shift.
    pub fn work_the_next_shift(&mut self) -> ShiftOutcome {
        self.shift += 1;
        self.queen.work_the_next_shift(&mut self.vault)
    }

    pub fn assign_bee(&mut self, job: &str) -> bool {
        self.queen.assign_bee(job, &self.vault)
    }

    pub fn try_assign_bee(&mut self, job: &str) -> Result<Role, HiveError> {
        self.queen.try_assign_bee(job, &self.vault)
    }

    pub fn status_report(&self) -> &str {
        self.queen.status_report()
    }

    pub fn status(&self) -> HiveStatus {
        self.queen.status(self.shift, &self.vault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn fresh_hive() {
        let hive = Hive::new();
        let status = hive.status();
        assert_eq!(status.eggs, 0.0);
        assert_eq!(status.unassigned_workers, 0.0);
        assert_eq!(status.total_workers, 3);
        assert!(status.workers.iter().all(|count| count.count == 1));
        assert_eq!(hive.vault(), &HoneyVault::new());
        assert_eq!(
            hive.status_report(),
            "Vault report:\n\
             25.0 units of honey\n\
             100.0 units of nectar\n\
             \n\
             Egg count: 0.0\n\
             Unassigned workers: 0.0\n\
             1 Nectar Collector bee\n\
             1 Honey Manufacturer bee\n\
             1 Egg Care bee\n\
             TOTAL WORKERS: 3"
        );
    }

    #[test]
    fn one_funded_shift() {
        let mut hive = Hive::new();
        assert_eq!(hive.work_the_next_shift(), ShiftOutcome::Worked);

        // Eggs are laid before egg care runs, so care succeeds in the same shift.
        assert_close(hive.queen().eggs(), 0.30);
        assert_close(hive.queen().unassigned_workers(), 0.15);
        assert_close(hive.vault().nectar(), 100.0 + 33.25 - 33.15);
        assert_close(hive.vault().honey(), 25.0 + 33.15 - 8.65);
        assert_eq!(hive.queen().workers().len(), 3);
        assert!(hive.status_report().contains("49.5 units of honey"));
        assert!(hive.status_report().contains("Egg count: 0.3"));
    }

    #[test]
    fn starving_hive_stops_changing() {
        let mut hive = Hive::with_vault(HoneyVault::with_levels(0.0, 3.0));
        assert_eq!(hive.work_the_next_shift(), ShiftOutcome::Worked);
        assert!(hive.vault().honey() < Role::Queen.cost_per_shift());

        let report = hive.status_report().to_string();
        let vault = hive.vault().clone();
        let eggs = hive.queen().eggs();

        assert_eq!(hive.work_the_next_shift(), ShiftOutcome::Skipped);
        assert_eq!(hive.status_report(), report);
        assert_eq!(hive.vault(), &vault);
        assert_eq!(hive.queen().eggs(), eggs);
        assert_eq!(hive.queen().shifts_worked(), 1);
        assert_eq!(hive.shift(), 2);
    }

    #[test]
    fn unknown_role_is_ignored() {
        let mut hive = Hive::new();
        assert!(!hive.assign_bee("Unknown Role"));
        assert_eq!(hive.queen().workers().len(), 3);
        assert_eq!(hive.queen().unassigned_workers(), 0.0);
    }

    #[test]
    fn report_is_stable_between_mutations() {
        let mut hive = Hive::new();
        hive.work_the_next_shift();
        assert_eq!(hive.status_report(), hive.status_report());
        assert_eq!(hive.status(), hive.status());
        assert_eq!(hive.status().to_string(), hive.status_report());
    }

    #[test]
    fn assignments_never_outrun_the_pool() {
        let mut hive = Hive::new();
        for _ in 0..20 {
            hive.work_the_next_shift();
            let before = hive.queen().workers().len();
            let pool = hive.queen().unassigned_workers();
            let assigned = hive.assign_bee("Egg Care");
            assert_eq!(assigned, pool >= 1.0);
            let grown = hive.queen().workers().len() - before;
            assert_eq!(grown, usize::from(assigned));
            assert!(hive.queen().unassigned_workers() >= 0.0);
            assert!(hive.queen().eggs() >= 0.0);
        }
    }
}
