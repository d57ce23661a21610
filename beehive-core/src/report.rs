use serde::Serialize;
use std::fmt;

use crate::role::Role;
use crate::vault::HoneyVault;

/// How many workers hold one job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleCount {
    pub job: &'static str,
    pub count: usize,
}

impl fmt::Display for RoleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(f, "{} {} bee{}", self.count, self.job, plural)
    }
}

/// Point-in-time snapshot of the hive. `Display` renders the status report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiveStatus {
    pub shift: u64,
    pub vault: HoneyVault,
    pub eggs: f32,
    pub unassigned_workers: f32,
    pub workers: Vec<RoleCount>,
    pub total_workers: usize,
}

impl HiveStatus {
    /// Counts `jobs` per assignable role, in assignment-table order.
    pub fn capture<'a>(
        shift: u64,
        vault: &HoneyVault,
        eggs: f32,
        unassigned_workers: f32,
        jobs: impl Iterator<Item = &'a str> + Clone,
    ) -> Self {
        let workers: Vec<RoleCount> = Role::ASSIGNABLE
            .iter()
            .map(|role| RoleCount {
                job: role.job(),
                count: jobs.clone().filter(|job| *job == role.job()).count(),
            })
            .collect();
        HiveStatus {
            shift,
            vault: vault.clone(),
            eggs,
            unassigned_workers,
            total_workers: jobs.count(),
            workers,
        }
    }
}

impl fmt::Display for HiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vault report:")?;
        writeln!(f, "{}", self.vault)?;
        writeln!(f)?;
        writeln!(f, "Egg count: {:.1}", self.eggs)?;
        writeln!(f, "Unassigned workers: {:.1}", self.unassigned_workers)?;
        for count in &self.workers {
            writeln!(f, "{}", count)?;
        }
        write!(f, "TOTAL WORKERS: {}", self.total_workers)
    }
}
