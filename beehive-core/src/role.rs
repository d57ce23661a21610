use serde::Serialize;

/// Every job a bee can hold. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Queen,
    NectarCollector,
    HoneyManufacturer,
    EggCare,
}

/// Fixed per-role constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleSpec {
    pub role: Role,
    pub job: &'static str,
    pub cost_per_shift: f32,
}

/// Dispatch table, indexed by `Role as usize`.
pub const ROLES: [RoleSpec; 4] = [
    RoleSpec {
        role: Role::Queen,
        job: "Queen",
        cost_per_shift: 2.15,
    },
    RoleSpec {
        role: Role::NectarCollector,
        job: "Nectar Collector",
        cost_per_shift: 1.95,
    },
    RoleSpec {
        role: Role::HoneyManufacturer,
        job: "Honey Manufacturer",
        cost_per_shift: 1.70,
    },
    RoleSpec {
        role: Role::EggCare,
        job: "Egg Care",
        cost_per_shift: 1.35,
    },
];

impl Role {
    /// Roles the queen can hand out, in hive construction order.
    pub const ASSIGNABLE: [Role; 3] = [Role::NectarCollector, Role::HoneyManufacturer, Role::EggCare];

    pub fn spec(self) -> &'static RoleSpec {
        &ROLES[self as usize]
    }

    pub fn job(self) -> &'static str {
        self.spec().job
    }

    pub fn cost_per_shift(self) -> f32 {
        self.spec().cost_per_shift
    }

    /// Resolves an assignable job label. Matching is exact; "Queen" is not
    /// assignable.
    pub fn assignable(job: &str) -> Option<Role> {
        Self::ASSIGNABLE.into_iter().find(|role| role.job() == job)
    }
}

/// What every bee, queen included, can tell you about itself.
pub trait Bee {
    fn role(&self) -> Role;

    fn job(&self) -> &'static str {
        self.role().job()
    }

    fn cost_per_shift(&self) -> f32 {
        self.role().cost_per_shift()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_line_up_with_variants() {
        for (idx, spec) in ROLES.iter().enumerate() {
            assert_eq!(spec.role as usize, idx);
        }
    }

    #[test]
    fn costs_per_shift() {
        assert_eq!(Role::Queen.cost_per_shift(), 2.15);
        assert_eq!(Role::NectarCollector.cost_per_shift(), 1.95);
        assert_eq!(Role::HoneyManufacturer.cost_per_shift(), 1.70);
        assert_eq!(Role::EggCare.cost_per_shift(), 1.35);
    }

    #[test]
    fn resolves_assignable_labels_only() {
        assert_eq!(Role::assignable("Nectar Collector"), Some(Role::NectarCollector));
        assert_eq!(Role::assignable("Honey Manufacturer"), Some(Role::HoneyManufacturer));
        assert_eq!(Role::assignable("Egg Care"), Some(Role::EggCare));
        assert_eq!(Role::assignable("Queen"), None);
        assert_eq!(Role::assignable("egg care"), None);
        assert_eq!(Role::assignable("Unknown Role"), None);
    }
}
