use log::trace;
use serde::Serialize;
use std::fmt;

use crate::error::HiveError;

pub const INITIAL_NECTAR: f32 = 100.0;
pub const INITIAL_HONEY: f32 = 25.0;

/// Honey produced per unit of nectar processed.
pub const NECTAR_CONVERSION_RATE: f32 = 1.0;

/// Levels below this get a warning line in the status report.
pub const LOW_LEVEL_WARNING: f32 = 10.0;

/// The hive's shared nectar/honey pool.
///
/// Neither level ever goes negative: every debit checks sufficiency first and
/// leaves the vault untouched when it fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoneyVault {
    nectar: f32,
    honey: f32,
}

impl Default for HoneyVault {
    fn default() -> Self {
        Self::new()
    }
}

impl HoneyVault {
    pub fn new() -> Self {
        Self::with_levels(INITIAL_NECTAR, INITIAL_HONEY)
    }

    /// Starts the vault at arbitrary levels. Negative inputs clamp to zero.
    pub fn with_levels(nectar: f32, honey: f32) -> Self {
        HoneyVault {
            nectar: nectar.max(0.0),
            honey: honey.max(0.0),
        }
    }

    pub fn nectar(&self) -> f32 {
        self.nectar
    }

    pub fn honey(&self) -> f32 {
        self.honey
    }

    pub fn try_consume_honey(&mut self, amount: f32) -> Result<(), HiveError> {
        if self.honey < amount {
            return Err(HiveError::InsufficientHoney {
                needed: amount,
                available: self.honey,
            });
        }
        self.honey -= amount;
        Ok(())
    }

    /// Debits `amount` honey if the vault holds at least that much.
    /// Returns whether the debit happened.
    pub fn consume_honey(&mut self, amount: f32) -> bool {
        match self.try_consume_honey(amount) {
            Ok(()) => true,
            Err(err) => {
                trace!("{}", err);
                false
            }
        }
    }

    /// Collection has no failure mode.
    pub fn collect_nectar(&mut self, amount: f32) {
        self.nectar += amount;
    }

    /// Turns `amount` nectar into honey, returning the honey produced.
    /// Insufficient nectar is a full no-op, not a partial conversion.
    pub fn try_convert_nectar_to_honey(&mut self, amount: f32) -> Result<f32, HiveError> {
        if self.nectar < amount {
            return Err(HiveError::InsufficientNectar {
                needed: amount,
                available: self.nectar,
            });
        }
        let produced = amount * NECTAR_CONVERSION_RATE;
        self.nectar -= amount;
        self.honey += produced;
        Ok(produced)
    }

    pub fn convert_nectar_to_honey(&mut self, amount: f32) -> bool {
        match self.try_convert_nectar_to_honey(amount) {
            Ok(_) => true,
            Err(err) => {
                trace!("{}", err);
                false
            }
        }
    }

    pub fn is_low_on_honey(&self) -> bool {
        self.honey < LOW_LEVEL_WARNING
    }

    pub fn is_low_on_nectar(&self) -> bool {
        self.nectar < LOW_LEVEL_WARNING
    }

    pub fn status_report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HoneyVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} units of honey\n{:.1} units of nectar",
            self.honey, self.nectar
        )?;
        if self.is_low_on_honey() {
            write!(f, "\nLOW HONEY - ADD A HONEY MANUFACTURER")?;
        }
        if self.is_low_on_nectar() {
            write!(f, "\nLOW NECTAR - ADD A NECTAR COLLECTOR")?;
        }
        Ok(())
    }
}
