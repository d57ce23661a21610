use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

// --- Error Type ---
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

// --- Enums for Choices ---
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}', expected 'text' or 'json'", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

// --- Configuration Sections ---

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: ReportFormat,
}

/// A job to hand out before the given shift runs.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScheduledAssignment {
    pub shift: u32,
    pub job: String,
}

// --- Top-Level Config Struct ---

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_shifts")]
    pub shifts: u32,
    /// Pause between shifts, 0 runs them back to back.
    #[serde(default)]
    pub shift_interval_ms: u64,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub assignments: Vec<ScheduledAssignment>,
}

fn default_shifts() -> u32 { 10 }

impl Default for Config {
    fn default() -> Self {
        Self {
            shifts: default_shifts(),
            shift_interval_ms: 0,
            output: OutputSettings::default(),
            assignments: Vec::new(),
        }
    }
}

// --- Helper Methods ---

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shifts == 0 {
            return Err(ConfigError::Validation("Shift count must be greater than 0".to_string()));
        }

        for assignment in &self.assignments {
            if assignment.shift == 0 || assignment.shift > self.shifts {
                return Err(ConfigError::Validation(format!(
                    "Assignment of '{}' is scheduled for shift {}, outside 1..={}",
                    assignment.job, assignment.shift, self.shifts
                )));
            }
            if assignment.job.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Assignment for shift {} has an empty job",
                    assignment.shift
                )));
            }
        }

        Ok(())
    }

    /// Assignments due before `shift`, in file order.
    pub fn assignments_for(&self, shift: u32) -> impl Iterator<Item = &ScheduledAssignment> {
        self.assignments.iter().filter(move |a| a.shift == shift)
    }
}

// --- Loading Function ---

/// Loads TOML when the file ends in `.toml`, JSON otherwise.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("toml"));

    let config: Config = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn load_valid_json_config() {
        let content = r#"{
          "shifts": 25,
          "shift_interval_ms": 250,
          "output": { "format": "json" },
          "assignments": [
            { "shift": 8, "job": "Nectar Collector" },
            { "shift": 15, "job": "Egg Care" }
          ]
        }"#;
        let file = write_config(content, ".json");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.shifts, 25);
        assert_eq!(config.shift_interval_ms, 250);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.assignments.len(), 2);
        assert_eq!(config.assignments[1].job, "Egg Care");
    }

    #[test]
    fn load_valid_toml_config() {
        let content = r#"
shifts = 12

[output]
format = "text"

[[assignments]]
shift = 9
job = "Honey Manufacturer"
"#;
        let file = write_config(content, ".toml");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.shifts, 12);
        assert_eq!(config.shift_interval_ms, 0);
        assert_eq!(config.output.format, ReportFormat::Text);
        assert_eq!(
            config.assignments,
            vec![ScheduledAssignment { shift: 9, job: "Honey Manufacturer".to_string() }]
        );
    }

    #[test]
    fn empty_document_uses_defaults() {
        let file = write_config("{}", ".json");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_invalid_shift_count() {
        let file = write_config(r#"{ "shifts": 0 }"#, ".json");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn assignment_outside_the_run_is_rejected() {
        let content = r#"{ "shifts": 5, "assignments": [ { "shift": 6, "job": "Egg Care" } ] }"#;
        let file = write_config(content, ".json");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn blank_job_is_rejected() {
        let config = Config {
            assignments: vec![ScheduledAssignment { shift: 1, job: "  ".to_string() }],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn unknown_jobs_are_left_to_the_hive() {
        let config = Config {
            assignments: vec![ScheduledAssignment { shift: 1, job: "Drone".to_string() }],
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_config("{ shifts: ", ".json");
        assert!(matches!(load_config(file.path()), Err(ConfigError::JsonParse(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_config(Path::new("/definitely/not/here/hive.json"));
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }

    #[test]
    fn assignments_are_grouped_by_shift_in_file_order() {
        let config = Config {
            assignments: vec![
                ScheduledAssignment { shift: 3, job: "Egg Care".to_string() },
                ScheduledAssignment { shift: 1, job: "Nectar Collector".to_string() },
                ScheduledAssignment { shift: 3, job: "Honey Manufacturer".to_string() },
            ],
            ..Config::default()
        };
        let due: Vec<&str> = config.assignments_for(3).map(|a| a.job.as_str()).collect();
        assert_eq!(due, vec!["Egg Care", "Honey Manufacturer"]);
        assert_eq!(config.assignments_for(2).count(), 0);
    }

    #[test]
    fn report_format_parses_from_cli_text() {
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("text".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
