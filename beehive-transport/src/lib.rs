use beehive_core::Hive;
use std::io::{self, Write};
use thiserror::Error;

// --- Error Type ---
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to serialize hive status: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write hive status: {0}")]
    Io(#[from] io::Error),
}

// --- Traits ---
/// Renders the hive's current state for display.
pub trait Serializer {
    fn serialize(&self, hive: &Hive) -> Result<String, TransportError>;
}

/// Sends serialized data to a destination.
pub trait Sender {
    fn send(&mut self, data: &[u8]) -> Result<(), TransportError>;
}

// --- Implementations ---

/// Emits the queen's cached, human-readable status report.
pub struct TextSerializer;

impl Serializer for TextSerializer {
    fn serialize(&self, hive: &Hive) -> Result<String, TransportError> {
        Ok(hive.status_report().to_string())
    }
}

/// Emits a one-line JSON snapshot of the hive.
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize(&self, hive: &Hive) -> Result<String, TransportError> {
        let json_string = serde_json::to_string(&hive.status())?;
        Ok(json_string)
    }
}

/// Sends data to standard output.
pub struct StdioSender {
    stdout: io::Stdout,
}

impl StdioSender {
    pub fn new() -> Self {
        StdioSender { stdout: io::stdout() }
    }
}

impl Sender for StdioSender {
    fn send(&mut self, data: &[u8]) -> Result<(), TransportError> {
        let mut out = self.stdout.lock();
        out.write_all(data)?;
        out.write_all(b"\n")?; // Add newline for readability
        out.flush()?; // Ensure it's written immediately
        Ok(())
    }
}

impl Default for StdioSender {
    fn default() -> Self {
        Self::new()
    }
}
