//! JSON data file holding the room catalog and the bookings.

use std::path::Path;

use anyhow::{Context, Result};
use booking_engine::{Booking, Room};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HotelData {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl HotelData {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse data file: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write data file: {}", path.display()))
    }
}
