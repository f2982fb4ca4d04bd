//! Room input loading
//!
//! JSON files hold a single room, an array of rooms, or `{ "rooms": [...] }`.
//! CSV files hold one room's series as `date,count` rows.

use chrono::NaiveDate;
use demand_facade::{RoomRequest, SeriesPoint, TimeSeries};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::CliResult;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    count: u32,
}

/// Load a booking series from a `date,count` CSV file
pub fn load_csv_series(path: &Path) -> CliResult<TimeSeries> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut points = Vec::new();
    for (line, result) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1
        let row = result.map_err(|e| format!("Failed to read record {}: {}", line + 2, e))?;
        points.push(SeriesPoint::new(row.date, row.count));
    }

    TimeSeries::new(points).map_err(|e| e.to_string())
}

/// Load one or more rooms from a JSON file
pub fn load_json_rooms(path: &Path) -> CliResult<Vec<RoomRequest>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;
    rooms_from_json(json)
}

fn rooms_from_json(json: serde_json::Value) -> CliResult<Vec<RoomRequest>> {
    let rooms = match json {
        serde_json::Value::Array(rooms) => serde_json::Value::Array(rooms),
        serde_json::Value::Object(mut obj) => match obj.remove("rooms") {
            Some(rooms) => rooms,
            None => serde_json::Value::Array(vec![serde_json::Value::Object(obj)]),
        },
        _ => return Err("Expected a room object or an array of rooms".to_string()),
    };

    serde_json::from_value(rooms).map_err(|e| format!("Invalid room data: {}", e))
}

/// Load rooms from file (auto-detect format)
///
/// CSV input carries no price, so `price` is required for it.
pub fn load_rooms(path: &Path, price: Option<f64>) -> CliResult<Vec<RoomRequest>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let from_csv = |path: &Path| -> CliResult<Vec<RoomRequest>> {
        let series = load_csv_series(path)?;
        let price = price.ok_or("--price is required for CSV input")?;
        Ok(vec![RoomRequest::new(series, price)])
    };

    let rooms = match ext.as_str() {
        "csv" => from_csv(path)?,
        "json" => load_json_rooms(path)?,
        _ => load_json_rooms(path).or_else(|_| from_csv(path))?,
    };

    debug!(rooms = rooms.len(), path = %path.display(), "loaded input");
    Ok(rooms)
}
