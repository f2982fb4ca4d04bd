//! Daily booking-count series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DemandError, Result};

/// A single day's booking count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar date of the bucket
    pub date: NaiveDate,
    /// Number of bookings on that date
    pub count: u32,
}

impl SeriesPoint {
    /// Create a new point.
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// Chronologically ordered booking counts for one room.
///
/// Dates are strictly increasing, so every date appears at most once.
/// Deserialization runs the same check as [`TimeSeries::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SeriesPoint>", into = "Vec<SeriesPoint>")]
pub struct TimeSeries {
    points: Vec<SeriesPoint>,
}

impl TimeSeries {
    /// Build a series, rejecting unordered or duplicate dates.
    pub fn new(points: Vec<SeriesPoint>) -> Result<Self> {
        if let Some(pair) = points.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(DemandError::InvalidData(format!(
                "dates must be strictly increasing: {} is followed by {}",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { points })
    }

    /// Build a series of consecutive days starting at `start`.
    pub fn from_daily_counts(start: NaiveDate, counts: &[u32]) -> Result<Self> {
        let mut points = Vec::with_capacity(counts.len());
        let mut date = start;
        for (i, &count) in counts.iter().enumerate() {
            if i > 0 {
                date = date.succ_opt().ok_or_else(|| {
                    DemandError::InvalidData(format!("no calendar day after {}", date))
                })?;
            }
            points.push(SeriesPoint::new(date, count));
        }
        Ok(Self { points })
    }

    /// Number of observed days
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Observed points in date order
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Counts as floating-point values, in date order
    pub fn counts(&self) -> Vec<f64> {
        self.points.iter().map(|p| f64::from(p.count)).collect()
    }

    /// Sum of all daily counts
    pub fn total_count(&self) -> u64 {
        self.points.iter().map(|p| u64::from(p.count)).sum()
    }

    /// Date of the most recent observation
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Date of the next, not-yet-observed period (last date + 1 day).
    pub fn next_date(&self) -> Option<NaiveDate> {
        self.last_date().and_then(|d| d.succ_opt())
    }

    /// Sub-series within the inclusive bounds; `None` leaves that side open.
    pub fn between(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let points = self
            .points
            .iter()
            .filter(|p| start.map_or(true, |s| p.date >= s))
            .filter(|p| end.map_or(true, |e| p.date <= e))
            .copied()
            .collect();
        Self { points }
    }
}

impl TryFrom<Vec<SeriesPoint>> for TimeSeries {
    type Error = DemandError;

    fn try_from(points: Vec<SeriesPoint>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<TimeSeries> for Vec<SeriesPoint> {
    fn from(series: TimeSeries) -> Self {
        series.points
    }
}
