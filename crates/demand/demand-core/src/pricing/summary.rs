//! Descriptive booking figures

use demand_api::BookingSummary;
use demand_spi::{DemandError, Result, TimeSeries};

use super::classifier::DemandClassifier;

/// Totals and daily average for a room.
///
/// # Errors
///
/// [`DemandError::InvalidParameter`] if `total_bookings * price` is not finite.
pub fn summarize(series: &TimeSeries, total_bookings: u64, price: f64) -> Result<BookingSummary> {
    let total_sales = total_bookings as f64 * price;
    if !total_sales.is_finite() {
        return Err(DemandError::invalid_parameter(
            "price",
            format!("{} x {} bookings is not a finite sales total", price, total_bookings),
        ));
    }

    Ok(BookingSummary {
        days: series.len(),
        total_bookings,
        total_sales,
        avg_daily_bookings: DemandClassifier::average_bookings(total_bookings, series.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_summary() {
        let series =
            TimeSeries::from_daily_counts(NaiveDate::from_ymd_opt(2025, 10, 25).unwrap(), &[3, 2, 1, 2])
                .unwrap();
        let summary = summarize(&series, 8, 1200.0).unwrap();

        assert_eq!(summary.days, 4);
        assert_eq!(summary.total_bookings, 8);
        assert!((summary.total_sales - 9600.0).abs() < 1e-9);
        assert!((summary.avg_daily_bookings - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_series_summary() {
        let summary = summarize(&TimeSeries::default(), 0, 2000.0).unwrap();
        assert_eq!(summary.days, 0);
        assert_eq!(summary.avg_daily_bookings, 0.0);
        assert_eq!(summary.total_sales, 0.0);
    }

    #[test]
    fn test_overflowing_sales_rejected() {
        let series = TimeSeries::from_daily_counts(NaiveDate::from_ymd_opt(2025, 10, 25).unwrap(), &[3])
            .unwrap();
        assert!(matches!(
            summarize(&series, 3, f64::MAX),
            Err(DemandError::InvalidParameter { .. })
        ));
    }
}
