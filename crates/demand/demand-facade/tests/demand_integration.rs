//! Integration tests for the demand facade
//!
//! Golden values for each algorithm plus the JSON request/response flow.

use chrono::NaiveDate;
use demand_facade::*;

fn series(counts: &[u32]) -> TimeSeries {
    TimeSeries::from_daily_counts(NaiveDate::from_ymd_opt(2025, 10, 25).unwrap(), counts).unwrap()
}

// ============================================================================
// Algorithms
// ============================================================================

#[test]
fn test_ols_on_increasing_series() {
    let fit = LinearRegression.fit(&[2.0, 4.0, 6.0]);
    let c = fit.model.coefficients();

    assert!((c[0] - 2.0).abs() < 1e-10, "intercept {}", c[0]);
    assert!((c[1] - 2.0).abs() < 1e-10, "slope {}", c[1]);
    assert!((fit.forecast_next() - 8.0).abs() < 1e-10);
    assert!((r_squared_dense(&[2.0, 4.0, 6.0], &fit.fitted) - 1.0).abs() < 1e-10);
}

#[test]
fn test_moving_average_window_three() {
    let ma = MovingAverage::new(3).unwrap();
    let values = ma.smooth(&[2.0, 4.0, 6.0]);

    assert_eq!(values[0], None);
    assert_eq!(values[1], None);
    assert!((values[2].unwrap() - 4.0).abs() < 1e-10);
    assert!((ma.forecast_next(&[2.0, 4.0, 6.0]).unwrap() - 4.0).abs() < 1e-10);
}

#[test]
fn test_moving_average_short_series_averages_available() {
    let ma = MovingAverage::new(5).unwrap();
    assert!((ma.forecast_next(&[2.0, 4.0]).unwrap() - 3.0).abs() < 1e-10);
}

#[test]
fn test_exponential_smoothing_levels() {
    let levels = ExponentialSmoothing::new(0.3).unwrap().levels(&[2.0, 4.0, 6.0]);
    let expected = [2.0, 2.0, 2.6, 3.62];

    assert_eq!(levels.len(), 4);
    for (got, want) in levels.iter().zip(expected) {
        assert!((got - want).abs() < 1e-10, "{} != {}", got, want);
    }
}

#[test]
fn test_quadratic_recovery() {
    let y: Vec<f64> = (0..10)
        .map(|i| {
            let x = i as f64;
            2.0 * x * x + 3.0 * x + 1.0
        })
        .collect();
    let fit = PolynomialRegression::quadratic().fit(&y);
    let c = fit.model.coefficients();

    assert!((c[0] - 1.0).abs() < 1e-6);
    assert!((c[1] - 3.0).abs() < 1e-6);
    assert!((c[2] - 2.0).abs() < 1e-6);
    assert!((r_squared_dense(&y, &fit.fitted) - 1.0).abs() < 1e-9);
}

#[test]
fn test_solver_singular_matrix() {
    let a = vec![vec![1.0, 2.0], vec![1.0, 2.0]];
    let result = solve_linear_system(&a, &[3.0, 3.0]);
    assert!(matches!(result, Err(DemandError::SingularMatrix { .. })));
    assert!(result.unwrap_err().is_recoverable());
}

#[test]
fn test_classifier_boundaries() {
    let at_three = DemandClassifier.classify(3.0, 1000.0).unwrap();
    assert_eq!(at_three.tier, DemandTier::Stable);

    let at_five = DemandClassifier.classify(5.0, 1000.0).unwrap();
    assert_eq!(at_five.tier, DemandTier::High);
    assert!((at_five.optimal_price - 1100.0).abs() < 1e-9);

    let below = DemandClassifier.classify(2.999, 1000.0).unwrap();
    assert_eq!(below.tier, DemandTier::Low);
    assert!((below.price_multiplier - 0.9).abs() < 1e-10);
}

#[test]
fn test_r_squared_too_few_pairs() {
    assert_eq!(r_squared(&[1.0, 100.0], &[Some(1.0), None]), 0.0);
}

// ============================================================================
// Analysis flow
// ============================================================================

#[test]
fn test_analyze_room_defaults() {
    let analysis = analyze_room(&RoomRequest::new(series(&[5, 5, 5, 5, 5]), 3500.0)).unwrap();

    for point in &analysis.forecast {
        for value in [point.moving_average, point.exp_smooth, point.regression]
            .into_iter()
            .flatten()
        {
            assert!((value - 5.0).abs() < 1e-10);
        }
    }
    assert_eq!(analysis.r_squared, 1.0);
    assert_eq!(analysis.classification.tier, DemandTier::High);
}

#[test]
fn test_json_request_to_json_analysis() {
    let request: RoomRequest = serde_json::from_str(
        r#"{
            "room_id": 2,
            "name": "Deluxe",
            "price": 2000,
            "trendline_degree": 3,
            "series": [
                {"date": "2025-10-25", "count": 1},
                {"date": "2025-10-26", "count": 4},
                {"date": "2025-10-27", "count": 2},
                {"date": "2025-10-28", "count": 6},
                {"date": "2025-10-29", "count": 3}
            ]
        }"#,
    )
    .unwrap();

    let analysis = analyze_room(&request).unwrap();
    assert_eq!(analysis.trendline.model.degree(), TrendDegree::Cubic);

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["room_id"], 2);
    assert_eq!(json["classification"]["tier"], "stable");
    assert_eq!(json["trendline"]["requested_degree"], 3);
    assert_eq!(json["forecast"].as_array().unwrap().len(), 6);
    assert_eq!(json["forecast"][5]["date"], "2025-10-30");
    assert!(json["forecast"][5]["actual"].is_null());
}

#[test]
fn test_json_request_rejects_unordered_series() {
    let result: std::result::Result<RoomRequest, _> = serde_json::from_str(
        r#"{
            "price": 1000,
            "series": [
                {"date": "2025-10-26", "count": 1},
                {"date": "2025-10-25", "count": 4}
            ]
        }"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_json_request_rejects_unknown_degree() {
    let result: std::result::Result<RoomRequest, _> = serde_json::from_str(
        r#"{"price": 1000, "series": [], "trendline_degree": 4}"#,
    );
    assert!(result.is_err());
}
