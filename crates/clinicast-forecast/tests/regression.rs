use clinicast_core::models::regression::RegressionModel;
use clinicast_core::models::signal::ValueRange;
use clinicast_forecast::error::ForecastError;
use clinicast_forecast::predict::predict;
use clinicast_forecast::regression::train;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("x{i}")).collect()
}

#[test]
fn recovers_exact_linear_relationship() {
    let features: Vec<Vec<f64>> = (0..12)
        .map(|i| {
            let x0 = i as f64;
            let x1 = ((i * 7) % 5) as f64;
            vec![x0, x1]
        })
        .collect();
    let targets: Vec<f64> = features.iter().map(|r| 2.0 * r[0] - 3.0 * r[1] + 5.0).collect();

    let model = train(&features, &targets, &names(2)).unwrap();
    assert!(!model.degenerate);
    assert!((model.r_squared - 1.0).abs() < 1e-9);
    assert!((model.weights[0] - 2.0).abs() < 1e-6);
    assert!((model.weights[1] + 3.0).abs() < 1e-6);
    assert!((model.bias - 5.0).abs() < 1e-6);
    assert!(model.residual_std_dev < 1e-6);
}

#[test]
fn singular_fit_falls_back_to_mean() {
    // Second column duplicates the first.
    let features = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]];
    let targets = vec![3.0, 5.0, 10.0];

    let model = train(&features, &targets, &names(2)).unwrap();
    assert!(model.degenerate);
    assert_eq!(model.weights, vec![0.0, 0.0]);
    assert!((model.bias - 6.0).abs() < 1e-12);
    assert_eq!(model.r_squared, 0.0);
}

#[test]
fn constant_targets_give_zero_r_squared() {
    let features = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
    let targets = vec![4.0; 4];

    let model = train(&features, &targets, &names(1)).unwrap();
    assert_eq!(model.r_squared, 0.0);
    assert!((model.bias - 4.0).abs() < 1e-9);
}

#[test]
fn empty_input_is_insufficient() {
    assert!(matches!(
        train(&[], &[], &[]),
        Err(ForecastError::InsufficientData(_))
    ));
    assert!(matches!(
        train(&[vec![], vec![]], &[1.0, 2.0], &[]),
        Err(ForecastError::InsufficientData(_))
    ));
}

#[test]
fn ragged_rows_are_rejected() {
    let features = vec![vec![1.0, 2.0], vec![3.0]];
    assert!(matches!(
        train(&features, &[1.0, 2.0], &names(2)),
        Err(ForecastError::ShapeMismatch(_))
    ));
}

#[test]
fn target_count_must_match_rows() {
    let features = vec![vec![1.0], vec![2.0]];
    assert!(matches!(
        train(&features, &[1.0], &names(1)),
        Err(ForecastError::ShapeMismatch(_))
    ));
}

fn pain_model(residual_std_dev: f64) -> RegressionModel {
    RegressionModel {
        weights: vec![0.8, 0.5],
        bias: 1.0,
        r_squared: 0.6,
        feature_names: names(2),
        residual_std_dev,
        degenerate: false,
    }
}

#[test]
fn prediction_band_brackets_value() {
    let domain = ValueRange::new(0.0, 10.0);
    for (a, b, sd) in [(3.0, 2.0, 0.7), (9.0, 9.0, 2.5), (0.0, 0.0, 0.0), (-5.0, 1.0, 1.0)] {
        let p = predict(&pain_model(sd), &[a, b], domain).unwrap();
        assert!(p.lower <= p.value && p.value <= p.upper, "{p:?}");
        assert!(domain.contains(p.lower) && domain.contains(p.upper));
    }
}

#[test]
fn prediction_is_rounded_and_clamped() {
    let domain = ValueRange::new(0.0, 10.0);
    // raw = 0.8*3 + 0.5*2 + 1 = 4.4, margin = 1.96
    let p = predict(&pain_model(1.0), &[3.0, 2.0], domain).unwrap();
    assert_eq!(p.value, 4.4);
    assert_eq!(p.lower, 2.4);
    assert_eq!(p.upper, 6.4);

    let high = predict(&pain_model(1.0), &[10.0, 10.0], domain).unwrap();
    assert_eq!(high.value, 10.0);
    assert_eq!(high.upper, 10.0);
}

#[test]
fn prediction_rejects_wrong_width() {
    let domain = ValueRange::new(0.0, 10.0);
    assert!(predict(&pain_model(1.0), &[1.0], domain).is_err());
}
