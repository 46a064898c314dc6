use clinicast_forecast::stats::{clamp, linear_fit, mean, median, percentile, round1, std_dev, variance};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_input_is_zero_not_nan() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(median(&[]), 0.0);
    assert_eq!(variance(&[]), 0.0);
    assert_eq!(std_dev(&[7.0]), 0.0);
    assert_eq!(percentile(&[], 90.0), 0.0);
    assert_eq!(linear_fit(&[]), (0.0, 0.0));
}

#[test]
fn mean_and_median() {
    assert!(close(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5));
    assert!(close(median(&[3.0, 1.0, 2.0]), 2.0));
    assert!(close(median(&[4.0, 1.0, 3.0, 2.0]), 2.5));
}

#[test]
fn variance_uses_sample_denominator() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert!(close(variance(&values), 32.0 / 7.0));
    assert!(close(std_dev(&values), (32.0_f64 / 7.0).sqrt()));
}

#[test]
fn percentile_interpolates_and_clamps_rank() {
    let values = [50.0, 10.0, 40.0, 20.0, 30.0];
    assert!(close(percentile(&values, 0.0), 10.0));
    assert!(close(percentile(&values, 25.0), 20.0));
    assert!(close(percentile(&values, 90.0), 46.0));
    assert!(close(percentile(&values, 150.0), 50.0));
}

#[test]
fn rounding_and_clamping() {
    assert_eq!(round1(3.14159), 3.1);
    assert_eq!(round1(-1.26), -1.3);
    assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
    assert_eq!(clamp(-2.0, 0.0, 10.0), 0.0);
}

#[test]
fn linear_fit_recovers_a_line() {
    let (slope, intercept) = linear_fit(&[1.0, 3.0, 5.0, 7.0]);
    assert!(close(slope, 2.0));
    assert!(close(intercept, 1.0));
    assert_eq!(linear_fit(&[4.0]), (0.0, 4.0));
}
