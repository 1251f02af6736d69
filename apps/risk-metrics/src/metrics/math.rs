//! Statistical math utilities for risk metric calculations.

/// Calculate mean of a slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Calculate sample standard deviation (n - 1 denominator).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let avg = mean(values)?;
    let variance_sum: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    let variance = variance_sum / (values.len() - 1) as f64;

    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        let values = vec![10.0, 20.0, 30.0, 40.0];
        assert_eq!(mean(&values), Some(25.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_std_dev() {
        let values = vec![10.0, 20.0, 30.0, 40.0];
        let Some(std) = std_dev(&values) else {
            panic!("std_dev should succeed for four values");
        };
        // sqrt(500 / 3)
        assert!((std - 12.909_944_487_358_056).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_needs_two_values() {
        assert_eq!(std_dev(&[5.0]), None);
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn test_std_dev_constant_series() {
        assert_eq!(std_dev(&[3.0, 3.0, 3.0]), Some(0.0));
    }
}
