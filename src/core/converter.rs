//! Area-to-sheet cost conversion.
//!
//! Bulk material (vinyl rolls, film, paper) is bought by dimensions and
//! price, but the variable-cost sheet stores prices per reference sheet.
//! This module normalizes `width x length x price paid` into a cost per
//! reference area. The caller decides which sheet field the result feeds;
//! the converter knows nothing about the destination.

use thiserror::Error;

/// Area of an A4 sheet in cm², the default reference unit.
pub const A4_SHEET_AREA_CM2: f64 = 623.7;

/// One invalid converter input field.
///
/// Validation is multi-field: every offending field is reported so a
/// caller can flag each input independently, instead of failing on the
/// first problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AreaInputError {
    /// Width was zero, negative, or not a number
    #[error("width must be greater than 0")]
    NonPositiveWidth,
    /// Length was zero, negative, or not a number
    #[error("length must be greater than 0")]
    NonPositiveLength,
    /// Price paid was zero, negative, or not a number
    #[error("price paid must be greater than 0")]
    NonPositivePrice,
}

/// Converts a bulk-material purchase into a cost per reference area.
///
/// Each of width, length, and price must be strictly positive; all
/// violations are collected before any arithmetic runs. A NaN input fails
/// the positivity check like any other non-positive value.
///
/// # Errors
/// Returns every [`AreaInputError`] that applies, in field order.
pub fn convert_area_cost(
    width_cm: f64,
    length_cm: f64,
    price_paid: f64,
    reference_area_cm2: f64,
) -> Result<f64, Vec<AreaInputError>> {
    let mut problems = Vec::new();
    if width_cm <= 0.0 || width_cm.is_nan() {
        problems.push(AreaInputError::NonPositiveWidth);
    }
    if length_cm <= 0.0 || length_cm.is_nan() {
        problems.push(AreaInputError::NonPositiveLength);
    }
    if price_paid <= 0.0 || price_paid.is_nan() {
        problems.push(AreaInputError::NonPositivePrice);
    }
    if !problems.is_empty() {
        return Err(problems);
    }

    let price_per_cm2 = price_paid / (width_cm * length_cm);
    Ok(price_per_cm2 * reference_area_cm2)
}

/// [`convert_area_cost`] against the A4 reference sheet.
///
/// # Errors
/// Same as [`convert_area_cost`].
pub fn sheet_cost_from_area(
    width_cm: f64,
    length_cm: f64,
    price_paid: f64,
) -> Result<f64, Vec<AreaInputError>> {
    convert_area_cost(width_cm, length_cm, price_paid, A4_SHEET_AREA_CM2)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_converts_to_a4_reference() {
        // A 50x100 cm roll bought for 25.00: 0.005/cm2, so one A4 sheet
        // costs 0.005 * 623.7
        let cost = sheet_cost_from_area(50.0, 100.0, 25.0).unwrap();
        assert!((cost - 3.1185).abs() < EPS);
    }

    #[test]
    fn test_reference_area_equal_to_purchase_recovers_price() {
        let cost = convert_area_cost(20.0, 30.0, 12.0, 600.0).unwrap();
        assert!((cost - 12.0).abs() < EPS);
    }

    #[test]
    fn test_custom_reference_area() {
        let a4 = convert_area_cost(50.0, 100.0, 25.0, A4_SHEET_AREA_CM2).unwrap();
        let half = convert_area_cost(50.0, 100.0, 25.0, A4_SHEET_AREA_CM2 / 2.0).unwrap();
        assert!((half - a4 / 2.0).abs() < EPS);
    }

    #[test]
    fn test_each_field_reported_independently() {
        let err = sheet_cost_from_area(0.0, 30.0, 10.0).unwrap_err();
        assert_eq!(err, vec![AreaInputError::NonPositiveWidth]);

        let err = sheet_cost_from_area(30.0, -1.0, 10.0).unwrap_err();
        assert_eq!(err, vec![AreaInputError::NonPositiveLength]);

        let err = sheet_cost_from_area(30.0, 30.0, 0.0).unwrap_err();
        assert_eq!(err, vec![AreaInputError::NonPositivePrice]);
    }

    #[test]
    fn test_all_failures_collected_not_fail_fast() {
        let err = sheet_cost_from_area(0.0, 0.0, -5.0).unwrap_err();
        assert_eq!(
            err,
            vec![
                AreaInputError::NonPositiveWidth,
                AreaInputError::NonPositiveLength,
                AreaInputError::NonPositivePrice,
            ]
        );
    }

    #[test]
    fn test_nan_inputs_rejected() {
        let err = sheet_cost_from_area(f64::NAN, f64::NAN, f64::NAN).unwrap_err();
        assert_eq!(err.len(), 3);
    }
}
