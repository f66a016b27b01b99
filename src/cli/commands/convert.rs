//! The `convert` command - area-to-sheet cost conversion.
//!
//! Prints one line per invalid field so each offending input can be fixed
//! independently, then fails the command so scripts see a non-zero exit.

use crate::{
    core::converter,
    errors::{Error, Result},
};

/// Converts a bulk purchase into a cost per reference area and prints it.
///
/// # Errors
/// Returns an error after reporting every invalid input field.
pub fn convert(
    width_cm: f64,
    length_cm: f64,
    price_paid: f64,
    reference_area_cm2: f64,
) -> Result<()> {
    match converter::convert_area_cost(width_cm, length_cm, price_paid, reference_area_cm2) {
        Ok(cost) => {
            println!(
                "A {width_cm:.1} x {length_cm:.1} cm piece at {price_paid:.2} costs {cost:.4} per {reference_area_cm2:.1} cm2 sheet"
            );
            println!("Write this value into the matching variable-cost field.");
            Ok(())
        }
        Err(problems) => {
            for problem in &problems {
                eprintln!("invalid input: {problem}");
            }
            Err(Error::Config {
                message: format!("{} invalid input field(s)", problems.len()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::converter::A4_SHEET_AREA_CM2;

    #[test]
    fn test_valid_inputs_succeed() {
        assert!(convert(50.0, 100.0, 25.0, A4_SHEET_AREA_CM2).is_ok());
    }

    #[test]
    fn test_invalid_inputs_fail_the_command() {
        let result = convert(0.0, -1.0, 10.0, A4_SHEET_AREA_CM2);
        assert!(matches!(
            result.unwrap_err(),
            Error::Config { message } if message.contains("2 invalid")
        ));
    }
}
