// Parameterised tests for countdown display derivation and the meal catalog

use mypump::models::meal::MealCatalog;
use mypump::models::timer::{normalize_duration, ColorBand, REFERENCE_DURATION_SECONDS};
use mypump::services::countdown::format_remaining;
use test_case::test_case;

#[test_case(300.0, ColorBand::Safe; "full reference")]
#[test_case(200.5, ColorBand::Safe; "just above two thirds")]
#[test_case(200.0, ColorBand::Warning; "exactly two thirds")]
#[test_case(150.0, ColorBand::Warning; "half")]
#[test_case(100.0, ColorBand::Critical; "exactly one third")]
#[test_case(0.0, ColorBand::Critical; "expired")]
#[test_case(1200.0, ColorBand::Safe; "longer than reference")]
fn test_band_classification(remaining: f64, expected: ColorBand) {
    assert_eq!(
        ColorBand::classify(remaining, REFERENCE_DURATION_SECONDS),
        expected
    );
}

#[test_case(0.0, "0:00"; "zero")]
#[test_case(59.999, "0:59"; "seconds are floored")]
#[test_case(60.0, "1:00"; "one minute")]
#[test_case(299.4, "4:59"; "just under five minutes")]
#[test_case(1800.0, "30:00"; "maximum duration")]
fn test_format_remaining(remaining: f64, expected: &str) {
    assert_eq!(format_remaining(remaining), expected);
}

#[test_case(None, 300.0; "missing input uses default")]
#[test_case(Some(0.0), 10.0; "below minimum")]
#[test_case(Some(10.0), 10.0; "minimum")]
#[test_case(Some(1800.0), 1800.0; "maximum")]
#[test_case(Some(99_999.0), 1800.0; "above maximum")]
#[test_case(Some(f64::INFINITY), 300.0; "infinite input uses default")]
fn test_normalize_duration(value: Option<f64>, expected: f64) {
    assert_eq!(normalize_duration(value), expected);
}

#[test_case("Proteinshake", 54; "shake")]
#[test_case("ChickenBreast", 30; "chicken")]
#[test_case("SalmonFilet", 25; "salmon")]
#[test_case("Quark", 20; "quark")]
#[test_case("Beef", 40; "beef")]
#[test_case("Tofu", 15; "tofu")]
#[test_case("Eggs", 12; "eggs")]
#[test_case("proteinshake", 0; "ids are case sensitive")]
fn test_catalog_protein(id: &str, grams: u32) {
    assert_eq!(MealCatalog::new().protein_for(id), grams);
}
