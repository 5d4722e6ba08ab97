//! Fuel Consumption Functions
//!
//! Average consumption from a tank fill and conversions between the usual
//! ways of expressing it:
//! - km/l (used in Brazil)
//! - l/100km
//! - MPG (US & Imperial)

const KM_PER_MILE: f64 = 1.609344;
const LITERS_PER_GALLON_US: f64 = 3.785411784;
const LITERS_PER_GALLON_IMPERIAL: f64 = 4.54609;

/// Average km per liter over a stretch driven on `liters` of fuel.
///
/// Returns `None` unless both values are positive and finite.
pub fn average_km_per_liter(km: f64, liters: f64) -> Option<f64> {
    if km.is_finite() && liters.is_finite() && km > 0.0 && liters > 0.0 {
        Some(km / liters)
    } else {
        None
    }
}

/// Convert km/l to l/100km
pub fn km_per_liter_to_liters_per_100km(km_per_liter: f64) -> f64 {
    100.0 / km_per_liter
}

/// Convert l/100km to km/l
pub fn liters_per_100km_to_km_per_liter(liters_per_100km: f64) -> f64 {
    100.0 / liters_per_100km
}

/// Convert km/l to US miles per gallon
pub fn km_per_liter_to_mpg_us(km_per_liter: f64) -> f64 {
    km_per_liter * LITERS_PER_GALLON_US / KM_PER_MILE
}

/// Convert km/l to Imperial miles per gallon
pub fn km_per_liter_to_mpg_imperial(km_per_liter: f64) -> f64 {
    km_per_liter * LITERS_PER_GALLON_IMPERIAL / KM_PER_MILE
}

/// Convert km/l to MPG (imperial flag determines which gallon)
pub fn km_per_liter_to_mpg(km_per_liter: f64, imperial: bool) -> f64 {
    if imperial {
        km_per_liter_to_mpg_imperial(km_per_liter)
    } else {
        km_per_liter_to_mpg_us(km_per_liter)
    }
}

/// Money spent per km driven, `None` when no distance was covered
pub fn cost_per_km(total_cost: f64, km: f64) -> Option<f64> {
    (km > 0.0).then(|| total_cost / km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        assert_eq!(average_km_per_liter(450.0, 45.0), Some(10.0));
        assert_eq!(average_km_per_liter(0.0, 45.0), None);
        assert_eq!(average_km_per_liter(450.0, 0.0), None);
        assert_eq!(average_km_per_liter(-10.0, 5.0), None);
        assert_eq!(average_km_per_liter(f64::NAN, 5.0), None);
    }

    #[test]
    fn test_liters_per_100km() {
        assert!((km_per_liter_to_liters_per_100km(10.0) - 10.0).abs() < 0.0001);
        assert!((km_per_liter_to_liters_per_100km(12.5) - 8.0).abs() < 0.0001);
        assert!((liters_per_100km_to_km_per_liter(8.0) - 12.5).abs() < 0.0001);
    }

    #[test]
    fn test_mpg() {
        assert!((km_per_liter_to_mpg_us(10.0) - 23.52).abs() < 0.01);
        assert!((km_per_liter_to_mpg_imperial(10.0) - 28.25).abs() < 0.01);
        assert_eq!(km_per_liter_to_mpg(10.0, false), km_per_liter_to_mpg_us(10.0));
    }

    #[test]
    fn test_cost_per_km() {
        assert_eq!(cost_per_km(300.0, 600.0), Some(0.5));
        assert_eq!(cost_per_km(300.0, 0.0), None);
    }
}
