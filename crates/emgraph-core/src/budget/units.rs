//! Mass units.

use std::fmt;

use serde::Serialize;

/// Scale of a mass value, as named by the model's measurement scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Milligram,
    Tonne,
    /// A scale name that is not a known mass unit.
    Other(String),
}

impl MassUnit {
    pub fn from_scale_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "kilogram" | "kg" => MassUnit::Kilogram,
            "gram" | "g" => MassUnit::Gram,
            "milligram" | "mg" => MassUnit::Milligram,
            "tonne" | "t" | "metric ton" => MassUnit::Tonne,
            _ => MassUnit::Other(name.to_string()),
        }
    }

    /// Convert `value` to kilograms. Unknown units pass through unchanged;
    /// check [`is_known`](MassUnit::is_known) to tell them apart.
    pub fn to_kilograms(&self, value: f64) -> f64 {
        match self {
            MassUnit::Kilogram | MassUnit::Other(_) => value,
            MassUnit::Gram => value / 1e3,
            MassUnit::Milligram => value / 1e6,
            MassUnit::Tonne => value * 1e3,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, MassUnit::Other(_))
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassUnit::Kilogram => f.write_str("kilogram"),
            MassUnit::Gram => f.write_str("gram"),
            MassUnit::Milligram => f.write_str("milligram"),
            MassUnit::Tonne => f.write_str("tonne"),
            MassUnit::Other(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(MassUnit::from_scale_name("gram").to_kilograms(2400.0), 2.4);
        assert_eq!(MassUnit::from_scale_name("tonne").to_kilograms(1.0), 1000.0);
        assert_eq!(MassUnit::from_scale_name("milligram").to_kilograms(5e6), 5.0);
        assert_eq!(MassUnit::from_scale_name("Kilogram").to_kilograms(3.0), 3.0);
        assert!(MassUnit::Tonne.is_known());
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        let unit = MassUnit::from_scale_name("pound");
        assert!(!unit.is_known());
        assert_eq!(unit.to_kilograms(7.0), 7.0);
        assert_eq!(unit.to_string(), "pound");
    }
}
