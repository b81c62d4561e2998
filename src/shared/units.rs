//! Längeneinheiten und Parsen getippter Längen (z.B. "2.5", "250mm", "3'").

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Zahl (Punkt oder Komma als Dezimaltrenner) plus optionale Einheit.
static LENGTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*([+-]?(?:\d+(?:[.,]\d*)?|[.,]\d+))\s*(mm|cm|m|in|"|ft|')?\s*$"#)
        .expect("gültiges Regex-Muster")
});

/// Längeneinheit des Modells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeter
    Millimeter,
    /// Zentimeter
    Centimeter,
    /// Meter
    #[default]
    Meter,
    /// Zoll
    Inch,
    /// Fuß
    Foot,
}

impl LengthUnit {
    /// Länge einer Einheit in Metern.
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }

    /// Einheit zu einem Eingabe-Suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "mm" => Some(LengthUnit::Millimeter),
            "cm" => Some(LengthUnit::Centimeter),
            "m" => Some(LengthUnit::Meter),
            "in" | "\"" => Some(LengthUnit::Inch),
            "ft" | "'" => Some(LengthUnit::Foot),
            _ => None,
        }
    }

    /// Rechnet `value` (in `self`) in die Einheit `target` um.
    pub fn convert(self, value: f64, target: LengthUnit) -> f64 {
        value * self.meters() / target.meters()
    }
}

/// Parst eine getippte Länge und rechnet sie in die Modelleinheit um.
///
/// Zahlen ohne Einheit gelten in `model_unit`. `None` bei fehlerhafter Eingabe.
pub fn parse_length(text: &str, model_unit: LengthUnit) -> Option<f64> {
    let caps = LENGTH_PATTERN.captures(text)?;
    let number: f64 = caps.get(1)?.as_str().replace(',', ".").parse().ok()?;
    let unit = match caps.get(2) {
        Some(suffix) => LengthUnit::from_suffix(suffix.as_str())?,
        None => model_unit,
    };
    let value = unit.convert(number, model_unit);
    value.is_finite().then_some(value)
}
