//! Weight to colour/opacity encoding.
//!
//! Positive weights are green, negative weights red. Intensity follows a
//! sub-linear power curve so small weights stay visible next to large ones.

use std::fmt;

use crate::model::FeatureWeight;
use crate::weights::nonzero_range;

/// Lightness of the most intense colour in weight tables.
pub const DEFAULT_MIN_LIGHTNESS: f64 = 0.8;

/// Lightness of the most intense colour in highlighted documents.
pub const SPAN_MIN_LIGHTNESS: f64 = 0.6;

const MIN_OPACITY: f64 = 0.8;
const INTENSITY_EXPONENT: f64 = 0.7;

/// An HSL colour; saturation and lightness are fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    /// CSS form, e.g. `hsl(120, 100.00%, 80.00%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {:.2}%, {:.2}%)",
            self.hue,
            self.saturation * 100.0,
            self.lightness * 100.0
        )
    }
}

/// Which side of a weight table a colour is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn unit(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Hue for a weight: 120 (green) for positive, 0 (red) otherwise.
pub fn hue(weight: f64) -> u16 {
    if weight > 0.0 { 120 } else { 0 }
}

/// Colour for `weight`, where `weight_range` is the largest absolute weight.
///
/// `weight_range` must be non-zero; see [`crate::weights::nonzero_range`].
pub fn weight_color_hsl(weight: f64, weight_range: f64, min_lightness: f64) -> Hsl {
    let rel_weight = (weight.abs() / weight_range).powf(INTENSITY_EXPONENT);
    Hsl {
        hue: hue(weight),
        saturation: 1.0,
        lightness: 1.0 - (1.0 - min_lightness) * rel_weight,
    }
}

/// Opacity for `weight`, between 0.8 and 1.
pub fn weight_opacity(weight: f64, weight_range: f64) -> f64 {
    MIN_OPACITY + (1.0 - MIN_OPACITY) * (weight.abs() / weight_range)
}

/// Opacity formatted for a CSS `opacity` property.
pub fn format_opacity(weight: f64, weight_range: f64) -> String {
    format!("{:.2}", weight_opacity(weight, weight_range))
}

/// Colour of the "N more ..." row of a weight table.
///
/// `shown` are the weights displayed above the row. With nothing shown the
/// most intense colour of that sign is used; otherwise the least extreme
/// shown weight marks the boundary of the elided ones.
pub fn remaining_weight_color_hsl(shown: &[FeatureWeight], weight_range: f64, sign: Sign) -> Hsl {
    let boundary = shown
        .iter()
        .map(|fw| fw.weight)
        .min_by(|a, b| a.abs().total_cmp(&b.abs()));
    let (weight, weight_range) = match boundary {
        Some(weight) => (weight, nonzero_range(weight_range)),
        None if weight_range == 0.0 => (sign.unit(), 1.0),
        None => (sign.unit() * weight_range, weight_range),
    };
    weight_color_hsl(weight, weight_range, DEFAULT_MIN_LIGHTNESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_weight_is_lightest() {
        let color = weight_color_hsl(0.0, 1.0, DEFAULT_MIN_LIGHTNESS);
        assert_eq!(color.hue, 0);
        assert_eq!(color.lightness, 1.0);
    }

    #[test]
    fn test_full_weight_hits_min_lightness() {
        let pos = weight_color_hsl(2.0, 2.0, DEFAULT_MIN_LIGHTNESS);
        assert_eq!(pos.hue, 120);
        assert!((pos.lightness - 0.8).abs() < 1e-12);

        let neg = weight_color_hsl(-2.0, 2.0, DEFAULT_MIN_LIGHTNESS);
        assert_eq!(neg.hue, 0);
        assert!((neg.lightness - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_intensity_is_sublinear() {
        let half = weight_color_hsl(0.5, 1.0, 0.0);
        // 1 - 0.5^0.7
        assert!((half.lightness - (1.0 - 0.5f64.powf(0.7))).abs() < 1e-12);
        assert!(half.lightness < 0.5);
    }

    #[test]
    fn test_hsl_display() {
        let color = weight_color_hsl(1.0, 1.0, DEFAULT_MIN_LIGHTNESS);
        assert_eq!(color.to_string(), "hsl(120, 100.00%, 80.00%)");
        let white = weight_color_hsl(0.0, 1.0, DEFAULT_MIN_LIGHTNESS);
        assert_eq!(white.to_string(), "hsl(0, 100.00%, 100.00%)");
    }

    #[test]
    fn test_opacity() {
        assert_eq!(format_opacity(0.0, 2.0), "0.80");
        assert_eq!(format_opacity(-2.0, 2.0), "1.00");
        assert_eq!(format_opacity(1.0, 2.0), "0.90");
    }

    #[test]
    fn test_remaining_color_without_weights_or_range() {
        assert_eq!(
            remaining_weight_color_hsl(&[], 0.0, Sign::Positive),
            weight_color_hsl(1.0, 1.0, DEFAULT_MIN_LIGHTNESS)
        );
        assert_eq!(
            remaining_weight_color_hsl(&[], 0.0, Sign::Negative),
            weight_color_hsl(-1.0, 1.0, DEFAULT_MIN_LIGHTNESS)
        );
    }

    #[test]
    fn test_remaining_color_without_weights_uses_full_range() {
        assert_eq!(
            remaining_weight_color_hsl(&[], 3.0, Sign::Negative),
            weight_color_hsl(-3.0, 3.0, DEFAULT_MIN_LIGHTNESS)
        );
    }

    #[test]
    fn test_remaining_color_uses_least_extreme_weight() {
        let shown = vec![
            FeatureWeight::new("a", -4.0),
            FeatureWeight::new("b", -0.5),
            FeatureWeight::new("c", -2.0),
        ];
        assert_eq!(
            remaining_weight_color_hsl(&shown, 4.0, Sign::Negative),
            weight_color_hsl(-0.5, 4.0, DEFAULT_MIN_LIGHTNESS)
        );
    }
}
