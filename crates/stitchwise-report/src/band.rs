//! Rating bands and the score description templates.

use serde::{Deserialize, Serialize};

/// Coarse ethical-rating classification. Drives the score color and emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingBand {
    Poor,
    Average,
    Good,
}

impl RatingBand {
    /// Band thresholds: >= 7 Good, >= 4 Average, else Poor.
    /// Ratings are not clamped to [0, 10]; out-of-range values band by the
    /// same inequalities.
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 7.0 {
            RatingBand::Good
        } else if rating >= 4.0 {
            RatingBand::Average
        } else {
            RatingBand::Poor
        }
    }

    /// Fixed color token, used for the score ring stroke and score label.
    pub fn color(&self) -> &'static str {
        match self {
            RatingBand::Good => "#22c55e",
            RatingBand::Average => "#eab308",
            RatingBand::Poor => "#ef4444",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RatingBand::Good => "\u{1F603}",    // 😃
            RatingBand::Average => "\u{1F610}", // 😐
            RatingBand::Poor => "\u{1F61E}",    // 😞
        }
    }
}

/// Brand-interpolated score explanation.
///
/// The thresholds here (>= 8, >= 6, >= 4) are independent of the band
/// thresholds above: a 6 is still in the Average band but already earns the
/// "moderately good" sentence.
pub fn score_description(rating: f64, brand: &str) -> String {
    if rating >= 8.0 {
        format!("{brand} is highly transparent and ethical.")
    } else if rating >= 6.0 {
        format!("{brand} does a moderately good job at ethical transparency.")
    } else if rating >= 4.0 {
        format!("{brand} has some transparency but needs improvement.")
    } else {
        format!("{brand} lacks ethical transparency and may have questionable practices.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RatingBand::for_rating(7.0), RatingBand::Good);
        assert_eq!(RatingBand::for_rating(6.999), RatingBand::Average);
        assert_eq!(RatingBand::for_rating(4.0), RatingBand::Average);
        assert_eq!(RatingBand::for_rating(3.9), RatingBand::Poor);
        assert_eq!(RatingBand::for_rating(0.0), RatingBand::Poor);
    }

    #[test]
    fn test_band_is_not_clamped() {
        assert_eq!(RatingBand::for_rating(15.0), RatingBand::Good);
        assert_eq!(RatingBand::for_rating(-3.0), RatingBand::Poor);
    }

    #[test]
    fn test_description_thresholds_independent_of_band() {
        // 8 and 7 share a band but not a sentence.
        assert!(score_description(8.0, "Acme").contains("highly transparent"));
        assert!(score_description(7.0, "Acme").contains("moderately good"));
        // 6 is still Average-band but already "moderately good".
        assert_eq!(RatingBand::for_rating(6.0), RatingBand::Average);
        assert!(score_description(6.0, "Acme").contains("moderately good"));
        assert!(score_description(4.0, "Acme").contains("some transparency"));
        assert!(score_description(3.9, "Acme").contains("lacks ethical transparency"));
    }

    #[test]
    fn test_description_interpolates_brand() {
        assert_eq!(
            score_description(9.0, "Acme"),
            "Acme is highly transparent and ethical."
        );
        assert_eq!(
            score_description(1.0, "This brand"),
            "This brand lacks ethical transparency and may have questionable practices."
        );
    }
}
