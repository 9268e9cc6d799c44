//! Star rating scale and the colour tiers used to paint it.

use crate::error::ReviewError;

pub const MAX_RATING: u8 = 5;

/// Colour band a single star is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Excellent,
    Good,
    Average,
    Poor,
    Inactive,
}

impl RatingTier {
    /// Tier for star number `star` (1-based) when the control shows `rating`.
    /// Lit stars share the tier of the whole rating, not of their own position.
    pub fn for_star(star: u8, rating: f64) -> Self {
        if f64::from(star) > rating {
            return RatingTier::Inactive;
        }
        if rating >= 4.5 {
            RatingTier::Excellent
        } else if rating >= 3.5 {
            RatingTier::Good
        } else if rating >= 2.5 {
            RatingTier::Average
        } else {
            RatingTier::Poor
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RatingTier::Excellent => "star rating-excellent",
            RatingTier::Good => "star rating-good",
            RatingTier::Average => "star rating-average",
            RatingTier::Poor => "star rating-poor",
            RatingTier::Inactive => "star rating-inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl StarSize {
    pub fn css_class(self) -> &'static str {
        match self {
            StarSize::Sm => "stars-sm",
            StarSize::Md => "stars-md",
            StarSize::Lg => "stars-lg",
        }
    }
}

/// Only whole stars 1-5 can be given; 0 means "not rated" and is never set by hand.
pub fn validate_rating(rating: u8) -> Result<u8, ReviewError> {
    if (1..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(ReviewError::RatingOutOfRange(rating))
    }
}

/// Renders a rating the way a person writes it: `4`, `3.5`.
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{}", rating as i64)
    } else {
        format!("{:.1}", rating)
    }
}

pub fn rating_caption(rating: f64) -> String {
    if rating > 0.0 {
        format!("{}/{}", format_rating(rating), MAX_RATING)
    } else {
        "Not rated".to_string()
    }
}
