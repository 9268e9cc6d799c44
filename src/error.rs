use thiserror::Error;

/// Everything that can go wrong while editing or saving a review.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("criteria name is required")]
    EmptyName,

    #[error("criteria description is required")]
    EmptyDescription,

    #[error("criteria name is longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("criteria description is longer than {max} characters")]
    DescriptionTooLong { max: usize },

    #[error("rating {0} is outside 1-5")]
    RatingOutOfRange(u8),

    #[error("no criterion with id {0}")]
    UnknownCriterion(String),

    #[error("a criterion with id {0} already exists")]
    DuplicateCriterion(String),

    #[error("default criterion {0} cannot be removed")]
    NotRemovable(String),

    #[error("failed to encode review: {0}")]
    Encode(String),

    #[error("failed to submit review: {0}")]
    Submit(String),
}

impl From<serde_json::Error> for ReviewError {
    fn from(err: serde_json::Error) -> Self {
        ReviewError::Encode(err.to_string())
    }
}
