use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ReviewError;
use crate::models::candidate::Candidate;
use crate::models::criterion::ReviewCriterion;
use crate::models::rating::{format_rating, validate_rating, MAX_RATING};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Draft,
    Completed,
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Draft => f.write_str("draft"),
            ReviewStatus::Completed => f.write_str("completed"),
        }
    }
}

/// A saved review of one candidate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    pub candidate_name: String,
    pub candidate_email: String,
    pub position: String,
    pub criteria: Vec<ReviewCriterion>,
    pub overall_rating: f64,
    pub review_date: DateTime<Utc>,
    pub status: ReviewStatus,
}

impl ReviewData {
    /// Snapshots the current criteria. An incomplete review is always a draft.
    pub fn compose(candidate: &Candidate, criteria: &[ReviewCriterion], as_draft: bool) -> Self {
        let status = if as_draft || !is_complete(criteria) {
            ReviewStatus::Draft
        } else {
            ReviewStatus::Completed
        };
        Self {
            candidate_name: candidate.name.clone(),
            candidate_email: candidate.email.clone(),
            position: candidate.position.clone(),
            criteria: criteria.to_vec(),
            overall_rating: overall_rating(criteria),
            review_date: Utc::now(),
            status,
        }
    }
}

pub fn rated_count(criteria: &[ReviewCriterion]) -> usize {
    criteria.iter().filter(|c| c.is_rated()).count()
}

/// Mean of the rated criteria, rounded to one decimal. Unrated ones are ignored.
pub fn overall_rating(criteria: &[ReviewCriterion]) -> f64 {
    let rated: Vec<f64> = criteria
        .iter()
        .filter(|c| c.is_rated())
        .map(|c| f64::from(c.rating))
        .collect();
    if rated.is_empty() {
        return 0.0;
    }
    let mean = rated.iter().sum::<f64>() / rated.len() as f64;
    // Rounds the exact binary value, so 1.15 (stored as 1.1499..) becomes 1.1.
    format!("{:.1}", mean).parse().unwrap_or(mean)
}

pub fn completion_percentage(criteria: &[ReviewCriterion]) -> f64 {
    if criteria.is_empty() {
        return 0.0;
    }
    rated_count(criteria) as f64 / criteria.len() as f64 * 100.0
}

pub fn is_complete(criteria: &[ReviewCriterion]) -> bool {
    !criteria.is_empty() && criteria.iter().all(|c| c.is_rated())
}

/// Footer label: "3.5/5" once anything is rated.
pub fn overall_label(criteria: &[ReviewCriterion]) -> String {
    let overall = overall_rating(criteria);
    if overall > 0.0 {
        format!("{}/{}", format_rating(overall), MAX_RATING)
    } else {
        "Pending".to_string()
    }
}

fn find_mut<'a>(
    criteria: &'a mut [ReviewCriterion],
    id: &str,
) -> Result<&'a mut ReviewCriterion, ReviewError> {
    criteria
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| ReviewError::UnknownCriterion(id.to_string()))
}

pub fn set_rating(criteria: &mut [ReviewCriterion], id: &str, rating: u8) -> Result<(), ReviewError> {
    let rating = validate_rating(rating)?;
    find_mut(criteria, id)?.rating = rating;
    Ok(())
}

pub fn set_comment(criteria: &mut [ReviewCriterion], id: &str, comment: String) -> Result<(), ReviewError> {
    find_mut(criteria, id)?.comment = comment;
    Ok(())
}

pub fn replace_criterion(criteria: &mut [ReviewCriterion], updated: ReviewCriterion) -> Result<(), ReviewError> {
    let slot = find_mut(criteria, &updated.id)?;
    *slot = updated;
    Ok(())
}

pub fn add_custom(criteria: &mut Vec<ReviewCriterion>, criterion: ReviewCriterion) -> Result<(), ReviewError> {
    if criteria.iter().any(|c| c.id == criterion.id) {
        return Err(ReviewError::DuplicateCriterion(criterion.id));
    }
    criteria.push(criterion);
    Ok(())
}

pub fn remove_custom(criteria: &mut Vec<ReviewCriterion>, id: &str) -> Result<ReviewCriterion, ReviewError> {
    let index = criteria
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| ReviewError::UnknownCriterion(id.to_string()))?;
    if !criteria[index].is_custom {
        return Err(ReviewError::NotRemovable(id.to_string()));
    }
    Ok(criteria.remove(index))
}

/// Text for the notice shown after a save attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveFeedback {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl SaveFeedback {
    pub fn for_status(status: ReviewStatus) -> Self {
        let (title, description) = match status {
            ReviewStatus::Draft => (
                "Review saved as draft",
                "You can continue editing this review later",
            ),
            ReviewStatus::Completed => (
                "Review completed",
                "Review has been successfully submitted",
            ),
        };
        Self {
            title: title.to_string(),
            description: description.to_string(),
            destructive: false,
        }
    }

    pub fn failure() -> Self {
        Self {
            title: "Error saving review".to_string(),
            description: "Please try again later".to_string(),
            destructive: true,
        }
    }
}
