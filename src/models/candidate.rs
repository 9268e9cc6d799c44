use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::review::ReviewStatus;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateStatus {
    InProgress,
    DraftReview,
    Reviewed,
}

impl CandidateStatus {
    /// Where a candidate lands once a review with `status` has been saved.
    pub fn after_review(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Draft => CandidateStatus::DraftReview,
            ReviewStatus::Completed => CandidateStatus::Reviewed,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            CandidateStatus::InProgress => "badge badge-info",
            CandidateStatus::DraftReview => "badge badge-warning",
            CandidateStatus::Reviewed => "badge badge-success",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CandidateStatus::InProgress => "In Progress",
            CandidateStatus::DraftReview => "Draft Review",
            CandidateStatus::Reviewed => "Reviewed",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub status: CandidateStatus,
    pub interview_date: String, // Display date, e.g. "Jul 25, 2025"
}

impl Candidate {
    /// "Avery Quinn" -> "AQ"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// In-memory candidate list shown on the candidates page.
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "1".into(),
            name: "Avery Quinn".into(),
            email: "avery.quinn@example.com".into(),
            position: "Tech Lead".into(),
            status: CandidateStatus::InProgress,
            interview_date: "Jul 25, 2025".into(),
        },
        Candidate {
            id: "2".into(),
            name: "Jordan Okafor".into(),
            email: "jordan.okafor@example.com".into(),
            position: "Senior Backend & AI Engineer".into(),
            status: CandidateStatus::InProgress,
            interview_date: "Jul 25, 2025".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let mut candidate = sample_candidates().remove(0);
        assert_eq!(candidate.initials(), "AQ");

        candidate.name = "  mary   ann   lee ".into();
        assert_eq!(candidate.initials(), "mal");

        candidate.name = String::new();
        assert_eq!(candidate.initials(), "");
    }

    #[test]
    fn test_status_after_review() {
        assert_eq!(
            CandidateStatus::after_review(ReviewStatus::Draft),
            CandidateStatus::DraftReview
        );
        assert_eq!(
            CandidateStatus::after_review(ReviewStatus::Completed),
            CandidateStatus::Reviewed
        );
        assert_eq!(CandidateStatus::InProgress.to_string(), "In Progress");
    }
}
