use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ReviewError;

pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 200;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCriterion {
    pub id: String,          // Stable id, "custom-<uuid>" for interviewer-added criteria
    pub name: String,        // Short label shown on the card
    pub description: String, // What the criterion evaluates
    pub rating: u8,          // 0 = not rated yet, otherwise 1-5
    pub comment: String,     // Free-text feedback
    #[serde(default)]
    pub is_custom: bool,     // Added by the interviewer rather than built in
}

impl ReviewCriterion {
    fn builtin(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            rating: 0,
            comment: String::new(),
            is_custom: false,
        }
    }

    /// Builds an unrated custom criterion from a validated draft.
    pub fn custom(draft: &CriterionDraft) -> Result<Self, ReviewError> {
        let (name, description) = draft.validate()?;
        Ok(Self {
            id: format!("custom-{}", Uuid::new_v4()),
            name,
            description,
            rating: 0,
            comment: String::new(),
            is_custom: true,
        })
    }

    /// Applies an edit draft. Built-in criteria keep their name.
    pub fn edited(&self, draft: &CriterionDraft) -> Result<Self, ReviewError> {
        let draft = if self.is_custom {
            draft.clone()
        } else {
            CriterionDraft::new(&self.name, &draft.description)
        };
        let (name, description) = draft.validate()?;
        Ok(Self {
            name,
            description,
            ..self.clone()
        })
    }

    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }
}

/// The criteria every review starts from.
pub fn default_criteria() -> Vec<ReviewCriterion> {
    vec![
        ReviewCriterion::builtin(
            "technical-knowledge",
            "Technical Knowledge",
            "Understanding of core concepts, frameworks, and best practices relevant to the role",
        ),
        ReviewCriterion::builtin(
            "communication-clarity",
            "Communication Clarity",
            "Ability to explain concepts clearly, listen actively, and articulate thoughts effectively",
        ),
        ReviewCriterion::builtin(
            "problem-solving",
            "Problem-Solving Ability",
            "Approach to handling challenges, analytical thinking, and solution-oriented mindset",
        ),
        ReviewCriterion::builtin(
            "professional-attitude",
            "Professional Attitude",
            "Punctuality, politeness, interest in the role, and overall professional demeanor",
        ),
        ReviewCriterion::builtin(
            "cultural-fit",
            "Cultural Fit",
            "Alignment with team values, collaboration style, and organizational culture",
        ),
        ReviewCriterion::builtin(
            "experience-relevance",
            "Experience Relevance",
            "How well past experience aligns with job requirements and responsibilities",
        ),
    ]
}

/// Name/description as typed into the add and edit dialogs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriterionDraft {
    pub name: String,
    pub description: String,
}

impl CriterionDraft {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    pub fn from_criterion(criterion: &ReviewCriterion) -> Self {
        Self::new(&criterion.name, &criterion.description)
    }

    /// Whether the submit button should be enabled.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Returns the trimmed name and description.
    pub fn validate(&self) -> Result<(String, String), ReviewError> {
        let name = self.name.trim();
        let description = self.description.trim();
        if name.is_empty() {
            return Err(ReviewError::EmptyName);
        }
        if description.is_empty() {
            return Err(ReviewError::EmptyDescription);
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(ReviewError::NameTooLong { max: NAME_MAX_LEN });
        }
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(ReviewError::DescriptionTooLong {
                max: DESCRIPTION_MAX_LEN,
            });
        }
        Ok((name.to_string(), description.to_string()))
    }
}
