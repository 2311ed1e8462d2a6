use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::utils::error::Result;

/// Lowest and highest possible total scores for a full questionnaire
/// (15 questions, answer values 1..=4).
pub const MIN_TOTAL_SCORE: u32 = 15;
pub const MAX_TOTAL_SCORE: u32 = 60;

/// One of four ordinal self-assessment levels per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerLevel {
    Foundational,
    Intermediate,
    Advanced,
    #[serde(rename = "Highly Specialised")]
    HighlySpecialised,
}

impl AnswerLevel {
    /// Numeric score contributed by this level.
    pub const fn value(self) -> u32 {
        match self {
            AnswerLevel::Foundational => 1,
            AnswerLevel::Intermediate => 2,
            AnswerLevel::Advanced => 3,
            AnswerLevel::HighlySpecialised => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AnswerLevel::Foundational => "Foundational",
            AnswerLevel::Intermediate => "Intermediate",
            AnswerLevel::Advanced => "Advanced",
            AnswerLevel::HighlySpecialised => "Highly Specialised",
        }
    }

    /// Parses the exact label string used on the wire. Unknown labels return
    /// `None`; the schema layer decides how to handle them.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Foundational" => Some(AnswerLevel::Foundational),
            "Intermediate" => Some(AnswerLevel::Intermediate),
            "Advanced" => Some(AnswerLevel::Advanced),
            "Highly Specialised" => Some(AnswerLevel::HighlySpecialised),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall competency tier derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Foundational,
    Intermediate,
    Advanced,
    #[serde(rename = "Highly Specialised")]
    HighlySpecialised,
}

impl Classification {
    /// Classifies a total score by inclusive upper thresholds over [15, 60].
    pub const fn from_total(total: u32) -> Self {
        if total <= 25 {
            Classification::Foundational
        } else if total <= 40 {
            Classification::Intermediate
        } else if total <= 52 {
            Classification::Advanced
        } else {
            Classification::HighlySpecialised
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Classification::Foundational => "Foundational",
            Classification::Intermediate => "Intermediate",
            Classification::Advanced => "Advanced",
            Classification::HighlySpecialised => "Highly Specialised",
        }
    }

    /// Fixed recommendation sentence for this tier.
    pub const fn recommendation(self) -> &'static str {
        match self {
            Classification::Foundational => "Enroll in Digital Skills Foundation Course",
            Classification::Intermediate => "Continue with Intermediate Learning Path",
            Classification::Advanced => "Eligible for Advanced Digital Skills Certification",
            Classification::HighlySpecialised => "Consider applying as a Digital Skills Mentor",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The full set of answered questions for one submission. Question ids not
/// present answer as `Foundational` (documented fallback, not an error).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Questionnaire {
    answers: HashMap<String, AnswerLevel>,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, question_id: impl Into<String>, level: AnswerLevel) {
        self.answers.insert(question_id.into(), level);
    }

    pub fn answer_for(&self, question_id: &str) -> AnswerLevel {
        self.answers
            .get(question_id)
            .copied()
            .unwrap_or(AnswerLevel::Foundational)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}

/// Subtotal for one category, in category-definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: &'static str,
    pub score: u32,
}

/// Result of scoring one questionnaire. Immutable after creation.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub total_score: u32,
    pub category_scores: Vec<CategoryScore>,
    pub classification: Classification,
    pub recommendation: &'static str,
}

impl ScoreReport {
    /// Category subtotals as a JSON object, keys in category-definition order.
    pub fn category_scores_json(&self) -> Result<String> {
        let mut map = serde_json::Map::with_capacity(self.category_scores.len());
        for entry in &self.category_scores {
            map.insert(entry.category.to_string(), entry.score.into());
        }
        Ok(serde_json::to_string(&map)?)
    }

    pub fn score_line(&self) -> String {
        format!("Your Total Score: {} / {}", self.total_score, MAX_TOTAL_SCORE)
    }

    pub fn classification_line(&self) -> String {
        format!("Your Classification: {}", self.classification)
    }

    pub fn recommendation_line(&self) -> String {
        format!("Recommended Next Step: {}", self.recommendation)
    }
}

/// Raw submitted form payload. The `q1`..`q15` answer fields arrive as label
/// strings in the flattened map, so the payload round-trips from the form
/// encodings hosts typically hand over as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub fullname: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub answers: HashMap<String, String>,
}

/// Validated learner info carried alongside the questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Respondent {
    pub fullname: String,
    pub email: String,
    pub department: Option<String>,
    pub date: DateTime<Utc>,
}

/// A parsed and validated submission, ready for scoring.
#[derive(Debug, Clone)]
pub struct Submission {
    pub respondent: Respondent,
    pub questionnaire: Questionnaire,
}

/// Record handed to the persistence collaborator after scoring.
/// `category_scores` holds the JSON-serialized mapping of category name to
/// subtotal, in category-definition order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub userid: i64,
    pub fullname: String,
    pub email: String,
    pub department: Option<String>,
    pub date: DateTime<Utc>,
    pub totalscore: u32,
    pub classification: Classification,
    pub category_scores: String,
    pub timecreated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_level_values_are_ordinal() {
        assert_eq!(AnswerLevel::Foundational.value(), 1);
        assert_eq!(AnswerLevel::Intermediate.value(), 2);
        assert_eq!(AnswerLevel::Advanced.value(), 3);
        assert_eq!(AnswerLevel::HighlySpecialised.value(), 4);
        assert!(AnswerLevel::Foundational < AnswerLevel::HighlySpecialised);
    }

    #[test]
    fn answer_level_label_round_trip() {
        for level in [
            AnswerLevel::Foundational,
            AnswerLevel::Intermediate,
            AnswerLevel::Advanced,
            AnswerLevel::HighlySpecialised,
        ] {
            assert_eq!(AnswerLevel::from_label(level.label()), Some(level));
        }
        assert_eq!(AnswerLevel::from_label("Expert"), None);
        assert_eq!(AnswerLevel::from_label(""), None);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(Classification::from_total(15), Classification::Foundational);
        assert_eq!(Classification::from_total(25), Classification::Foundational);
        assert_eq!(Classification::from_total(26), Classification::Intermediate);
        assert_eq!(Classification::from_total(40), Classification::Intermediate);
        assert_eq!(Classification::from_total(41), Classification::Advanced);
        assert_eq!(Classification::from_total(52), Classification::Advanced);
        assert_eq!(Classification::from_total(53), Classification::HighlySpecialised);
        assert_eq!(Classification::from_total(60), Classification::HighlySpecialised);
    }

    #[test]
    fn recommendation_is_total_and_fixed() {
        assert_eq!(
            Classification::Foundational.recommendation(),
            "Enroll in Digital Skills Foundation Course"
        );
        assert_eq!(
            Classification::Intermediate.recommendation(),
            "Continue with Intermediate Learning Path"
        );
        assert_eq!(
            Classification::Advanced.recommendation(),
            "Eligible for Advanced Digital Skills Certification"
        );
        assert_eq!(
            Classification::HighlySpecialised.recommendation(),
            "Consider applying as a Digital Skills Mentor"
        );
    }

    #[test]
    fn questionnaire_defaults_missing_answers() {
        let mut questionnaire = Questionnaire::new();
        questionnaire.set("q1", AnswerLevel::Advanced);
        assert_eq!(questionnaire.answer_for("q1"), AnswerLevel::Advanced);
        assert_eq!(questionnaire.answer_for("q2"), AnswerLevel::Foundational);
    }

    #[test]
    fn classification_serializes_as_label() {
        let json = serde_json::to_string(&Classification::HighlySpecialised).unwrap();
        assert_eq!(json, "\"Highly Specialised\"");
        let back: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Classification::HighlySpecialised);
    }
}
