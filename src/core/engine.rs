//! Submission engine: parse, score, persist, mark completed, tag.

use chrono::Utc;

use crate::core::{schema, scorer};
use crate::domain::model::{Classification, ScoreReport, SubmissionPayload, SurveyRecord};
use crate::domain::ports::{CompletionStore, InterestTagStore, SurveyStore};
use crate::utils::error::Result;

/// Interest tag written to the user profile on completion.
pub fn interest_tag(classification: Classification) -> String {
    format!("Digital Skills: {}", classification)
}

/// Outcome of one accepted submission.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub report: ScoreReport,
    pub record: SurveyRecord,
    /// Whether the interest tag was newly added (false when the user already
    /// carried it from an earlier submission).
    pub tag_added: bool,
}

impl SubmissionOutcome {
    /// Presentation lines for the host's results page.
    pub fn summary(&self) -> Vec<String> {
        vec![
            self.report.score_line(),
            self.report.classification_line(),
            self.report.recommendation_line(),
        ]
    }
}

/// Drives the survey flow against the injected collaborators. Stateless:
/// concurrent submissions from different users are independent.
pub struct SurveyEngine<S, C, T> {
    store: S,
    completion: C,
    tags: T,
}

impl<S, C, T> SurveyEngine<S, C, T>
where
    S: SurveyStore,
    C: CompletionStore,
    T: InterestTagStore,
{
    pub fn new(store: S, completion: C, tags: T) -> Self {
        Self {
            store,
            completion,
            tags,
        }
    }

    /// Whether the questionnaire should be suppressed for this user.
    pub async fn has_completed(&self, userid: i64) -> Result<bool> {
        self.completion.has_completed(userid).await
    }

    /// Scores a submitted payload and persists the results.
    ///
    /// The completed flag and the interest tag are written only after the
    /// record insert succeeds.
    pub async fn submit(
        &self,
        userid: i64,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionOutcome> {
        let now = Utc::now();

        let submission = schema::parse_submission(payload, now)?;
        let report = scorer::score(&submission.questionnaire);
        tracing::info!(
            userid,
            total_score = report.total_score,
            classification = report.classification.label(),
            "questionnaire scored"
        );

        let record = SurveyRecord {
            userid,
            fullname: submission.respondent.fullname,
            email: submission.respondent.email,
            department: submission.respondent.department,
            date: submission.respondent.date,
            totalscore: report.total_score,
            classification: report.classification,
            category_scores: report.category_scores_json()?,
            timecreated: now,
        };
        self.store.insert(&record).await?;
        tracing::debug!(userid, "survey record persisted");

        self.completion.mark_completed(userid).await?;

        let tag = interest_tag(report.classification);
        let tag_added = self.tags.add_interest_if_absent(userid, &tag).await?;
        tracing::info!(userid, tag = %tag, tag_added, "submission completed");

        Ok(SubmissionOutcome {
            report,
            record,
            tag_added,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interest_tag_includes_classification_label() {
        assert_eq!(
            interest_tag(Classification::Advanced),
            "Digital Skills: Advanced"
        );
        assert_eq!(
            interest_tag(Classification::HighlySpecialised),
            "Digital Skills: Highly Specialised"
        );
    }
}
