pub mod engine;
pub mod schema;
pub mod scorer;

pub use crate::domain::model::{Questionnaire, ScoreReport, SubmissionPayload, SurveyRecord};
pub use crate::domain::ports::{CompletionStore, InterestTagStore, SurveyStore};
pub use crate::utils::error::Result;
