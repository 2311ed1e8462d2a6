pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::local::{LocalCompletionStore, LocalInterestTagStore, LocalSurveyStore};
pub use crate::adapters::memory::{
    MemoryCompletionStore, MemoryInterestTagStore, MemorySurveyStore,
};
pub use crate::core::engine::{interest_tag, SubmissionOutcome, SurveyEngine};
pub use crate::core::scorer::score;
pub use crate::domain::model::{
    AnswerLevel, Classification, Questionnaire, ScoreReport, SubmissionPayload, SurveyRecord,
};
pub use crate::utils::error::{Result, SurveyError};
