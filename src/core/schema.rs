//! Static question schema and submission parsing.
//!
//! The questionnaire is a fixed, ordered list of question descriptors. A
//! submitted payload is validated against it in a step separate from the
//! pure scorer.

use chrono::{DateTime, Utc};

use crate::core::scorer;
use crate::domain::model::{AnswerLevel, Questionnaire, Respondent, Submission, SubmissionPayload};
use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_non_empty_string};

#[derive(Debug, Clone, Copy)]
pub struct QuestionDescriptor {
    pub id: &'static str,
    pub prompt: &'static str,
    pub category: &'static str,
}

/// The fixed 15-question schema, in presentation order. Non-extensible in
/// this version.
pub const QUESTIONS: [QuestionDescriptor; 15] = [
    QuestionDescriptor {
        id: "q1",
        prompt: "I can identify my information needs and find data/content through a simple search.",
        category: scorer::INFORMATION_DIGITAL_LITERACY,
    },
    QuestionDescriptor {
        id: "q2",
        prompt: "I know how to use a search engine effectively using personal strategies.",
        category: scorer::INFORMATION_DIGITAL_LITERACY,
    },
    QuestionDescriptor {
        id: "q3",
        prompt: "I know how to manage and organize emails effectively.",
        category: scorer::INFORMATION_DIGITAL_LITERACY,
    },
    QuestionDescriptor {
        id: "q4",
        prompt: "I can select appropriate digital communication tools for a given context.",
        category: scorer::COMMUNICATION_COLLABORATION,
    },
    QuestionDescriptor {
        id: "q5",
        prompt: "I know how to exercise proper behavioural norms when using digital technologies.",
        category: scorer::COMMUNICATION_COLLABORATION,
    },
    QuestionDescriptor {
        id: "q6",
        prompt: "I can create and edit digital text files (Word, Google Docs, etc.).",
        category: scorer::DIGITAL_CONTENT_CREATION,
    },
    QuestionDescriptor {
        id: "q7",
        prompt: "I can use online learning tools to improve my digital skills.",
        category: scorer::DIGITAL_CONTENT_CREATION,
    },
    QuestionDescriptor {
        id: "q8",
        prompt: "I can check if a website is secure before providing personal data.",
        category: scorer::SAFETY_SECURITY,
    },
    QuestionDescriptor {
        id: "q9",
        prompt: "I can protect my devices and content from risks and threats.",
        category: scorer::SAFETY_SECURITY,
    },
    QuestionDescriptor {
        id: "q10",
        prompt: "I know how to avoid health risks related to digital technology use.",
        category: scorer::SAFETY_SECURITY,
    },
    QuestionDescriptor {
        id: "q11",
        prompt: "I know how to stay safe when making online purchases.",
        category: scorer::SAFETY_SECURITY,
    },
    QuestionDescriptor {
        id: "q12",
        prompt: "When I face a technical problem, I can find solutions online.",
        category: scorer::PROBLEM_SOLVING,
    },
    QuestionDescriptor {
        id: "q13",
        prompt: "I can troubleshoot basic hardware issues.",
        category: scorer::PROBLEM_SOLVING,
    },
    QuestionDescriptor {
        id: "q14",
        prompt: "I am capable of creating a business out of my digital skills.",
        category: scorer::ENTREPRENEURSHIP,
    },
    QuestionDescriptor {
        id: "q15",
        prompt: "I am comfortable using technology to access services.",
        category: scorer::ATTITUDE_DIGITAL_ENVIRONMENT,
    },
];

/// The four answer options as presented to the learner, lowest first.
pub const ANSWER_OPTIONS: [(AnswerLevel, &str); 4] = [
    (
        AnswerLevel::Foundational,
        "I don't know how to do it – Foundational",
    ),
    (
        AnswerLevel::Intermediate,
        "I can do it with guidance – Intermediate",
    ),
    (
        AnswerLevel::Advanced,
        "I can do it on my own – Advanced",
    ),
    (
        AnswerLevel::HighlySpecialised,
        "I can do it with confidence and guide others – Highly Specialised",
    ),
];

/// Validates learner info and resolves the answer fields into a
/// `Questionnaire`.
///
/// `fullname` and `email` are required; `department` is optional and blank
/// values are treated as absent; `date` falls back to `now`. An absent or
/// unrecognized answer never fails the submission: it is substituted with
/// `Foundational` and logged. That leniency is a deliberate product policy,
/// not a validation gap.
pub fn parse_submission(payload: &SubmissionPayload, now: DateTime<Utc>) -> Result<Submission> {
    validate_non_empty_string("fullname", &payload.fullname)?;
    validate_email("email", &payload.email)?;

    let mut questionnaire = Questionnaire::new();
    for descriptor in &QUESTIONS {
        let level = match payload.answers.get(descriptor.id) {
            Some(raw) => AnswerLevel::from_label(raw).unwrap_or_else(|| {
                tracing::warn!(
                    question = descriptor.id,
                    answer = raw.as_str(),
                    "unrecognized answer level, substituting Foundational"
                );
                AnswerLevel::Foundational
            }),
            None => {
                tracing::warn!(
                    question = descriptor.id,
                    "missing answer, substituting Foundational"
                );
                AnswerLevel::Foundational
            }
        };
        questionnaire.set(descriptor.id, level);
    }

    let respondent = Respondent {
        fullname: payload.fullname.trim().to_string(),
        email: payload.email.trim().to_string(),
        department: payload
            .department
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        date: payload.date.unwrap_or(now),
    };

    Ok(Submission {
        respondent,
        questionnaire,
    })
}
