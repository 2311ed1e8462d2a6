//! The pure scoring function: category subtotals, total score,
//! classification and recommendation. No side effects, no state.

use crate::domain::model::{CategoryScore, Classification, Questionnaire, ScoreReport};

pub const INFORMATION_DIGITAL_LITERACY: &str = "Information & Digital Literacy";
pub const COMMUNICATION_COLLABORATION: &str = "Communication & Collaboration";
pub const DIGITAL_CONTENT_CREATION: &str = "Digital Content Creation";
pub const SAFETY_SECURITY: &str = "Safety & Security";
pub const PROBLEM_SOLVING: &str = "Problem Solving";
pub const ENTREPRENEURSHIP: &str = "Entrepreneurship";
pub const ATTITUDE_DIGITAL_ENVIRONMENT: &str = "Attitude to Digital Environment";

/// The seven fixed categories and their question ids, in iteration order.
/// Every question id appears in exactly one category and the union covers
/// the full q1..q15 set (checked by tests against the schema).
pub const CATEGORIES: [(&str, &[&str]); 7] = [
    (INFORMATION_DIGITAL_LITERACY, &["q1", "q2", "q3"]),
    (COMMUNICATION_COLLABORATION, &["q4", "q5"]),
    (DIGITAL_CONTENT_CREATION, &["q6", "q7"]),
    (SAFETY_SECURITY, &["q8", "q9", "q10", "q11"]),
    (PROBLEM_SOLVING, &["q12", "q13"]),
    (ENTREPRENEURSHIP, &["q14"]),
    (ATTITUDE_DIGITAL_ENVIRONMENT, &["q15"]),
];

/// Scores a questionnaire. Absent answers count as `Foundational` (1), so
/// this never fails; the total always lands in [15, 60] and equals the sum
/// of the category subtotals.
pub fn score(questionnaire: &Questionnaire) -> ScoreReport {
    let mut total_score = 0;
    let mut category_scores = Vec::with_capacity(CATEGORIES.len());

    for (category, questions) in CATEGORIES {
        let subtotal: u32 = questions
            .iter()
            .map(|id| questionnaire.answer_for(id).value())
            .sum();
        total_score += subtotal;
        category_scores.push(CategoryScore {
            category,
            score: subtotal,
        });
    }

    let classification = Classification::from_total(total_score);

    ScoreReport {
        total_score,
        category_scores,
        classification,
        recommendation: classification.recommendation(),
    }
}
