use interest_survey::core::schema;
use interest_survey::core::CompletionStore;
use interest_survey::{
    Classification, LocalCompletionStore, LocalInterestTagStore, LocalSurveyStore,
    SubmissionPayload, SurveyEngine,
};
use std::collections::HashMap;
use tempfile::TempDir;

fn payload(level_label: &str) -> SubmissionPayload {
    let answers: HashMap<String, String> = schema::QUESTIONS
        .iter()
        .map(|q| (q.id.to_string(), level_label.to_string()))
        .collect();
    SubmissionPayload {
        fullname: "Katherine Johnson".to_string(),
        email: "katherine@example.com".to_string(),
        department: None,
        date: None,
        answers,
    }
}

#[tokio::test]
async fn submissions_persist_across_store_instances() {
    let dir = TempDir::new().unwrap();
    let base = dir.path();

    let engine = SurveyEngine::new(
        LocalSurveyStore::new(base),
        LocalCompletionStore::new(base),
        LocalInterestTagStore::new(base),
    );

    let outcome = engine.submit(501, &payload("Intermediate")).await.unwrap();
    assert_eq!(outcome.report.total_score, 30);
    assert_eq!(outcome.report.classification, Classification::Intermediate);
    assert!(outcome.tag_added);

    // Fresh handles over the same directory see the persisted state.
    let store = LocalSurveyStore::new(base);
    let records = store.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].userid, 501);
    assert_eq!(records[0].totalscore, 30);
    assert_eq!(records[0].classification, Classification::Intermediate);
    let category_scores: serde_json::Value =
        serde_json::from_str(&records[0].category_scores).unwrap();
    assert_eq!(category_scores["Information & Digital Literacy"], 6);

    let completion = LocalCompletionStore::new(base);
    assert!(completion.has_completed(501).await.unwrap());
    assert!(!completion.has_completed(502).await.unwrap());

    let tags = LocalInterestTagStore::new(base);
    assert_eq!(
        tags.tags_for(501).unwrap(),
        vec!["Digital Skills: Intermediate".to_string()]
    );
}

#[tokio::test]
async fn records_append_per_submission() {
    let dir = TempDir::new().unwrap();
    let base = dir.path();

    let engine = SurveyEngine::new(
        LocalSurveyStore::new(base),
        LocalCompletionStore::new(base),
        LocalInterestTagStore::new(base),
    );

    engine.submit(601, &payload("Foundational")).await.unwrap();
    engine.submit(602, &payload("Advanced")).await.unwrap();

    let records = LocalSurveyStore::new(base).records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].userid, 601);
    assert_eq!(records[0].totalscore, 15);
    assert_eq!(records[1].userid, 602);
    assert_eq!(records[1].totalscore, 45);
}
