//! Filesystem-backed port implementations under a base path. Records are
//! appended as JSON lines; the completion set and tag map live in small JSON
//! files. Suitable for hosts without a database and for integration tests.

use crate::domain::model::SurveyRecord;
use crate::domain::ports::{CompletionStore, InterestTagStore, SurveyStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const RECORDS_FILE: &str = "survey_records.jsonl";
const COMPLETED_FILE: &str = "completed_users.json";
const TAGS_FILE: &str = "interest_tags.json";

fn ensure_base(base_path: &Path) -> Result<()> {
    fs::create_dir_all(base_path)?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct LocalSurveyStore {
    base_path: PathBuf,
}

impl LocalSurveyStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn records_path(&self) -> PathBuf {
        self.base_path.join(RECORDS_FILE)
    }

    /// Reads back all persisted records.
    pub fn records(&self) -> Result<Vec<SurveyRecord>> {
        let path = self.records_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(path)?;
        let mut records = Vec::new();
        for line in contents.lines().filter(|line| !line.trim().is_empty()) {
            records.push(serde_json::from_str(line)?);
        }
        Ok(records)
    }
}

#[async_trait]
impl SurveyStore for LocalSurveyStore {
    async fn insert(&self, record: &SurveyRecord) -> Result<()> {
        ensure_base(&self.base_path)?;
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.records_path())?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalCompletionStore {
    base_path: PathBuf,
}

impl LocalCompletionStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn completed_path(&self) -> PathBuf {
        self.base_path.join(COMPLETED_FILE)
    }

    fn read_set(&self) -> Result<HashSet<i64>> {
        let path = self.completed_path();
        if !path.exists() {
            return Ok(HashSet::new());
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    fn write_set(&self, completed: &HashSet<i64>) -> Result<()> {
        ensure_base(&self.base_path)?;
        fs::write(self.completed_path(), serde_json::to_string(completed)?)?;
        Ok(())
    }
}

#[async_trait]
impl CompletionStore for LocalCompletionStore {
    async fn has_completed(&self, userid: i64) -> Result<bool> {
        Ok(self.read_set()?.contains(&userid))
    }

    async fn mark_completed(&self, userid: i64) -> Result<()> {
        let mut completed = self.read_set()?;
        completed.insert(userid);
        self.write_set(&completed)
    }
}

#[derive(Debug, Clone)]
pub struct LocalInterestTagStore {
    base_path: PathBuf,
}

impl LocalInterestTagStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn tags_path(&self) -> PathBuf {
        self.base_path.join(TAGS_FILE)
    }

    fn read_map(&self) -> Result<HashMap<i64, Vec<String>>> {
        let path = self.tags_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn tags_for(&self, userid: i64) -> Result<Vec<String>> {
        Ok(self.read_map()?.get(&userid).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl InterestTagStore for LocalInterestTagStore {
    async fn add_interest_if_absent(&self, userid: i64, tag: &str) -> Result<bool> {
        // Single read-modify-write per call; the port contract keeps the
        // check-and-append in one operation.
        let mut tags = self.read_map()?;
        let user_tags = tags.entry(userid).or_default();
        if user_tags.iter().any(|existing| existing == tag) {
            return Ok(false);
        }
        user_tags.push(tag.to_string());
        ensure_base(&self.base_path)?;
        fs::write(self.tags_path(), serde_json::to_string(&tags)?)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn completion_flag_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let store = LocalCompletionStore::new(dir.path());
        store.mark_completed(42).await.unwrap();

        let reopened = LocalCompletionStore::new(dir.path());
        assert!(reopened.has_completed(42).await.unwrap());
        assert!(!reopened.has_completed(43).await.unwrap());
    }

    #[tokio::test]
    async fn tags_persist_and_deduplicate() {
        let dir = TempDir::new().unwrap();
        let store = LocalInterestTagStore::new(dir.path());
        assert!(store
            .add_interest_if_absent(42, "Digital Skills: Foundational")
            .await
            .unwrap());
        assert!(!store
            .add_interest_if_absent(42, "Digital Skills: Foundational")
            .await
            .unwrap());
        assert_eq!(
            store.tags_for(42).unwrap(),
            vec!["Digital Skills: Foundational".to_string()]
        );
    }
}
