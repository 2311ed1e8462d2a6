//! In-memory port implementations for tests and host embedding. The stores
//! are cheap clone handles over shared state, so a host can keep one handle
//! for inspection while the engine owns another.

use crate::domain::model::SurveyRecord;
use crate::domain::ports::{CompletionStore, InterestTagStore, SurveyStore};
use crate::utils::error::{Result, SurveyError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex.lock().map_err(|_| SurveyError::StorageError {
        message: "in-memory store lock poisoned".to_string(),
    })
}

#[derive(Debug, Clone, Default)]
pub struct MemorySurveyStore {
    records: Arc<Mutex<Vec<SurveyRecord>>>,
}

impl MemorySurveyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Result<Vec<SurveyRecord>> {
        Ok(lock(&self.records)?.clone())
    }
}

#[async_trait]
impl SurveyStore for MemorySurveyStore {
    async fn insert(&self, record: &SurveyRecord) -> Result<()> {
        lock(&self.records)?.push(record.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCompletionStore {
    completed: Arc<Mutex<HashSet<i64>>>,
}

impl MemoryCompletionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompletionStore for MemoryCompletionStore {
    async fn has_completed(&self, userid: i64) -> Result<bool> {
        Ok(lock(&self.completed)?.contains(&userid))
    }

    async fn mark_completed(&self, userid: i64) -> Result<()> {
        lock(&self.completed)?.insert(userid);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryInterestTagStore {
    tags: Arc<Mutex<HashMap<i64, Vec<String>>>>,
}

impl MemoryInterestTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags_for(&self, userid: i64) -> Result<Vec<String>> {
        Ok(lock(&self.tags)?.get(&userid).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl InterestTagStore for MemoryInterestTagStore {
    async fn add_interest_if_absent(&self, userid: i64, tag: &str) -> Result<bool> {
        let mut tags = lock(&self.tags)?;
        let user_tags = tags.entry(userid).or_default();
        if user_tags.iter().any(|existing| existing == tag) {
            return Ok(false);
        }
        user_tags.push(tag.to_string());
        Ok(true)
    }
}
