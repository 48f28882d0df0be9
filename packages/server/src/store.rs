//! In-memory submission store with write-through JSON persistence.
//!
//! Every mutating operation serializes the entire map to one flat file while
//! holding the store mutex, so the in-memory state and the on-disk copy
//! converge after each call. The file is swapped into place with a rename so
//! a crash mid-write cannot leave a truncated store behind.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use common::submission::{Submission, SubmissionMethod, SubmissionStatus};

/// Persistence or lookup failure in the submission store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("submission '{0}' not found")]
    NotFound(String),
    #[error("failed to read or write the store file: {0}")]
    Io(#[from] std::io::Error),
    #[error("store file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Intake fields for a new submission.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub candidate_name: String,
    pub candidate_email: String,
    pub problem_id: String,
    pub submission_type: SubmissionMethod,
    pub github_link: String,
}

/// Map of candidate ID to submission record, persisted to a single JSON file.
pub struct SubmissionStore {
    path: PathBuf,
    inner: Mutex<HashMap<String, Submission>>,
}

impl SubmissionStore {
    /// Open a store backed by `path`, rehydrating any previous contents.
    /// A missing file means an empty store; that is not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records: HashMap<String, Submission> = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            path = %path.display(),
            records = records.len(),
            "Submission store opened"
        );

        Ok(Self {
            path,
            inner: Mutex::new(records),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a record with a freshly generated candidate ID and persist it.
    pub fn create(&self, new: NewSubmission) -> Result<Submission, StoreError> {
        let submission = Submission {
            candidate_id: Uuid::new_v4().to_string(),
            candidate_name: new.candidate_name,
            candidate_email: new.candidate_email,
            problem_id: new.problem_id,
            submission_type: new.submission_type,
            github_link: new.github_link,
            file_path: None,
            submission_time: Utc::now(),
            status: SubmissionStatus::Pending,
            scores: None,
            total_score: 0.0,
            evaluator_name: String::new(),
            evaluator_notes: String::new(),
            evaluation_time: None,
        };

        let mut map = self.lock();
        map.insert(submission.candidate_id.clone(), submission.clone());
        self.persist(&map)?;

        Ok(submission)
    }

    /// Fetch one record by candidate ID.
    pub fn get(&self, candidate_id: &str) -> Option<Submission> {
        self.lock().get(candidate_id).cloned()
    }

    /// Snapshot of every record, in map iteration order.
    pub fn list(&self) -> Vec<Submission> {
        self.lock().values().cloned().collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Apply `mutate` to a record, then write the whole store through.
    pub fn update<F>(&self, candidate_id: &str, mutate: F) -> Result<Submission, StoreError>
    where
        F: FnOnce(&mut Submission),
    {
        let mut map = self.lock();
        let record = map
            .get_mut(candidate_id)
            .ok_or_else(|| StoreError::NotFound(candidate_id.to_string()))?;
        mutate(record);
        let updated = record.clone();
        self.persist(&map)?;

        Ok(updated)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Submission>> {
        // A panic while holding the lock leaves the map itself intact.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, map: &HashMap<String, Submission>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(&json)?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;

        debug!(records = map.len(), "Store written through");
        Ok(())
    }
}
