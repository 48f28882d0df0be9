use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::SubmissionStore;
use crate::uploads::UploadSink;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SubmissionStore>,
    pub uploads: Arc<UploadSink>,
    pub config: AppConfig,
}
