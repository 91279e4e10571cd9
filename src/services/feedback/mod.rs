pub mod grade;
pub mod parse;
pub mod prompt;

use std::sync::Arc;

use crate::completion::CompletionClient;
use crate::config::FeedbackConfig;
use crate::errors::Result;
use crate::models::assignments::{
    requests::AssignmentFeedbackRequest, responses::AssignmentFeedbackResponse,
};
use crate::storage::Storage;

pub use parse::ParsedFeedback;

/// 作业批改编排
pub struct FeedbackService {
    storage: Arc<dyn Storage>,
    completion: Arc<dyn CompletionClient>,
    config: FeedbackConfig,
}

impl FeedbackService {
    pub fn new(
        storage: Arc<dyn Storage>,
        completion: Arc<dyn CompletionClient>,
        config: FeedbackConfig,
    ) -> Self {
        Self {
            storage,
            completion,
            config,
        }
    }

    /// 批改一次提交并写回作业
    pub async fn grade_submission(
        &self,
        req: AssignmentFeedbackRequest,
    ) -> Result<AssignmentFeedbackResponse> {
        grade::grade_submission(self, req).await
    }
}
