pub mod create;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assessments::{entities::Assessment, requests::NewAssessmentRequest};
use crate::storage::Storage;
use crate::utils::jwt::BearerClaims;

pub struct AssessmentService {
    storage: Arc<dyn Storage>,
}

impl AssessmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 记录一次测评结果，薄弱项会进入后续辅导提示
    pub async fn record_assessment(
        &self,
        claims: &BearerClaims,
        req: NewAssessmentRequest,
    ) -> Result<Assessment> {
        create::record_assessment(self, claims, req).await
    }
}
