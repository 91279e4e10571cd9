pub mod create;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, requests::NewAssignmentRequest};
use crate::storage::Storage;
use crate::utils::jwt::BearerClaims;

pub struct AssignmentService {
    storage: Arc<dyn Storage>,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 为当前账号的学生布置作业
    pub async fn create_assignment(
        &self,
        claims: &BearerClaims,
        req: NewAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, claims, req).await
    }

    /// 当前账号的全部作业，最新的在前
    pub async fn list_assignments(&self, claims: &BearerClaims) -> Result<Vec<Assignment>> {
        list::list_assignments(self, claims).await
    }
}
