pub mod me;

pub(crate) use me::resolve_student;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::entities::Student;
use crate::storage::Storage;
use crate::utils::jwt::BearerClaims;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 当前账号的学生档案，首次访问时创建
    pub async fn current_student(&self, claims: &BearerClaims) -> Result<Student> {
        me::current_student(self, claims).await
    }
}
