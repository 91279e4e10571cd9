use std::sync::Arc;

use crate::models::{
    assessments::{entities::Assessment, requests::CreateAssessmentRequest},
    assignments::{
        entities::Assignment,
        requests::{CreateAssignmentRequest, GradeAssignmentUpdate},
    },
    chat_sessions::{
        entities::{ChatMessage, ChatSession, SessionStatus},
        requests::CreateChatSessionRequest,
    },
    students::{entities::Student, requests::CreateStudentRequest},
};

use crate::config::DatabaseConfig;
use crate::errors::Result;

#[cfg(test)]
pub mod memory;
pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生档案方法
    // 创建学生档案
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生档案
    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>>;
    // 获取账号对应的学生档案，不存在则创建
    async fn get_or_create_student(&self, student: CreateStudentRequest) -> Result<Student>;

    /// 测评方法
    // 记录测评结果
    async fn create_assessment(&self, assessment: CreateAssessmentRequest) -> Result<Assessment>;
    // 获取学生某科目最近的测评，按时间倒序
    async fn list_recent_assessments(
        &self,
        student_id: &str,
        subject: &str,
        limit: u64,
    ) -> Result<Vec<Assessment>>;

    /// 作业方法
    // 创建作业
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    // 获取学生的全部作业，按创建时间倒序
    async fn list_assignments_by_student(&self, student_id: &str) -> Result<Vec<Assignment>>;
    // 获取作业及其所属学生
    async fn get_assignment_with_student(&self, id: &str)
    -> Result<Option<(Assignment, Student)>>;
    // 写入批改结果（提交内容、反馈、分数、状态一次写入）
    async fn grade_assignment(
        &self,
        id: &str,
        update: GradeAssignmentUpdate,
    ) -> Result<Option<Assignment>>;

    /// 辅导会话方法
    // 创建会话
    async fn create_chat_session(&self, session: CreateChatSessionRequest) -> Result<ChatSession>;
    // 通过ID获取会话
    async fn get_chat_session_by_id(&self, id: &str) -> Result<Option<ChatSession>>;
    // 获取 (学生, 科目) 最近的进行中会话
    async fn find_active_chat_session(
        &self,
        student_id: &str,
        subject: &str,
    ) -> Result<Option<ChatSession>>;
    // 追加消息；版本号与 expected_version 不一致时返回 Conflict
    async fn append_chat_messages(
        &self,
        id: &str,
        expected_version: i64,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatSession>;
    // 更新会话状态
    async fn update_chat_session_status(
        &self,
        id: &str,
        status: SessionStatus,
    ) -> Result<Option<ChatSession>>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
