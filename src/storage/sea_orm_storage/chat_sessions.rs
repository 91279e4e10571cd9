//! 辅导会话存储操作

use super::SeaOrmStorage;
use crate::entity::chat_sessions::{ActiveModel, Column, Entity as ChatSessions};
use crate::errors::{EduTutorError, Result};
use crate::models::chat_sessions::{
    entities::{ChatMessage, ChatSession, SessionStatus},
    requests::CreateChatSessionRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建会话
    pub async fn create_chat_session_impl(
        &self,
        req: CreateChatSessionRequest,
    ) -> Result<ChatSession> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            student_id: Set(req.student_id),
            subject: Set(req.subject),
            session_title: Set(req.session_title),
            messages: Set("[]".to_string()),
            context_data: Set(serde_json::to_string(&req.context_data)?),
            session_status: Set(SessionStatus::Active.to_string()),
            version: Set(0),
            last_message_at: Set(now),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("创建会话失败: {e}")))?;

        Ok(result.into_chat_session())
    }

    /// 通过 ID 获取会话
    pub async fn get_chat_session_by_id_impl(&self, id: &str) -> Result<Option<ChatSession>> {
        let result = ChatSessions::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("查询会话失败: {e}")))?;

        Ok(result.map(|m| m.into_chat_session()))
    }

    /// 获取 (学生, 科目) 最近的进行中会话
    pub async fn find_active_chat_session_impl(
        &self,
        student_id: &str,
        subject: &str,
    ) -> Result<Option<ChatSession>> {
        let result = ChatSessions::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Subject.eq(subject))
            .filter(Column::SessionStatus.eq(SessionStatus::ACTIVE))
            .order_by_desc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("查询会话失败: {e}")))?;

        Ok(result.map(|m| m.into_chat_session()))
    }

    /// 追加消息（乐观并发控制）
    ///
    /// 只有在库中版本仍为 expected_version 时才会写入，写入后版本加一。
    pub async fn append_chat_messages_impl(
        &self,
        id: &str,
        expected_version: i64,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatSession> {
        let row = ChatSessions::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("查询会话失败: {e}")))?
            .ok_or_else(|| EduTutorError::not_found(format!("会话不存在: {id}")))?;

        if row.version != expected_version {
            return Err(EduTutorError::conflict(format!(
                "会话 {id} 版本已变更: 期望 {expected_version}, 实际 {}",
                row.version
            )));
        }

        // 写回的是完整列表，历史无法解析时拒绝写入
        let mut all_messages: Vec<ChatMessage> =
            serde_json::from_str(&row.messages).map_err(|e| {
                EduTutorError::serialization(format!("会话 {id} 的历史消息无法解析: {e}"))
            })?;

        let last_message_at = messages
            .last()
            .map(|m| m.timestamp.timestamp())
            .unwrap_or_else(|| chrono::Utc::now().timestamp());

        all_messages.extend(messages);
        let encoded = serde_json::to_string(&all_messages)?;

        let result = ChatSessions::update_many()
            .col_expr(Column::Messages, sea_orm::sea_query::Expr::value(encoded))
            .col_expr(
                Column::Version,
                sea_orm::sea_query::Expr::value(expected_version + 1),
            )
            .col_expr(
                Column::LastMessageAt,
                sea_orm::sea_query::Expr::value(last_message_at),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::Version.eq(expected_version))
            .exec(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("写入会话消息失败: {e}")))?;

        // 读取与写入之间被其他请求抢先
        if result.rows_affected == 0 {
            return Err(EduTutorError::conflict(format!(
                "会话 {id} 在写入时被并发修改"
            )));
        }

        self.get_chat_session_by_id_impl(id)
            .await?
            .ok_or_else(|| EduTutorError::not_found(format!("会话不存在: {id}")))
    }

    /// 更新会话状态
    pub async fn update_chat_session_status_impl(
        &self,
        id: &str,
        status: SessionStatus,
    ) -> Result<Option<ChatSession>> {
        if self.get_chat_session_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id.to_string()),
            session_status: Set(status.to_string()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("更新会话状态失败: {e}")))?;

        Ok(Some(result.into_chat_session()))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::Expr;
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    use super::super::test_support::memory_storage;
    use crate::entity::chat_sessions::{Column, Entity as ChatSessions};
    use crate::models::JsonMap;
    use crate::models::chat_sessions::entities::{ChatMessage, ChatRole, SessionStatus};
    use crate::models::chat_sessions::requests::CreateChatSessionRequest;
    use crate::models::students::requests::CreateStudentRequest;

    #[tokio::test]
    async fn test_append_preserves_order_and_bumps_version() {
        let storage = memory_storage().await;
        let student = storage
            .create_student_impl(CreateStudentRequest::with_defaults("user-1", None))
            .await
            .unwrap();
        let session = storage
            .create_chat_session_impl(CreateChatSessionRequest::for_subject(
                &student.id,
                "Mathematics",
                JsonMap::new(),
            ))
            .await
            .unwrap();
        assert_eq!(session.version, 0);
        assert_eq!(session.session_title.as_deref(), Some("Mathematics Help Session"));

        let session = storage
            .append_chat_messages_impl(
                &session.id,
                0,
                vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")],
            )
            .await
            .unwrap();
        let session = storage
            .append_chat_messages_impl(
                &session.id,
                1,
                vec![ChatMessage::user("2+2?"), ChatMessage::assistant("4")],
            )
            .await
            .unwrap();

        assert_eq!(session.version, 2);
        let contents: Vec<&str> = session.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["hi", "hello", "2+2?", "4"]);
        assert_eq!(session.messages[0].role, ChatRole::User);
        assert_eq!(session.messages[3].role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn test_stale_version_is_rejected() {
        let storage = memory_storage().await;
        let student = storage
            .create_student_impl(CreateStudentRequest::with_defaults("user-1", None))
            .await
            .unwrap();
        let session = storage
            .create_chat_session_impl(CreateChatSessionRequest::for_subject(
                &student.id,
                "Science",
                JsonMap::new(),
            ))
            .await
            .unwrap();

        storage
            .append_chat_messages_impl(&session.id, 0, vec![ChatMessage::user("first")])
            .await
            .unwrap();
        let err = storage
            .append_chat_messages_impl(&session.id, 0, vec![ChatMessage::user("racing")])
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        let stored = storage
            .get_chat_session_by_id_impl(&session.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_history_is_not_overwritten() {
        let storage = memory_storage().await;
        let student = storage
            .create_student_impl(CreateStudentRequest::with_defaults("user-1", None))
            .await
            .unwrap();
        let session = storage
            .create_chat_session_impl(CreateChatSessionRequest::for_subject(
                &student.id,
                "Science",
                JsonMap::new(),
            ))
            .await
            .unwrap();

        let corrupt = r#"[{"role":"user","content":"old question","timestamp":"2025-03-01T10:00:00Z"},{"role":"system","content":"injected","timestamp":"2025-03-01T10:00:01Z"}]"#;
        ChatSessions::update_many()
            .col_expr(Column::Messages, Expr::value(corrupt))
            .filter(Column::Id.eq(session.id.as_str()))
            .exec(&storage.db)
            .await
            .unwrap();

        let err = storage
            .append_chat_messages_impl(&session.id, 0, vec![ChatMessage::user("new")])
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E008");

        let row = ChatSessions::find_by_id(session.id.clone())
            .one(&storage.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.messages, corrupt);
        assert_eq!(row.version, 0);
    }

    #[tokio::test]
    async fn test_completed_session_is_not_resumed() {
        let storage = memory_storage().await;
        let student = storage
            .create_student_impl(CreateStudentRequest::with_defaults("user-1", None))
            .await
            .unwrap();
        let session = storage
            .create_chat_session_impl(CreateChatSessionRequest::for_subject(
                &student.id,
                "History",
                JsonMap::new(),
            ))
            .await
            .unwrap();

        let active = storage
            .find_active_chat_session_impl(&student.id, "History")
            .await
            .unwrap();
        assert_eq!(active.map(|s| s.id), Some(session.id.clone()));

        let updated = storage
            .update_chat_session_status_impl(&session.id, SessionStatus::Completed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.session_status, SessionStatus::Completed);

        assert!(
            storage
                .find_active_chat_session_impl(&student.id, "History")
                .await
                .unwrap()
                .is_none()
        );
    }
}
