//! 辅导会话实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chat_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub subject: String,
    pub session_title: Option<String>,
    // JSON 数组，元素为 {role, content, timestamp}
    #[sea_orm(column_type = "Text")]
    pub messages: String,
    #[sea_orm(column_type = "Text")]
    pub context_data: String,
    pub session_status: String,
    pub version: i64,
    pub last_message_at: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_chat_session(self) -> crate::models::chat_sessions::entities::ChatSession {
        use super::{decode_json, from_timestamp};
        use crate::models::chat_sessions::entities::{ChatSession, SessionStatus};

        ChatSession {
            id: self.id,
            student_id: self.student_id,
            subject: self.subject,
            session_title: self.session_title,
            messages: decode_json(&self.messages),
            context_data: decode_json(&self.context_data),
            session_status: self.session_status.parse().unwrap_or(SessionStatus::Archived),
            version: self.version,
            last_message_at: from_timestamp(self.last_message_at),
            created_at: from_timestamp(self.created_at),
        }
    }
}
