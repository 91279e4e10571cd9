//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub user_id: String,
    pub full_name: String,
    pub grade_level: String,
    #[sea_orm(column_type = "Text")]
    pub subjects: String,
    pub profile_picture: Option<String>,
    pub timezone: String,
    #[sea_orm(column_type = "Text")]
    pub learning_goals: String,
    #[sea_orm(column_type = "Text")]
    pub study_preferences: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assessments::Entity")]
    Assessments,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::chat_sessions::Entity")]
    ChatSessions,
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::chat_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;
        use super::{decode_json, from_timestamp};

        Student {
            id: self.id,
            user_id: self.user_id,
            full_name: self.full_name,
            grade_level: self.grade_level,
            subjects: decode_json(&self.subjects),
            profile_picture: self.profile_picture,
            timezone: self.timezone,
            learning_goals: decode_json(&self.learning_goals),
            study_preferences: decode_json(&self.study_preferences),
            created_at: from_timestamp(self.created_at),
            updated_at: from_timestamp(self.updated_at),
        }
    }
}
