//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub title: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub submission_text: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub ai_feedback: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub teacher_feedback: Option<String>,
    pub grade: Option<f64>,
    pub max_grade: f64,
    pub status: String,
    pub due_date: Option<i64>,
    pub submitted_at: Option<i64>,
    pub graded_at: Option<i64>,
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

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use super::from_timestamp;
        use crate::models::assignments::entities::{Assignment, AssignmentStatus};

        Assignment {
            id: self.id,
            student_id: self.student_id,
            title: self.title,
            subject: self.subject,
            description: self.description,
            submission_text: self.submission_text,
            ai_feedback: self.ai_feedback,
            teacher_feedback: self.teacher_feedback,
            grade: self.grade,
            max_grade: self.max_grade,
            status: self.status.parse().unwrap_or(AssignmentStatus::Pending),
            due_date: self.due_date.map(from_timestamp),
            submitted_at: self.submitted_at.map(from_timestamp),
            graded_at: self.graded_at.map(from_timestamp),
            created_at: from_timestamp(self.created_at),
        }
    }
}
