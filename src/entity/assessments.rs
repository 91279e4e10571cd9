//! 测评实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub subject: String,
    pub assessment_type: String,
    pub score: f64,
    pub max_score: f64,
    #[sea_orm(column_type = "Text")]
    pub weak_areas: String,
    #[sea_orm(column_type = "Text")]
    pub strong_areas: String,
    #[sea_orm(column_type = "Text")]
    pub recommendations: String,
    pub time_taken: Option<i64>,
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
    pub fn into_assessment(self) -> crate::models::assessments::entities::Assessment {
        use crate::models::assessments::entities::Assessment;
        use super::{decode_json, from_timestamp};

        Assessment {
            id: self.id,
            student_id: self.student_id,
            subject: self.subject,
            assessment_type: self.assessment_type,
            score: self.score,
            max_score: self.max_score,
            weak_areas: decode_json(&self.weak_areas),
            strong_areas: decode_json(&self.strong_areas),
            recommendations: decode_json(&self.recommendations),
            time_taken: self.time_taken,
            created_at: from_timestamp(self.created_at),
        }
    }
}
