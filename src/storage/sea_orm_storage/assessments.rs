//! 测评存储操作

use super::SeaOrmStorage;
use crate::entity::assessments::{ActiveModel, Column, Entity as Assessments};
use crate::errors::{EduTutorError, Result};
use crate::models::assessments::{entities::Assessment, requests::CreateAssessmentRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

impl SeaOrmStorage {
    /// 记录测评结果
    pub async fn create_assessment_impl(&self, req: CreateAssessmentRequest) -> Result<Assessment> {
        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            student_id: Set(req.student_id),
            subject: Set(req.subject),
            assessment_type: Set(req.assessment_type),
            score: Set(req.score),
            max_score: Set(req.max_score),
            weak_areas: Set(serde_json::to_string(&req.weak_areas)?),
            strong_areas: Set(serde_json::to_string(&req.strong_areas)?),
            recommendations: Set(serde_json::to_string(&req.recommendations)?),
            time_taken: Set(req.time_taken),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("创建测评失败: {e}")))?;

        Ok(result.into_assessment())
    }

    /// 获取学生某科目最近的测评
    pub async fn list_recent_assessments_impl(
        &self,
        student_id: &str,
        subject: &str,
        limit: u64,
    ) -> Result<Vec<Assessment>> {
        let results = Assessments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Subject.eq(subject))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("查询测评失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_assessment()).collect())
    }
}
