//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::students::Entity as Students;
use crate::errors::{EduTutorError, Result};
use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentStatus},
        requests::{CreateAssignmentRequest, DEFAULT_MAX_GRADE, GradeAssignmentUpdate},
    },
    students::entities::Student,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            student_id: Set(req.student_id),
            title: Set(req.title),
            subject: Set(req.subject),
            description: Set(req.description),
            submission_text: Set(None),
            ai_feedback: Set(None),
            teacher_feedback: Set(None),
            grade: Set(None),
            max_grade: Set(req.max_grade.unwrap_or(DEFAULT_MAX_GRADE)),
            status: Set(AssignmentStatus::Pending.to_string()),
            due_date: Set(req.due_date.map(|d| d.timestamp())),
            submitted_at: Set(None),
            graded_at: Set(None),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: &str) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出学生的作业
    pub async fn list_assignments_by_student_impl(
        &self,
        student_id: &str,
    ) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 获取作业及所属学生
    pub async fn get_assignment_with_student_impl(
        &self,
        id: &str,
    ) -> Result<Option<(Assignment, Student)>> {
        let result = Assignments::find_by_id(id.to_string())
            .find_also_related(Students)
            .one(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(match result {
            Some((assignment, Some(student))) => {
                Some((assignment.into_assignment(), student.into_student()))
            }
            _ => None,
        })
    }

    /// 写入批改结果
    pub async fn grade_assignment_impl(
        &self,
        id: &str,
        update: GradeAssignmentUpdate,
    ) -> Result<Option<Assignment>> {
        // 先检查作业是否存在
        if self.get_assignment_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id.to_string()),
            submission_text: Set(Some(update.submission_text)),
            ai_feedback: Set(Some(update.ai_feedback)),
            grade: Set(Some(update.grade)),
            status: Set(AssignmentStatus::Graded.to_string()),
            submitted_at: Set(Some(update.submitted_at.timestamp())),
            graded_at: Set(Some(update.graded_at.timestamp())),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("写入批改结果失败: {e}")))?;

        Ok(Some(result.into_assignment()))
    }
}
