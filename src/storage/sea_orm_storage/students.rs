//! 学生档案存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{EduTutorError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::debug;

impl SeaOrmStorage {
    /// 创建学生档案
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(req.user_id),
            full_name: Set(req.full_name),
            grade_level: Set(req.grade_level),
            subjects: Set(serde_json::to_string(&req.subjects)?),
            profile_picture: Set(None),
            timezone: Set(req.timezone),
            learning_goals: Set(serde_json::to_string(&req.learning_goals)?),
            study_preferences: Set(serde_json::to_string(&req.study_preferences)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("创建学生档案失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生档案
    pub async fn get_student_by_id_impl(&self, id: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过账号 ID 获取学生档案
    pub async fn get_student_by_user_id_impl(&self, user_id: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 获取或创建学生档案
    ///
    /// user_id 上有唯一索引，并发创建时插入失败的一方回读已存在的档案。
    pub async fn get_or_create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        if let Some(student) = self.get_student_by_user_id_impl(&req.user_id).await? {
            return Ok(student);
        }

        let user_id = req.user_id.clone();
        match self.create_student_impl(req).await {
            Ok(student) => {
                debug!("Created student profile {} for user {}", student.id, user_id);
                Ok(student)
            }
            Err(create_err) => self
                .get_student_by_user_id_impl(&user_id)
                .await?
                .ok_or(create_err),
        }
    }
}
