//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assessments;
mod assignments;
mod chat_sessions;
mod students;

use crate::config::DatabaseConfig;
use crate::errors::{EduTutorError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EduTutorError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（文件库启用 WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduTutorError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory");
        }

        // 内存库每个连接都是独立的数据库，只能使用单连接
        let max_connections = if in_memory { 1 } else { config.pool_size };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(opt)
            .await
            .map_err(|e| EduTutorError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| EduTutorError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EduTutorError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_or_create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.get_or_create_student_impl(student).await
    }

    // 测评模块
    async fn create_assessment(&self, assessment: CreateAssessmentRequest) -> Result<Assessment> {
        self.create_assessment_impl(assessment).await
    }

    async fn list_recent_assessments(
        &self,
        student_id: &str,
        subject: &str,
        limit: u64,
    ) -> Result<Vec<Assessment>> {
        self.list_recent_assessments_impl(student_id, subject, limit)
            .await
    }

    // 作业模块
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn list_assignments_by_student(&self, student_id: &str) -> Result<Vec<Assignment>> {
        self.list_assignments_by_student_impl(student_id).await
    }

    async fn get_assignment_with_student(
        &self,
        id: &str,
    ) -> Result<Option<(Assignment, Student)>> {
        self.get_assignment_with_student_impl(id).await
    }

    async fn grade_assignment(
        &self,
        id: &str,
        update: GradeAssignmentUpdate,
    ) -> Result<Option<Assignment>> {
        self.grade_assignment_impl(id, update).await
    }

    // 会话模块
    async fn create_chat_session(&self, session: CreateChatSessionRequest) -> Result<ChatSession> {
        self.create_chat_session_impl(session).await
    }

    async fn get_chat_session_by_id(&self, id: &str) -> Result<Option<ChatSession>> {
        self.get_chat_session_by_id_impl(id).await
    }

    async fn find_active_chat_session(
        &self,
        student_id: &str,
        subject: &str,
    ) -> Result<Option<ChatSession>> {
        self.find_active_chat_session_impl(student_id, subject)
            .await
    }

    async fn append_chat_messages(
        &self,
        id: &str,
        expected_version: i64,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatSession> {
        self.append_chat_messages_impl(id, expected_version, messages)
            .await
    }

    async fn update_chat_session_status(
        &self,
        id: &str,
        status: SessionStatus,
    ) -> Result<Option<ChatSession>> {
        self.update_chat_session_status_impl(id, status).await
    }
}
