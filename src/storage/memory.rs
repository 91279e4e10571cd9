//! 内存存储，仅用于测试
//!
//! 行为与 SeaORM 实现保持一致，并提供写入失败、并发写入等故障注入开关。

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use super::Storage;
use crate::errors::{EduTutorError, Result};
use crate::models::{
    assessments::{entities::Assessment, requests::CreateAssessmentRequest},
    assignments::{
        entities::{Assignment, AssignmentStatus},
        requests::{CreateAssignmentRequest, DEFAULT_MAX_GRADE, GradeAssignmentUpdate},
    },
    chat_sessions::{
        entities::{ChatMessage, ChatSession, SessionStatus},
        requests::CreateChatSessionRequest,
    },
    students::{entities::Student, requests::CreateStudentRequest},
};

#[derive(Default)]
struct Tables {
    students: Vec<Student>,
    assessments: Vec<Assessment>,
    assignments: Vec<Assignment>,
    sessions: Vec<ChatSession>,
}

#[derive(Default)]
pub struct MemoryStorage {
    tables: Mutex<Tables>,
    // 写操作计数
    writes: AtomicUsize,
    // 会话消息写入直接失败
    fail_session_writes: AtomicBool,
    // 作业批改写入直接失败
    fail_assignment_writes: AtomicBool,
    // 下一次追加前模拟一次并发写入
    interleave_next_append: Mutex<Option<ChatMessage>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_session_writes(&self) {
        self.fail_session_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_assignment_writes(&self) {
        self.fail_assignment_writes.store(true, Ordering::SeqCst);
    }

    /// 在下一次追加消息前插入一条其他请求写入的消息
    pub fn interleave_next_append(&self, message: ChatMessage) {
        *self.interleave_next_append.lock().unwrap() = Some(message);
    }

    /// 直接写入带历史消息的会话
    pub fn seed_session(&self, session: ChatSession) {
        self.tables.lock().unwrap().sessions.push(session);
    }

    fn bump_writes(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        let mut tables = self.tables.lock().unwrap();
        if tables.students.iter().any(|s| s.user_id == req.user_id) {
            return Err(EduTutorError::database_operation(
                "UNIQUE constraint failed: students.user_id",
            ));
        }
        let now = chrono::Utc::now();
        let student = Student {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: req.user_id,
            full_name: req.full_name,
            grade_level: req.grade_level,
            subjects: req.subjects,
            profile_picture: None,
            timezone: req.timezone,
            learning_goals: req.learning_goals,
            study_preferences: req.study_preferences,
            created_at: now,
            updated_at: now,
        };
        tables.students.push(student.clone());
        self.bump_writes();
        Ok(student)
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.students.iter().find(|s| s.id == id).cloned())
    }

    async fn get_or_create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        let existing = {
            let tables = self.tables.lock().unwrap();
            tables
                .students
                .iter()
                .find(|s| s.user_id == req.user_id)
                .cloned()
        };
        match existing {
            Some(student) => Ok(student),
            None => self.create_student(req).await,
        }
    }

    async fn create_assessment(&self, req: CreateAssessmentRequest) -> Result<Assessment> {
        let assessment = Assessment {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: req.student_id,
            subject: req.subject,
            assessment_type: req.assessment_type,
            score: req.score,
            max_score: req.max_score,
            weak_areas: req.weak_areas,
            strong_areas: req.strong_areas,
            recommendations: req.recommendations,
            time_taken: req.time_taken,
            created_at: chrono::Utc::now(),
        };
        self.tables
            .lock()
            .unwrap()
            .assessments
            .push(assessment.clone());
        self.bump_writes();
        Ok(assessment)
    }

    async fn list_recent_assessments(
        &self,
        student_id: &str,
        subject: &str,
        limit: u64,
    ) -> Result<Vec<Assessment>> {
        let tables = self.tables.lock().unwrap();
        // 后插入的视为更新
        Ok(tables
            .assessments
            .iter()
            .rev()
            .filter(|a| a.student_id == student_id && a.subject == subject)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        let assignment = Assignment {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: req.student_id,
            title: req.title,
            subject: req.subject,
            description: req.description,
            submission_text: None,
            ai_feedback: None,
            teacher_feedback: None,
            grade: None,
            max_grade: req.max_grade.unwrap_or(DEFAULT_MAX_GRADE),
            status: AssignmentStatus::Pending,
            due_date: req.due_date,
            submitted_at: None,
            graded_at: None,
            created_at: chrono::Utc::now(),
        };
        self.tables
            .lock()
            .unwrap()
            .assignments
            .push(assignment.clone());
        self.bump_writes();
        Ok(assignment)
    }

    async fn list_assignments_by_student(&self, student_id: &str) -> Result<Vec<Assignment>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .assignments
            .iter()
            .rev()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn get_assignment_with_student(
        &self,
        id: &str,
    ) -> Result<Option<(Assignment, Student)>> {
        let tables = self.tables.lock().unwrap();
        let Some(assignment) = tables.assignments.iter().find(|a| a.id == id) else {
            return Ok(None);
        };
        Ok(tables
            .students
            .iter()
            .find(|s| s.id == assignment.student_id)
            .map(|student| (assignment.clone(), student.clone())))
    }

    async fn grade_assignment(
        &self,
        id: &str,
        update: GradeAssignmentUpdate,
    ) -> Result<Option<Assignment>> {
        if self.fail_assignment_writes.load(Ordering::SeqCst) {
            return Err(EduTutorError::database_operation("database is locked"));
        }
        let mut tables = self.tables.lock().unwrap();
        let Some(assignment) = tables.assignments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        assignment.submission_text = Some(update.submission_text);
        assignment.ai_feedback = Some(update.ai_feedback);
        assignment.grade = Some(update.grade);
        assignment.status = AssignmentStatus::Graded;
        assignment.submitted_at = Some(update.submitted_at);
        assignment.graded_at = Some(update.graded_at);
        let graded = assignment.clone();
        self.bump_writes();
        Ok(Some(graded))
    }

    async fn create_chat_session(&self, req: CreateChatSessionRequest) -> Result<ChatSession> {
        let now = chrono::Utc::now();
        let session = ChatSession {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: req.student_id,
            subject: req.subject,
            session_title: req.session_title,
            messages: Vec::new(),
            context_data: req.context_data,
            session_status: SessionStatus::Active,
            version: 0,
            last_message_at: now,
            created_at: now,
        };
        self.tables.lock().unwrap().sessions.push(session.clone());
        self.bump_writes();
        Ok(session)
    }

    async fn get_chat_session_by_id(&self, id: &str) -> Result<Option<ChatSession>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn find_active_chat_session(
        &self,
        student_id: &str,
        subject: &str,
    ) -> Result<Option<ChatSession>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .sessions
            .iter()
            .rev()
            .find(|s| {
                s.student_id == student_id
                    && s.subject == subject
                    && s.session_status == SessionStatus::Active
            })
            .cloned())
    }

    async fn append_chat_messages(
        &self,
        id: &str,
        expected_version: i64,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatSession> {
        if self.fail_session_writes.load(Ordering::SeqCst) {
            return Err(EduTutorError::database_operation("database is locked"));
        }
        let interleaved = self.interleave_next_append.lock().unwrap().take();

        let mut tables = self.tables.lock().unwrap();
        let session = tables
            .sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| EduTutorError::not_found(format!("会话不存在: {id}")))?;

        if let Some(other) = interleaved {
            session.messages.push(other);
            session.version += 1;
        }

        if session.version != expected_version {
            return Err(EduTutorError::conflict(format!(
                "会话 {id} 版本已变更: 期望 {expected_version}, 实际 {}",
                session.version
            )));
        }

        if let Some(last) = messages.last() {
            session.last_message_at = last.timestamp;
        }
        session.messages.extend(messages);
        session.version += 1;
        let updated = session.clone();
        self.bump_writes();
        Ok(updated)
    }

    async fn update_chat_session_status(
        &self,
        id: &str,
        status: SessionStatus,
    ) -> Result<Option<ChatSession>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(session) = tables.sessions.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        session.session_status = status;
        let updated = session.clone();
        self.bump_writes();
        Ok(Some(updated))
    }
}
