use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::completion::create_completion_client;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{
    AssessmentService, AssignmentService, FeedbackService, StudentService, TutorService,
};
use crate::storage::create_storage;

pub struct StartupContext {
    pub tutor: Arc<TutorService>,
    pub feedback: Arc<FeedbackService>,
    pub students: Arc<StudentService>,
    pub assignments: Arc<AssignmentService>,
    pub assessments: Arc<AssessmentService>,
}

/// 准备服务器启动的上下文
/// 包括存储、补全客户端以及各业务服务
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = create_storage(&config.database).await?;
    info!("Storage backend initialized and migrations completed");

    let completion = create_completion_client(&config.completion)?;
    debug!(
        "Completion client ready: base_url={}, tutor_model={}, feedback_model={}",
        config.completion.base_url, config.tutor.model, config.feedback.model
    );

    if config.auth.jwt_secret.is_empty() {
        warn!("auth.jwt_secret is empty, every authenticated request will be rejected");
    }

    let tutor = TutorService::new(storage.clone(), completion.clone(), config.tutor.clone());
    let feedback = FeedbackService::new(storage.clone(), completion, config.feedback.clone());
    let students = StudentService::new(storage.clone());
    let assignments = AssignmentService::new(storage.clone());
    let assessments = AssessmentService::new(storage);

    Ok(StartupContext {
        tutor: Arc::new(tutor),
        feedback: Arc::new(feedback),
        students: Arc::new(students),
        assignments: Arc::new(assignments),
        assessments: Arc::new(assessments),
    })
}
