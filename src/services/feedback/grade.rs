use tracing::{debug, error, warn};

use super::FeedbackService;
use super::parse::ParsedFeedback;
use super::prompt::build_grading_prompt;
use crate::completion::{CompletionMessage, CompletionRequest};
use crate::errors::{EduTutorError, Result};
use crate::models::assignments::{
    requests::{AssignmentFeedbackRequest, GradeAssignmentUpdate},
    responses::AssignmentFeedbackResponse,
};

pub async fn grade_submission(
    service: &FeedbackService,
    req: AssignmentFeedbackRequest,
) -> Result<AssignmentFeedbackResponse> {
    let storage = &service.storage;

    let (assignment, student) = storage
        .get_assignment_with_student(&req.assignment_id)
        .await?
        .ok_or_else(|| {
            EduTutorError::not_found(format!("Assignment not found: {}", req.assignment_id))
        })?;

    let prompt = build_grading_prompt(&assignment, &student, &req.submission);
    let raw = service
        .completion
        .complete(CompletionRequest {
            model: service.config.model.clone(),
            messages: vec![CompletionMessage::user(prompt)],
            max_tokens: service.config.max_tokens,
            temperature: service.config.temperature,
        })
        .await?;

    let parsed = ParsedFeedback::parse(&raw, service.config.fallback_grade);
    if !parsed.is_valid() {
        warn!(
            "Grading output for assignment {} is not valid JSON, using fallback feedback",
            assignment.id
        );
    }
    let mut feedback = parsed.into_feedback();
    feedback.grade = clamp_grade(feedback.grade, assignment.max_grade);

    let now = chrono::Utc::now();
    let update = GradeAssignmentUpdate {
        submission_text: req.submission,
        ai_feedback: feedback.feedback.clone(),
        grade: feedback.grade,
        submitted_at: now,
        graded_at: now,
    };

    // 批改结果已生成，写库失败时仍返回反馈
    let updated = match storage.grade_assignment(&assignment.id, update).await {
        Ok(Some(updated)) => {
            debug!("Assignment {} graded: {}", updated.id, feedback.grade);
            Some(updated)
        }
        Ok(None) => {
            warn!("Assignment {} vanished before grade was stored", assignment.id);
            None
        }
        Err(e) => {
            error!("Failed to store grade for assignment {}: {}", assignment.id, e);
            None
        }
    };

    Ok(AssignmentFeedbackResponse {
        assignment: updated,
        feedback,
    })
}

fn clamp_grade(grade: f64, max_grade: f64) -> f64 {
    grade.min(max_grade).max(0.0)
}
