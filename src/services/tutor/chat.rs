use tracing::{debug, error, info, warn};

use super::TutorService;
use super::prompt::{build_messages, build_system_prompt, collect_weak_areas};
use crate::completion::CompletionRequest;
use crate::errors::{EduTutorError, Result};
use crate::models::chat_sessions::{
    entities::{ChatMessage, ChatSession},
    requests::CreateChatSessionRequest,
};
use crate::models::tutor::{requests::TutorRequest, responses::TutorResponse};

pub async fn chat(service: &TutorService, req: TutorRequest) -> Result<TutorResponse> {
    let storage = &service.storage;

    let student = storage
        .get_student_by_id(&req.student_id)
        .await?
        .ok_or_else(|| EduTutorError::not_found(format!("学生不存在: {}", req.student_id)))?;

    let recent = storage
        .list_recent_assessments(&student.id, &req.subject, service.config.recent_assessments)
        .await?;
    let weak_areas = collect_weak_areas(&recent);

    let session = resolve_session(service, &req).await?;

    let messages = build_messages(
        build_system_prompt(&req.subject, &student, &weak_areas),
        &session.messages,
        service.config.history_window,
        &req.message,
    );
    debug!(
        "Tutor prompt for session {}: {} messages, {} weak areas",
        session.id,
        messages.len(),
        weak_areas.len()
    );

    let user_message = ChatMessage::user(req.message.as_str());
    let reply = service
        .completion
        .complete(CompletionRequest {
            model: service.config.model.clone(),
            messages,
            max_tokens: service.config.max_tokens,
            temperature: service.config.temperature,
        })
        .await?;

    persist_exchange(
        service,
        &session,
        vec![user_message, ChatMessage::assistant(reply.as_str())],
    )
    .await;

    Ok(TutorResponse {
        response: reply,
        session_id: session.id,
    })
}

/// 指定会话 ID 时必须属于该学生与科目；否则续接最近的进行中会话，没有则新建
async fn resolve_session(service: &TutorService, req: &TutorRequest) -> Result<ChatSession> {
    let storage = &service.storage;

    if let Some(session_id) = req.session_id.as_deref() {
        let session = storage
            .get_chat_session_by_id(session_id)
            .await?
            .ok_or_else(|| EduTutorError::not_found(format!("会话不存在: {session_id}")))?;

        if session.student_id != req.student_id || session.subject != req.subject {
            return Err(EduTutorError::validation(format!(
                "会话 {session_id} 不属于学生 {} 的 {} 科目",
                req.student_id, req.subject
            )));
        }
        return Ok(session);
    }

    if let Some(session) = storage
        .find_active_chat_session(&req.student_id, &req.subject)
        .await?
    {
        debug!("Resuming chat session {}", session.id);
        return Ok(session);
    }

    let session = storage
        .create_chat_session(CreateChatSessionRequest::for_subject(
            &req.student_id,
            &req.subject,
            req.context.clone().unwrap_or_default(),
        ))
        .await?;
    info!(
        "Created chat session {} for student {} ({})",
        session.id, req.student_id, req.subject
    );
    Ok(session)
}

/// 写入本轮问答；回复已生成，写库失败只记录日志
async fn persist_exchange(service: &TutorService, session: &ChatSession, exchange: Vec<ChatMessage>) {
    let storage = &service.storage;

    let err = match storage
        .append_chat_messages(&session.id, session.version, exchange.clone())
        .await
    {
        Ok(_) => return,
        Err(err) => err,
    };

    if !err.is_conflict() {
        error!(
            "Failed to persist messages for chat session {}: {}",
            session.id, err
        );
        return;
    }

    // 其他请求已先写入，基于最新版本重新追加一次
    warn!("{}", err);
    let fresh = match storage.get_chat_session_by_id(&session.id).await {
        Ok(Some(fresh)) => fresh,
        Ok(None) => {
            error!("Chat session {} disappeared before retrying append", session.id);
            return;
        }
        Err(e) => {
            error!("Failed to reload chat session {}: {}", session.id, e);
            return;
        }
    };

    if let Err(e) = storage
        .append_chat_messages(&fresh.id, fresh.version, exchange)
        .await
    {
        error!(
            "Dropped messages for chat session {} after retry: {}",
            fresh.id, e
        );
    }
}
