use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use crate::errors::EduTutorError;
use crate::middlewares::RequireBearer;
use crate::models::ErrorResponse;
use crate::models::chat_sessions::requests::ActiveSessionQuery;
use crate::models::tutor::requests::TutorRequest;
use crate::routes::ROUTE_PREFIXES;
use crate::services::TutorService;

const TUTOR_FAILURE: &str = "Failed to process tutor request";

// 发送一条辅导消息
pub async fn ai_tutor(
    service: web::Data<TutorService>,
    body: web::Json<TutorRequest>,
) -> ActixResult<HttpResponse> {
    match service.chat(body.into_inner()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(resp)),
        Err(e) => {
            error!("Error in AI tutor request: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(TUTOR_FAILURE)))
        }
    }
}

// 当前科目下可续接的会话，没有时返回 null
pub async fn active_session(
    req: HttpRequest,
    service: web::Data<TutorService>,
    query: web::Query<ActiveSessionQuery>,
) -> ActixResult<HttpResponse> {
    let Some(claims) = RequireBearer::extract_claims(&req) else {
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("无法获取用户信息")));
    };

    match service.active_session(&claims, &query.subject).await {
        Ok(session) => Ok(HttpResponse::Ok().json(session)),
        Err(e) => {
            error!("Failed to load active chat session: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(TUTOR_FAILURE)))
        }
    }
}

// 结束会话
pub async fn complete_session(
    req: HttpRequest,
    service: web::Data<TutorService>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let Some(claims) = RequireBearer::extract_claims(&req) else {
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("无法获取用户信息")));
    };

    match service
        .complete_session(&claims.sub, &path.into_inner())
        .await
    {
        Ok(session) => Ok(HttpResponse::Ok().json(session)),
        Err(EduTutorError::NotFound(msg)) => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(msg)))
        }
        Err(e) => {
            error!("Failed to complete chat session: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(TUTOR_FAILURE)))
        }
    }
}

// 配置路由
pub fn configure_tutor_routes(cfg: &mut web::ServiceConfig) {
    for prefix in ROUTE_PREFIXES {
        cfg.service(
            web::scope(&format!("{prefix}/ai-tutor"))
                .wrap(RequireBearer)
                .route("", web::post().to(ai_tutor))
                .route("/sessions/active", web::get().to(active_session))
                .route(
                    "/sessions/{id}/complete",
                    web::post().to(complete_session),
                ),
        );
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::models::students::requests::CreateStudentRequest;
    use crate::routes::test_support::{TestState, bearer};
    use crate::storage::Storage;

    #[actix_web::test]
    async fn test_tutor_round_trip_on_both_mounts() {
        let state = TestState::new();
        let student = state
            .storage
            .create_student(CreateStudentRequest::with_defaults("user-1", None))
            .await
            .unwrap();
        state.completion.push_reply("Let's look at the numerator first.");
        state.completion.push_reply("Exactly right.");
        let app = test::init_service(App::new().configure(state.configure())).await;

        let req = test::TestRequest::post()
            .uri("/ai-tutor")
            .insert_header(bearer("user-1"))
            .set_json(json!({
                "message": "How do I add fractions?",
                "subject": "Mathematics",
                "studentId": student.id,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["response"], "Let's look at the numerator first.");
        let session_id = body["sessionId"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/functions/v1/ai-tutor")
            .insert_header(bearer("user-1"))
            .set_json(json!({
                "message": "So 1/2 + 1/2 = 1?",
                "subject": "Mathematics",
                "sessionId": session_id,
                "studentId": student.id,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["sessionId"], session_id.as_str());
    }

    #[actix_web::test]
    async fn test_requires_bearer() {
        let state = TestState::new();
        let app = test::init_service(App::new().configure(state.configure())).await;

        let req = test::TestRequest::post()
            .uri("/ai-tutor")
            .set_json(json!({"message": "hi", "subject": "Science", "studentId": "s1"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(state.completion.requests().is_empty());
    }

    #[actix_web::test]
    async fn test_failures_are_flat_500() {
        let state = TestState::new();
        state.completion.push_reply("unused");
        let app = test::init_service(App::new().configure(state.configure())).await;

        let req = test::TestRequest::post()
            .uri("/ai-tutor")
            .insert_header(bearer("user-1"))
            .set_json(json!({"message": "hi", "subject": "Science", "studentId": "nobody"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Failed to process tutor request"}));

        let req = test::TestRequest::post()
            .uri("/ai-tutor")
            .insert_header(bearer("user-1"))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Invalid request body"}));
    }

    #[actix_web::test]
    async fn test_active_session_endpoint() {
        let state = TestState::new();
        let student = state
            .storage
            .create_student(CreateStudentRequest::with_defaults("user-1", None))
            .await
            .unwrap();
        state.completion.push_reply("hello");
        let app = test::init_service(App::new().configure(state.configure())).await;

        let req = test::TestRequest::get()
            .uri("/ai-tutor/sessions/active?subject=Science")
            .insert_header(bearer("user-1"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, Value::Null);

        let req = test::TestRequest::post()
            .uri("/ai-tutor")
            .insert_header(bearer("user-1"))
            .set_json(json!({"message": "hi", "subject": "Science", "studentId": student.id}))
            .to_request();
        let chat: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/functions/v1/ai-tutor/sessions/active?subject=Science")
            .insert_header(bearer("user-1"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["id"], chat["sessionId"]);
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);

        let req = test::TestRequest::get()
            .uri("/ai-tutor/sessions/active")
            .insert_header(bearer("user-1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/ai-tutor/sessions/active?subject=Science")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_complete_session_endpoint() {
        let state = TestState::new();
        let student = state
            .storage
            .create_student(CreateStudentRequest::with_defaults("user-1", None))
            .await
            .unwrap();
        state.completion.push_reply("hello");
        let app = test::init_service(App::new().configure(state.configure())).await;

        let req = test::TestRequest::post()
            .uri("/ai-tutor")
            .insert_header(bearer("user-1"))
            .set_json(json!({"message": "hi", "subject": "Science", "studentId": student.id}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let session_id = body["sessionId"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/ai-tutor/sessions/{session_id}/complete"))
            .insert_header(bearer("user-2"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri(&format!("/ai-tutor/sessions/{session_id}/complete"))
            .insert_header(bearer("user-1"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["session_status"], "completed");
    }
}
