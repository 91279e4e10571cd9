pub mod chat;
pub mod prompt;
pub mod session;

use std::sync::Arc;

use crate::completion::CompletionClient;
use crate::config::TutorConfig;
use crate::errors::Result;
use crate::models::chat_sessions::entities::ChatSession;
use crate::models::tutor::{requests::TutorRequest, responses::TutorResponse};
use crate::storage::Storage;
use crate::utils::jwt::BearerClaims;

/// 辅导对话编排
pub struct TutorService {
    storage: Arc<dyn Storage>,
    completion: Arc<dyn CompletionClient>,
    config: TutorConfig,
}

impl TutorService {
    pub fn new(
        storage: Arc<dyn Storage>,
        completion: Arc<dyn CompletionClient>,
        config: TutorConfig,
    ) -> Self {
        Self {
            storage,
            completion,
            config,
        }
    }

    /// 处理一条学生消息，返回回复及后续应使用的会话 ID
    pub async fn chat(&self, req: TutorRequest) -> Result<TutorResponse> {
        chat::chat(self, req).await
    }

    /// 查询当前账号在该科目下的进行中会话
    pub async fn active_session(
        &self,
        claims: &BearerClaims,
        subject: &str,
    ) -> Result<Option<ChatSession>> {
        session::active_session(self, claims, subject).await
    }

    /// 结束会话，之后不带会话 ID 的消息会新建会话
    pub async fn complete_session(&self, user_id: &str, session_id: &str) -> Result<ChatSession> {
        session::complete_session(self, user_id, session_id).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::TutorService;
    use crate::completion::scripted::ScriptedCompletion;
    use crate::config::TutorConfig;
    use crate::models::students::{entities::Student, requests::CreateStudentRequest};
    use crate::storage::{Storage, memory::MemoryStorage};

    pub fn tutor_config() -> TutorConfig {
        TutorConfig {
            model: "gpt-4".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            history_window: 10,
            recent_assessments: 3,
        }
    }

    pub struct Fixture {
        pub storage: Arc<MemoryStorage>,
        pub completion: Arc<ScriptedCompletion>,
        pub service: TutorService,
    }

    pub fn fixture() -> Fixture {
        let storage = Arc::new(MemoryStorage::new());
        let completion = Arc::new(ScriptedCompletion::new());
        let service = TutorService::new(storage.clone(), completion.clone(), tutor_config());
        Fixture {
            storage,
            completion,
            service,
        }
    }

    pub async fn seed_student(storage: &MemoryStorage, user_id: &str, name: &str) -> Student {
        storage
            .create_student(CreateStudentRequest::with_defaults(
                user_id,
                Some(name.to_string()),
            ))
            .await
            .unwrap()
    }
}
