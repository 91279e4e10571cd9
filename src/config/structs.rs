use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub completion: CompletionConfig,
    pub tutor: TutorConfig,
    pub feedback: FeedbackConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// 补全服务（LLM）配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(skip_serializing, default)] // 不序列化到日志/响应中
    pub api_key: String,
    pub base_url: String,
    pub timeout: u64, // 请求超时 (秒)
}

/// 辅导对话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub history_window: usize,     // 发给模型的历史消息条数
    pub recent_assessments: u64,   // 用于个性化的最近测评数量
}

/// 作业批改配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub fallback_grade: f64, // 模型输出无法解析时的兜底分数
}

/// Bearer 凭证校验配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing, default)]
    pub jwt_secret: String,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}
