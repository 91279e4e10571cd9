//! EduTutor - AI 辅导与作业批改后端服务
//!
//! 基于 Actix Web 构建，对外提供辅导对话与作业批改两个接口。
//!
//! # 架构
//! - `completion`: 补全服务（LLM）网关
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证与 CORS 中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务编排层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod completion;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
