//! # Interview Prep Client
//!
//! 一个管理面试题数据生命周期的客户端编排层
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 题库访问层（Clients）
//! - `clients/` - 持有 HTTP 连接，只暴露题库能力
//! - `QuestionStore` - 题库能力抽象（可注入假实现做测试）
//! - `HttpStoreClient` - 按线上协议访问远端题库
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，承载全部状态与契约
//! - `GenerationController` - 生成能力，独占持有生成会话与忙碌标记
//! - `PersistenceGate` - 幂等保存门闸（一个批次最多保存一次）
//! - `ListingCache` - 列表缓存，变更后刷新保持最终一致
//! - `DeletionController` - 按岗位/按ID删除，成功后刷新缓存
//! - `StatsController` - 聚合统计快照
//! - `NotificationPort` - 用户可见通知能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/app` - 组装控制器，驱动交互命令循环
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::{HttpStoreClient, QuestionStore};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{GenerationSession, Question, QuestionBatch, QuestionSet, QuestionType, Stats};
pub use orchestrator::App;
pub use services::{
    DeletionController, GenerationController, ListingCache, NotificationPort, PersistenceGate,
    SessionNotifier, Severity, StatsController,
};
