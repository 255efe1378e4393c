//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责组装各个控制器并驱动交互循环，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (交互循环，一次一个操作)
//!     ↓
//! services (能力层：generation / persistence / listing / deletion / stats / notifier)
//!     ↓
//! clients (题库访问：QuestionStore / HttpStoreClient)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一写者**：GenerationSession 和 ListingCache 只通过 App 这一个任务读写
//! 2. **注入依赖**：题库和通知都以 trait 对象注入，编排层不关心具体实现
//! 3. **错误不外逃**：每个操作的错误都在触发它的命令边界被转成用户通知

pub mod app;

// 重新导出主要类型
pub use app::App;
