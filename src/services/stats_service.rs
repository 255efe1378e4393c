//! 统计控制器 - 业务能力层
//!
//! 不做缓存，每次调用都重新拉取；状态只有"有快照 / 没有快照"

use crate::clients::QuestionStore;
use crate::error::AppResult;
use crate::models::Stats;
use crate::services::notifier::{NotificationPort, Severity};
use std::sync::Arc;
use tracing::info;

/// 统计控制器
pub struct StatsController {
    store: Arc<dyn QuestionStore>,
    notifier: Arc<dyn NotificationPort>,
    snapshot: Option<Stats>,
}

impl StatsController {
    /// 创建新的统计控制器
    pub fn new(store: Arc<dyn QuestionStore>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            store,
            notifier,
            snapshot: None,
        }
    }

    /// 最近一次成功获取的快照
    pub fn snapshot(&self) -> Option<&Stats> {
        self.snapshot.as_ref()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// 拉取聚合统计
    pub async fn fetch_stats(&mut self) -> AppResult<Stats> {
        info!("📊 正在获取统计信息...");

        let stats = match self.store.fetch_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                self.notifier.notify(Severity::Error, &e.to_string());
                return Err(e);
            }
        };

        info!("✓ 统计获取完成，共 {} 道题目", stats.total_questions);

        self.snapshot = Some(stats.clone());
        Ok(stats)
    }
}
