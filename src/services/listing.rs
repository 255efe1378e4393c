//! 列表缓存 - 业务能力层
//!
//! 持有最近一次成功拉取的完整列表，是该列表唯一的写入方；
//! 删除等变更操作完成后通过刷新保持与题库的最终一致

use crate::clients::QuestionStore;
use crate::error::{AppError, AppResult};
use crate::models::QuestionSet;
use crate::services::notifier::{NotificationPort, Severity};
use std::sync::Arc;
use tracing::info;

/// 列表缓存
pub struct ListingCache {
    store: Arc<dyn QuestionStore>,
    notifier: Arc<dyn NotificationPort>,
    sets: Vec<QuestionSet>,
    visible: bool,
}

impl ListingCache {
    /// 创建空的列表缓存
    pub fn new(store: Arc<dyn QuestionStore>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            store,
            notifier,
            sets: Vec::new(),
            visible: false,
        }
    }

    /// 缓存的题目集合（可能是陈旧数据，渲染前先看 `is_visible`）
    pub fn sets(&self) -> &[QuestionSet] {
        &self.sets
    }

    /// 缓存内容当前是否应该展示
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// 从题库拉取完整列表
    ///
    /// # 返回
    /// 返回本次拉取到的集合数量
    ///
    /// 拉到空列表不算错误：缓存内容原样保留（可能陈旧），
    /// 只清除展示标记并给用户一条提示
    pub async fn refresh(&mut self) -> AppResult<usize> {
        info!("📥 正在拉取题目列表...");

        let sets = match self.store.list_all().await {
            Ok(sets) => sets,
            Err(e) => return Err(self.report(e)),
        };

        if sets.is_empty() {
            self.visible = false;
            info!("列表为空，保留原有缓存内容");
            self.notifier
                .notify(Severity::Notice, "题库中暂时没有已保存的题目");
            return Ok(0);
        }

        let fetched = sets.len();
        self.sets = sets;
        self.visible = true;

        info!("✓ 列表刷新完成，共 {} 个题目集合", fetched);

        Ok(fetched)
    }

    /// 失效并刷新
    ///
    /// 删除成功后的固定动作：无论题库报告删掉了多少条，都刷新一次
    pub async fn invalidate_and_refresh(&mut self) -> AppResult<usize> {
        self.visible = false;
        self.refresh().await
    }

    fn report(&self, err: AppError) -> AppError {
        self.notifier.notify(Severity::Error, &err.to_string());
        err
    }
}
