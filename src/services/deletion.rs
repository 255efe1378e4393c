//! 删除控制器 - 流程层
//!
//! 流程顺序：校验 → 调题库删除 → 通知结果 → 刷新列表缓存
//!
//! 删除失败（题库拒绝或传输失败）时不触发缓存刷新；
//! 删除成功但后续刷新失败时接受缓存暂时陈旧，用户可手动再拉取

use crate::clients::QuestionStore;
use crate::error::{AppError, AppResult, ValidationError};
use crate::services::listing::ListingCache;
use crate::services::notifier::{NotificationPort, Severity};
use std::sync::Arc;
use tracing::{info, warn};

/// 删除控制器
pub struct DeletionController {
    store: Arc<dyn QuestionStore>,
    notifier: Arc<dyn NotificationPort>,
}

impl DeletionController {
    /// 创建新的删除控制器
    pub fn new(store: Arc<dyn QuestionStore>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self { store, notifier }
    }

    /// 按岗位名称删除
    ///
    /// 题库可能删除零个、一个或多个同名集合；
    /// 成功后原样转达题库的确认消息，并刷新一次列表缓存
    pub async fn delete_by_job_title(
        &self,
        cache: &mut ListingCache,
        job_title: &str,
    ) -> AppResult<String> {
        let job_title = job_title.trim();
        if job_title.is_empty() {
            return Err(self.report(AppError::Validation(ValidationError::EmptyJobTitle)));
        }

        info!("🗑️ 正在删除岗位「{}」的全部题目...", job_title);

        let message = match self.store.delete_by_job_title(job_title).await {
            Ok(message) => message,
            Err(e) => return Err(self.report(e)),
        };

        self.notifier.notify(Severity::Success, &message);
        self.refresh_after_delete(cache).await;

        Ok(message)
    }

    /// 按题目ID删除
    ///
    /// 与按岗位删除同一套契约，粒度是单道题目
    pub async fn delete_by_id(&self, cache: &mut ListingCache, id: i64) -> AppResult<String> {
        if id <= 0 {
            return Err(self.report(AppError::Validation(ValidationError::NonPositiveId { id })));
        }

        info!("🗑️ 正在删除题目 ID {}...", id);

        let message = match self.store.delete_by_id(id).await {
            Ok(message) => message,
            Err(e) => return Err(self.report(e)),
        };

        self.notifier.notify(Severity::Success, &message);
        self.refresh_after_delete(cache).await;

        Ok(message)
    }

    /// 删除成功后的刷新，失败不影响删除结果
    async fn refresh_after_delete(&self, cache: &mut ListingCache) {
        if let Err(e) = cache.invalidate_and_refresh().await {
            warn!("⚠️ 删除成功但列表刷新失败: {}", e);
        }
    }

    fn report(&self, err: AppError) -> AppError {
        self.notifier.notify(Severity::Error, &err.to_string());
        err
    }
}
