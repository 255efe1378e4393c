//! 保存门闸 - 业务能力层
//!
//! 保证一个生成批次最多被持久化一次（幂等门闸）
//!
//! 幂等性完全由客户端会话状态保证：题库的创建接口是追加式的，
//! 对 (岗位, 题目) 没有唯一约束。这里挡住的是"双击导致的重复保存"，
//! 不是"任何重复数据"——另一个客户端仍可能写入同样的集合

use crate::clients::QuestionStore;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::GenerationSession;
use crate::services::notifier::{NotificationPort, Severity};
use std::sync::Arc;
use tracing::info;

/// 保存门闸
pub struct PersistenceGate {
    store: Arc<dyn QuestionStore>,
    notifier: Arc<dyn NotificationPort>,
}

impl PersistenceGate {
    /// 创建新的保存门闸
    pub fn new(store: Arc<dyn QuestionStore>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self { store, notifier }
    }

    /// 保存会话中的当前批次
    ///
    /// # 返回
    /// 返回题库确认的保存数量
    ///
    /// 前置条件（违反时不发起任何网络请求）：
    /// - 会话中有非空批次，否则返回校验错误
    /// - 批次尚未保存，否则返回重复保存错误
    ///
    /// 保存失败时标记保持 false，允许重试
    pub async fn save(&self, session: &mut GenerationSession) -> AppResult<usize> {
        let job_title = match session.batch() {
            Some(batch) if !batch.is_empty() => batch.job_title.clone(),
            _ => return Err(self.report(AppError::Validation(ValidationError::EmptyBatch))),
        };

        if session.is_saved() {
            return Err(self.report(AppError::DuplicateSave { job_title }));
        }

        info!("📤 正在保存「{}」的题目批次...", job_title);

        let saved = match session.batch() {
            Some(batch) => match self.store.create(batch).await {
                Ok(saved) => saved,
                Err(e) => return Err(self.report(e)),
            },
            None => return Err(self.report(AppError::Validation(ValidationError::EmptyBatch))),
        };

        session.mark_saved();

        info!("✓ 保存成功，题库确认 {} 道题目", saved);
        self.notifier.notify(
            Severity::Success,
            &format!("已保存「{}」的 {} 道题目", job_title, saved),
        );

        Ok(saved)
    }

    fn report(&self, err: AppError) -> AppError {
        self.notifier.notify(Severity::Error, &err.to_string());
        err
    }
}
