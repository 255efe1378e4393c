//! 生成控制器 - 业务能力层
//!
//! 驱动生成请求，并持有"已生成但尚未保存"的批次（GenerationSession）

use crate::clients::QuestionStore;
use crate::config::Config;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::{GenerationSession, QuestionBatch};
use crate::services::notifier::{NotificationPort, Severity};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// 每个批次允许的题目数量范围
pub const MIN_QUESTIONS_PER_BATCH: u8 = 1;
pub const MAX_QUESTIONS_PER_BATCH: u8 = 10;

/// 忙碌标记的作用域守卫
///
/// 成功、失败、panic 展开都会经过 Drop，标记一定被清除
struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag: flag.clone() }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// 生成控制器
///
/// 独占持有 GenerationSession；保存门闸通过 `session_mut()` 读写会话
pub struct GenerationController {
    store: Arc<dyn QuestionStore>,
    notifier: Arc<dyn NotificationPort>,
    session: GenerationSession,
    generating: Arc<AtomicBool>,
    verbose_logging: bool,
}

impl GenerationController {
    /// 创建新的生成控制器
    pub fn new(
        config: &Config,
        store: Arc<dyn QuestionStore>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            store,
            notifier,
            session: GenerationSession::new(),
            generating: Arc::new(AtomicBool::new(false)),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 当前是否有生成请求在途（给界面的忙碌指示，不是互斥锁）
    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    pub fn session(&self) -> &GenerationSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GenerationSession {
        &mut self.session
    }

    /// 为指定岗位生成一批面试题
    ///
    /// # 参数
    /// - `job_title`: 岗位名称（首尾空白会被去除）
    /// - `count`: 题目数量，必须在 [1, 10] 内
    ///
    /// # 返回
    /// 返回本次生成的题目数量
    ///
    /// 校验失败时不发起任何网络请求；生成失败时上一个会话保持不变
    pub async fn generate(&mut self, job_title: &str, count: u8) -> AppResult<usize> {
        let job_title = job_title.trim();
        if job_title.is_empty() {
            return Err(self.report(AppError::Validation(ValidationError::EmptyJobTitle)));
        }
        if !(MIN_QUESTIONS_PER_BATCH..=MAX_QUESTIONS_PER_BATCH).contains(&count) {
            return Err(self.report(AppError::Validation(ValidationError::CountOutOfRange {
                count,
                min: MIN_QUESTIONS_PER_BATCH,
                max: MAX_QUESTIONS_PER_BATCH,
            })));
        }

        let _busy = BusyGuard::acquire(&self.generating);

        info!("🔍 正在为「{}」生成 {} 道面试题...", job_title, count);

        let questions = match self.store.generate(job_title, count).await {
            Ok(questions) => questions,
            Err(e) => return Err(self.report(e)),
        };

        let generated = questions.len();

        if self.verbose_logging {
            for (i, q) in questions.iter().enumerate() {
                info!("  {}. [{}] {}", i + 1, q.question_type, q.text);
            }
        }

        // 成功后整体替换会话，保存标记无条件回到 false
        self.session.replace(QuestionBatch {
            job_title: job_title.to_string(),
            questions,
        });

        info!("✓ 生成完成，共 {} 道题目", generated);
        self.notifier.notify(
            Severity::Success,
            &format!("已为「{}」生成 {} 道题目", job_title, generated),
        );

        Ok(generated)
    }

    fn report(&self, err: AppError) -> AppError {
        self.notifier.notify(Severity::Error, &err.to_string());
        err
    }
}
