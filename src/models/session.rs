use crate::models::question::QuestionBatch;

/// 生成会话
///
/// 承载"一个批次最多保存一次"不变量的实体：
/// - `saved` 对同一个批次只会经历一次 false → true
/// - 每次成功生成都会整体替换批次并把 `saved` 重置为 false，
///   即使上一个批次从未保存过，也不做任何丢弃提示
#[derive(Debug, Default)]
pub struct GenerationSession {
    batch: Option<QuestionBatch>,
    saved: bool,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前持有的批次
    pub fn batch(&self) -> Option<&QuestionBatch> {
        self.batch.as_ref()
    }

    /// 当前批次是否已保存
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// 用新生成的批次整体替换会话，无条件重置保存标记
    pub fn replace(&mut self, batch: QuestionBatch) {
        self.batch = Some(batch);
        self.saved = false;
    }

    /// 标记当前批次已保存
    pub(crate) fn mark_saved(&mut self) {
        self.saved = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Question, QuestionType};

    fn batch(job_title: &str) -> QuestionBatch {
        QuestionBatch {
            job_title: job_title.to_string(),
            questions: vec![Question {
                question_type: QuestionType::Technical,
                text: "q".to_string(),
            }],
        }
    }

    #[test]
    fn replace_resets_saved_flag() {
        let mut session = GenerationSession::new();
        session.replace(batch("A"));
        session.mark_saved();
        assert!(session.is_saved());

        // 新批次到来时无条件清除保存标记
        session.replace(batch("B"));
        assert!(!session.is_saved());
        assert_eq!(session.batch().unwrap().job_title, "B");
    }

    #[test]
    fn replace_discards_unsaved_batch_silently() {
        let mut session = GenerationSession::new();
        session.replace(batch("A"));
        assert!(!session.is_saved());

        session.replace(batch("B"));
        assert_eq!(session.batch().unwrap().job_title, "B");
        assert!(!session.is_saved());
    }
}
