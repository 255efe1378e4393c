use serde::{Deserialize, Serialize};
use std::fmt;

/// 题目类型
///
/// 线上协议只认 `technical` / `behavioral` 两个小写字符串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Technical,
    Behavioral,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Technical => write!(f, "technical"),
            QuestionType::Behavioral => write!(f, "behavioral"),
        }
    }
}

/// 单道面试题
///
/// 创建后不可变；在批次内以位置作为标识，持久化后由题库分配ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(rename = "question")]
    pub text: String,
}

/// 一次生成调用的产物（尚未持久化的批次）
///
/// 只存在于生成控制器中，保存或被新批次替换后即消亡
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBatch {
    pub job_title: String,
    pub questions: Vec<Question>,
}

impl QuestionBatch {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// 题库中已持久化的一组题目
///
/// 题库不保证岗位名称唯一，同名集合可能同时存在多个；
/// 题库侧的ID对本层不可见，列表接口只返回岗位名称和题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub job_title: String,
    pub questions: Vec<Question>,
}
