use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 题库聚合统计快照
///
/// 完全由题库侧计算，本层只作为不可变快照展示；
/// `by_type` 的键保持字符串形式，不反解析成题目类型枚举
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_questions: u64,
    pub by_job_title: HashMap<String, u64>,
    pub by_type: HashMap<String, u64>,
}

impl Stats {
    /// 校验快照自身的一致性
    ///
    /// 总数必须同时等于按岗位求和与按类型求和
    pub fn is_consistent(&self) -> bool {
        let by_job_title: u64 = self.by_job_title.values().sum();
        let by_type: u64 = self.by_type.values().sum();
        self.total_questions == by_job_title && self.total_questions == by_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        {
            "total_questions": 5,
            "by_job_title": { "Backend Engineer": 3, "Data Analyst": 2 },
            "by_type": { "technical": 4, "behavioral": 1 }
        }
    "#;

    #[test]
    fn parses_store_stats_shape() {
        let stats: Stats = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(stats.total_questions, 5);
        assert_eq!(stats.by_job_title["Backend Engineer"], 3);
        assert_eq!(stats.by_type["behavioral"], 1);
    }

    #[test]
    fn fixture_snapshot_is_consistent() {
        let stats: Stats = serde_json::from_str(FIXTURE).unwrap();
        assert!(stats.is_consistent(), "总数应等于按岗位与按类型的分项之和");
    }

    #[test]
    fn inconsistent_snapshot_is_detected() {
        let mut stats: Stats = serde_json::from_str(FIXTURE).unwrap();
        stats.total_questions = 6;
        assert!(!stats.is_consistent());
    }
}
