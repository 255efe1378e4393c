//! 通知服务 - 业务能力层
//!
//! 只负责"把一条结果告诉用户"能力，不关心流程；
//! 核心逻辑只决定通知的内容和时机，呈现方式由具体实现决定

use std::fs::OpenOptions;
use std::io::Write;
use tracing::error;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// 操作成功
    Success,
    /// 提示（不是错误，例如列表为空）
    Notice,
    /// 操作失败
    Error,
}

/// 用户可见通知能力
pub trait NotificationPort: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// 会话通知器
///
/// 职责：
/// - 把通知打印到终端（弹窗/横幅在命令行下的等价物）
/// - 同时追加写入会话日志文件，方便事后回看
/// - 写文件失败只记日志，不打断业务流程
pub struct SessionNotifier {
    log_file_path: String,
}

impl SessionNotifier {
    pub fn new() -> Self {
        Self {
            log_file_path: "session.txt".to_string(),
        }
    }

    /// 使用自定义日志文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            log_file_path: path.into(),
        }
    }

    fn append_to_log(&self, line: &str) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        if let Err(e) = result {
            error!("写入会话日志失败 ({}): {}", self.log_file_path, e);
        }
    }
}

impl NotificationPort for SessionNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        let prefix = match severity {
            Severity::Success => "✅",
            Severity::Notice => "⚠️",
            Severity::Error => "❌",
        };

        println!("{} {}", prefix, message);

        let line = format!(
            "[{}] {} {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            prefix,
            message
        );
        self.append_to_log(&line);
    }
}

impl Default for SessionNotifier {
    fn default() -> Self {
        Self::new()
    }
}
