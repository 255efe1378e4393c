use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 本地校验错误（未发起任何网络请求）
    Validation(ValidationError),
    /// 传输层错误（请求本身没有完成）
    Transport(TransportError),
    /// 远端题库错误（请求完成，但题库返回了非成功状态）
    Store(StoreError),
    /// 配置错误
    Config(ConfigError),
    /// 重复保存同一批次
    DuplicateSave { job_title: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "校验错误: {}", e),
            AppError::Transport(e) => write!(f, "传输错误: {}", e),
            AppError::Store(e) => write!(f, "题库错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::DuplicateSave { job_title } => {
                write!(f, "「{}」的当前批次已保存过，请先重新生成", job_title)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Transport(e) => Some(e),
            AppError::Store(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::DuplicateSave { .. } => None,
        }
    }
}

/// 本地校验错误
///
/// 这些错误在任何网络请求之前就被拦截
#[derive(Debug)]
pub enum ValidationError {
    /// 岗位名称为空（去除首尾空白后）
    EmptyJobTitle,
    /// 题目数量超出范围
    CountOutOfRange { count: u8, min: u8, max: u8 },
    /// 题目ID不是正整数
    NonPositiveId { id: i64 },
    /// 当前没有可保存的题目批次
    EmptyBatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyJobTitle => write!(f, "岗位名称不能为空"),
            ValidationError::CountOutOfRange { count, min, max } => {
                write!(f, "题目数量 {} 超出范围 [{}, {}]", count, min, max)
            }
            ValidationError::NonPositiveId { id } => {
                write!(f, "题目ID {} 无效，必须为正整数", id)
            }
            ValidationError::EmptyBatch => write!(f, "当前没有可保存的题目批次"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// 传输层错误
#[derive(Debug)]
pub enum TransportError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 响应体无法解析
    InvalidResponse {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::RequestFailed { endpoint, source } => {
                write!(f, "请求失败 ({}): {}", endpoint, source)
            }
            TransportError::InvalidResponse { endpoint, source } => {
                write!(f, "响应解析失败 ({}): {}", endpoint, source)
            }
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::RequestFailed { source, .. }
            | TransportError::InvalidResponse { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 远端题库错误
///
/// 请求已完成，题库返回非成功状态；`detail` 原样携带题库给出的说明
#[derive(Debug)]
pub enum StoreError {
    /// 生成题目被拒绝
    Generation { status: u16, detail: String },
    /// 删除操作被拒绝
    Deletion { status: u16, detail: String },
    /// 统计信息获取失败
    StatsFetch { status: u16, detail: String },
    /// 其他接口返回非成功状态
    Server {
        endpoint: String,
        status: u16,
        detail: String,
    },
}

impl StoreError {
    /// 题库给出的原始说明文本
    pub fn detail(&self) -> &str {
        match self {
            StoreError::Generation { detail, .. }
            | StoreError::Deletion { detail, .. }
            | StoreError::StatsFetch { detail, .. }
            | StoreError::Server { detail, .. } => detail,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Generation { status, detail } => {
                write!(f, "生成题目被拒绝 (状态码: {}): {}", status, detail)
            }
            StoreError::Deletion { status, detail } => {
                write!(f, "删除操作被拒绝 (状态码: {}): {}", status, detail)
            }
            StoreError::StatsFetch { status, detail } => {
                write!(f, "统计信息获取失败 (状态码: {}): {}", status, detail)
            }
            StoreError::Server {
                endpoint,
                status,
                detail,
            } => {
                write!(
                    f,
                    "接口返回非成功状态 ({}, 状态码: {}): {}",
                    endpoint, status, detail
                )
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 题库服务地址无法解析
    InvalidBaseUrl { url: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { url, reason } => {
                write!(f, "题库服务地址 '{}' 无法解析: {}", url, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_default();
        AppError::Transport(TransportError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建网络请求失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Transport(TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建响应解析失败错误
    pub fn invalid_response(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Transport(TransportError::InvalidResponse {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建服务地址配置错误
    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Config(ConfigError::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
