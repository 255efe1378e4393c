/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 远端题库服务地址
    pub store_api_base_url: String,
    /// 省略数量时默认生成的题目数
    pub default_num_questions: u8,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_api_base_url: "http://localhost:8000".to_string(),
            default_num_questions: 2,
            verbose_logging: false,
            output_log_file: "session.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            store_api_base_url: std::env::var("STORE_API_BASE_URL").unwrap_or(default.store_api_base_url),
            default_num_questions: std::env::var("DEFAULT_NUM_QUESTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.default_num_questions),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
