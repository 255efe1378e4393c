/// 题库 API 客户端
///
/// 封装所有与远端题库相关的 HTTP/JSON 调用
use crate::config::Config;
use crate::error::{AppError, AppResult, StoreError};
use crate::models::{Question, QuestionBatch, QuestionSet, Stats};
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 远端题库能力
///
/// 所有控制器都通过这个抽象访问题库，方便在测试中注入假实现
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// 为指定岗位生成一批面试题
    async fn generate(&self, job_title: &str, num_questions: u8) -> AppResult<Vec<Question>>;

    /// 拉取题库中全部已保存的题目集合
    async fn list_all(&self) -> AppResult<Vec<QuestionSet>>;

    /// 保存一个批次，返回题库确认的保存数量
    async fn create(&self, batch: &QuestionBatch) -> AppResult<usize>;

    /// 按岗位名称删除，返回题库给出的确认消息
    async fn delete_by_job_title(&self, job_title: &str) -> AppResult<String>;

    /// 按题目ID删除，返回题库给出的确认消息
    async fn delete_by_id(&self, id: i64) -> AppResult<String>;

    /// 获取聚合统计快照
    async fn fetch_stats(&self) -> AppResult<Stats>;
}

// ========== 请求 / 响应体 ==========

#[derive(Serialize)]
struct GenerateRequest<'a> {
    job_title: &'a str,
    num_questions: u8,
}

#[derive(Deserialize)]
struct GenerateResponse {
    // 题库可能附带 job_title / id 等额外字段，这里只取题目列表
    questions: Vec<Question>,
}

#[derive(Serialize)]
struct CreateRequest<'a> {
    job_title: &'a str,
    questions: &'a [Question],
}

#[derive(Deserialize)]
struct CreateResponse {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct MessageResponse {
    message: String,
}

/// 题库 API 客户端
pub struct HttpStoreClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpStoreClient {
    /// 创建新的题库客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let base_url = Url::parse(&config.store_api_base_url)
            .map_err(|e| AppError::invalid_base_url(&config.store_api_base_url, e.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::invalid_base_url(
                &config.store_api_base_url,
                "不是有效的 HTTP 地址",
            ));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// 拼接接口地址
    ///
    /// 动态片段（岗位名称、题目ID）按路径段编码，含 `/` 的岗位名也安全
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl QuestionStore for HttpStoreClient {
    async fn generate(&self, job_title: &str, num_questions: u8) -> AppResult<Vec<Question>> {
        let url = self.endpoint(&["api", "questions", "generate"]);
        let request = GenerateRequest {
            job_title,
            num_questions,
        };

        debug!("生成请求: 岗位={} 数量={}", job_title, num_questions);

        let response = self
            .http
            .post(url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url.as_str(), e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = read_detail(response).await;
            return Err(AppError::Store(StoreError::Generation { status, detail }));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::invalid_response(url.as_str(), e))?;

        debug!("生成完成: 返回 {} 道题目", body.questions.len());

        Ok(body.questions)
    }

    async fn list_all(&self) -> AppResult<Vec<QuestionSet>> {
        let url = self.endpoint(&["api", "questions"]);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::request_failed(url.as_str(), e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = read_detail(response).await;
            return Err(AppError::Store(StoreError::Server {
                endpoint: url.to_string(),
                status,
                detail,
            }));
        }

        let sets: Vec<QuestionSet> = response
            .json()
            .await
            .map_err(|e| AppError::invalid_response(url.as_str(), e))?;

        Ok(sets)
    }

    async fn create(&self, batch: &QuestionBatch) -> AppResult<usize> {
        let url = self.endpoint(&["api", "questions"]);
        let request = CreateRequest {
            job_title: &batch.job_title,
            questions: &batch.questions,
        };

        debug!("保存批次: 岗位={} 数量={}", batch.job_title, batch.len());

        let response = self
            .http
            .post(url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url.as_str(), e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = read_detail(response).await;
            return Err(AppError::Store(StoreError::Server {
                endpoint: url.to_string(),
                status,
                detail,
            }));
        }

        let body: CreateResponse = response
            .json()
            .await
            .map_err(|e| AppError::invalid_response(url.as_str(), e))?;

        // 题库确认的保存数量就是响应中题目列表的长度
        Ok(body.questions.len())
    }

    async fn delete_by_job_title(&self, job_title: &str) -> AppResult<String> {
        let url = self.endpoint(&["api", "questions", job_title]);

        debug!("按岗位删除: {}", job_title);

        let response = self
            .http
            .delete(url.clone())
            .send()
            .await
            .map_err(|e| AppError::request_failed(url.as_str(), e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = read_detail(response).await;
            return Err(AppError::Store(StoreError::Deletion { status, detail }));
        }

        let body: MessageResponse = response
            .json()
            .await
            .map_err(|e| AppError::invalid_response(url.as_str(), e))?;

        Ok(body.message)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<String> {
        let url = self.endpoint(&["api", "question", &id.to_string()]);

        debug!("按ID删除: {}", id);

        let response = self
            .http
            .delete(url.clone())
            .send()
            .await
            .map_err(|e| AppError::request_failed(url.as_str(), e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = read_detail(response).await;
            return Err(AppError::Store(StoreError::Deletion { status, detail }));
        }

        let body: MessageResponse = response
            .json()
            .await
            .map_err(|e| AppError::invalid_response(url.as_str(), e))?;

        Ok(body.message)
    }

    async fn fetch_stats(&self) -> AppResult<Stats> {
        let url = self.endpoint(&["api", "stats"]);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::request_failed(url.as_str(), e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = read_detail(response).await;
            return Err(AppError::Store(StoreError::StatsFetch { status, detail }));
        }

        let stats: Stats = response
            .json()
            .await
            .map_err(|e| AppError::invalid_response(url.as_str(), e))?;

        Ok(stats)
    }
}

/// 从非成功响应中提取说明文本
///
/// 题库用 `{"detail": ...}` 包裹错误说明；解析不出来时退回原始响应体，
/// 响应体也读不到时退回 HTTP 状态行
async fn read_detail(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => detail_from_body(&body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            }
        }),
        Err(_) => status.to_string(),
    }
}

fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
