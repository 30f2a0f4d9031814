/// 题库 API 客户端
///
/// 封装所有与题库后端的 HTTP 交互
use crate::clients::TriviaApi;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Category, CategoryList, Created, NewQuestion, Question, QuestionList, QuizQuestion,
    QuizRequest, SearchBody,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// 题库 API 客户端
///
/// 内部的 `reqwest::Client` 共享连接池，克隆开销很小。
#[derive(Clone, Debug)]
pub struct TriviaClient {
    http: Client,
    base_url: String,
}

impl TriviaClient {
    /// 创建新的题库客户端
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::request_failed(&config.api_base_url, e))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 发送请求并解析响应
    ///
    /// 非 2xx 状态、`success: false` 与解析失败都作为错误返回。
    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        builder: RequestBuilder,
    ) -> ApiResult<T> {
        debug!("➡️ 请求 {}", endpoint);

        let response = builder
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::request_failed(endpoint, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(endpoint, e))?;

        if !status.is_success() {
            return Err(ApiError::BadStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message: extract_message(&text),
            });
        }

        let value: Value =
            serde_json::from_str(&text).map_err(|e| ApiError::json_parse_failed(endpoint, e))?;

        if value.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(ApiError::Unsuccessful {
                endpoint: endpoint.to_string(),
                message: value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            });
        }

        debug!("⬅️ 响应 {} ({})", endpoint, status.as_u16());

        serde_json::from_value(value).map_err(|e| ApiError::json_parse_failed(endpoint, e))
    }
}

impl TriviaApi for TriviaClient {
    async fn list_questions(&self, page: u32) -> ApiResult<QuestionList> {
        let endpoint = format!("GET /questions?page={}", page);
        let builder = self
            .http
            .get(self.url("/questions"))
            .query(&[("page", page)]);
        self.execute(&endpoint, builder).await
    }

    async fn questions_by_category(&self, category_id: i64, page: u32) -> ApiResult<QuestionList> {
        let path = format!("/categories/{}/questions", category_id);
        let endpoint = format!("GET {}?page={}", path, page);
        let builder = self.http.get(self.url(&path)).query(&[("page", page)]);
        self.execute(&endpoint, builder).await
    }

    async fn search_questions(&self, term: &str, page: u32) -> ApiResult<QuestionList> {
        let endpoint = format!("POST /questions/search?page={}", page);
        let builder = self
            .http
            .post(self.url("/questions/search"))
            .query(&[("page", page)])
            .json(&SearchBody { search_term: term });
        self.execute(&endpoint, builder).await
    }

    async fn delete_question(&self, id: i64) -> ApiResult<()> {
        let path = format!("/questions/{}", id);
        let endpoint = format!("DELETE {}", path);
        let builder = self.http.delete(self.url(&path));
        let _: Value = self.execute(&endpoint, builder).await?;
        Ok(())
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let builder = self.http.get(self.url("/categories"));
        let list: CategoryList = self.execute("GET /categories", builder).await?;
        Ok(list.categories)
    }

    async fn create_question(&self, question: &NewQuestion) -> ApiResult<i64> {
        let builder = self.http.post(self.url("/questions")).json(question);
        let created: Created = self.execute("POST /questions", builder).await?;
        Ok(created.created)
    }

    async fn next_quiz_question(&self, request: &QuizRequest) -> ApiResult<Option<Question>> {
        let builder = self.http.post(self.url("/quizzes")).json(request);
        let quiz: QuizQuestion = self.execute("POST /quizzes", builder).await?;
        Ok(quiz.question)
    }
}

/// 提取错误响应中的 message 字段
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config {
            api_base_url: "http://localhost:5000/".to_string(),
            ..Config::default()
        };
        let client = TriviaClient::new(&config).unwrap();
        assert_eq!(client.url("/questions"), "http://localhost:5000/questions");
    }

    #[test]
    fn test_extract_message() {
        let body = r#"{"success": false, "error": 404, "message": "Resource Not Found"}"#;
        assert_eq!(extract_message(body).as_deref(), Some("Resource Not Found"));
        assert_eq!(extract_message("<html>"), None);
    }
}
