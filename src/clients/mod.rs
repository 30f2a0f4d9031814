//! 题库后端客户端
//!
//! `TriviaApi` 描述后端提供的能力，`TriviaClient` 是基于 reqwest 的实现。
//! 浏览器、测验等上层逻辑只依赖 trait，测试里可以换成内存实现。

pub mod trivia_client;

pub use trivia_client::TriviaClient;

use crate::error::ApiResult;
use crate::models::{Category, NewQuestion, Question, QuestionList, QuizRequest};
use std::future::Future;

/// 题库后端能力
pub trait TriviaApi: Clone + Send + Sync + 'static {
    /// `GET /questions?page=N`
    fn list_questions(&self, page: u32) -> impl Future<Output = ApiResult<QuestionList>> + Send;

    /// `GET /categories/{id}/questions?page=N`
    fn questions_by_category(
        &self,
        category_id: i64,
        page: u32,
    ) -> impl Future<Output = ApiResult<QuestionList>> + Send;

    /// `POST /questions/search?page=N`
    fn search_questions(
        &self,
        term: &str,
        page: u32,
    ) -> impl Future<Output = ApiResult<QuestionList>> + Send;

    /// `DELETE /questions/{id}`
    fn delete_question(&self, id: i64) -> impl Future<Output = ApiResult<()>> + Send;

    /// `GET /categories`
    fn list_categories(&self) -> impl Future<Output = ApiResult<Vec<Category>>> + Send;

    /// `POST /questions`，返回新题目 id
    fn create_question(
        &self,
        question: &NewQuestion,
    ) -> impl Future<Output = ApiResult<i64>> + Send;

    /// `POST /quizzes`，题目用完时返回 `None`
    fn next_quiz_question(
        &self,
        request: &QuizRequest,
    ) -> impl Future<Output = ApiResult<Option<Question>>> + Send;
}
