//! # Trivia Review
//!
//! 题库后端的浏览客户端：分页浏览、按分类筛选、搜索、删除题目，
//! 以及新增题目和测验。
//!
//! ## 架构设计
//!
//! ### ① 接入层（Clients）
//! - `clients/` - `TriviaApi` 描述后端能力，`TriviaClient` 基于 reqwest 实现
//!
//! ### ② 状态层（Browser）
//! - `browser/` - 浏览器状态与状态转换，每个列表请求带序号，过期响应直接丢弃
//!
//! ### ③ 业务能力层（Services）
//! - `QuizSession` - 测验流程
//! - `QuestionForm` - 新增题目校验与提交
//!
//! ### ④ 展示层（View / Console）
//! - `view/` - 页头导航、翻转卡片、页面渲染
//! - `console` - 标准输入与后台结果的统一事件通道
//!
//! ## 模块结构

pub mod app;
pub mod browser;
pub mod cli;
pub mod clients;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_support;

// 重新导出常用类型
pub use app::App;
pub use browser::{BrowserState, FilterMode, LoadOutcome, LoadRequest, QuestionBrowser};
pub use clients::{TriviaApi, TriviaClient};
pub use config::Config;
pub use error::{ApiError, AppError, AppResult};
pub use models::{AuthEnvironment, Category, Question, QuestionList};
