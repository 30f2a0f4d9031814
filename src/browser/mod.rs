//! 题目浏览器
//!
//! - `state` - 状态与请求描述（筛选方式、页码、请求序号）
//! - `question_browser` - 状态转换与后端调用
//! - `pagination` - 分页控件
//! - `prompt` - 用户提示与确认

pub mod pagination;
pub mod prompt;
pub mod question_browser;
pub mod state;

pub use pagination::{pagination_line, render_pagination, PageControl};
pub use prompt::{UserPrompt, DELETE_CONFIRM_PROMPT, REQUEST_FAILED_NOTICE};
pub use question_browser::{fetch_page, DeleteOutcome, LoadOutcome, QuestionBrowser};
pub use state::{page_count, BrowserState, FilterMode, LoadRequest, Ticket};
