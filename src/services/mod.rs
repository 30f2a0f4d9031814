//! 业务能力层
//!
//! - `QuizSession` - 测验流程
//! - `QuestionForm` - 新增题目

pub mod question_form;
pub mod quiz_service;

pub use question_form::QuestionForm;
pub use quiz_service::{is_correct_guess, GuessResult, QuizSession, QUESTIONS_PER_PLAY};
