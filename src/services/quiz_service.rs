//! 测验服务
//!
//! 每轮最多 5 题，题目由后端随机挑选且不重复。

use crate::clients::TriviaApi;
use crate::error::ApiResult;
use crate::models::{Category, Question, QuizCategory, QuizRequest};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

/// 每轮题目数
pub const QUESTIONS_PER_PLAY: usize = 5;

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.,/#!$%\^&*;:{}=\-_`~()]").expect("punctuation pattern is valid")
});

/// 一次作答的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub correct: bool,
    pub answer: String,
}

/// 一轮测验
#[derive(Debug, Clone)]
pub struct QuizSession {
    category: QuizCategory,
    previous_questions: Vec<i64>,
    current: Option<Question>,
    num_correct: usize,
    finished: bool,
}

impl QuizSession {
    /// `category` 为 `None` 时不限分类
    pub fn new(category: Option<&Category>) -> Self {
        Self {
            category: category.map(QuizCategory::from).unwrap_or_else(QuizCategory::all),
            previous_questions: Vec::new(),
            current: None,
            num_correct: 0,
            finished: false,
        }
    }

    pub fn category(&self) -> &QuizCategory {
        &self.category
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn score(&self) -> usize {
        self.num_correct
    }

    /// 已出题数
    pub fn asked(&self) -> usize {
        self.previous_questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// 取下一题；题数已满或后端没有更多题目时结束
    pub async fn next_question<A: TriviaApi>(&mut self, api: &A) -> ApiResult<Option<&Question>> {
        if self.finished || self.asked() >= QUESTIONS_PER_PLAY {
            self.finish();
            return Ok(None);
        }

        let request = QuizRequest {
            previous_questions: self.previous_questions.clone(),
            quiz_category: self.category.clone(),
        };

        match api.next_quiz_question(&request).await? {
            Some(question) => {
                debug!("测验第 {} 题: #{}", self.asked() + 1, question.id);
                self.previous_questions.push(question.id);
                self.current = Some(question);
                Ok(self.current.as_ref())
            }
            None => {
                self.finish();
                Ok(None)
            }
        }
    }

    /// 对当前题目作答，没有当前题目时返回 `None`
    pub fn submit_guess(&mut self, guess: &str) -> Option<GuessResult> {
        let question = self.current.take()?;
        let correct = is_correct_guess(guess, &question.answer);
        if correct {
            self.num_correct += 1;
        }
        Some(GuessResult {
            correct,
            answer: question.answer,
        })
    }

    fn finish(&mut self) {
        if !self.finished {
            info!(
                "🏁 测验结束: 答对 {}/{}",
                self.num_correct,
                self.previous_questions.len()
            );
        }
        self.finished = true;
        self.current = None;
    }
}

/// 去掉标点、转小写后，与答案中的某个词或整个答案相同即为正确
pub fn is_correct_guess(guess: &str, answer: &str) -> bool {
    let guess = normalize(guess);
    if guess.is_empty() {
        return false;
    }
    let answer = answer.to_lowercase();
    answer.split_whitespace().any(|word| word == guess) || normalize(&answer) == guess
}

fn normalize(text: &str) -> String {
    PUNCTUATION.replace_all(text.trim(), "").to_lowercase()
}
