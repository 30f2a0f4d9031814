//! 新增题目表单

use crate::clients::TriviaApi;
use crate::error::{AppResult, FormError};
use crate::models::{Category, NewQuestion};
use tracing::info;

/// 新增题目表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionForm {
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: i64,
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            difficulty: 1,
            category: 1,
        }
    }
}

impl QuestionForm {
    /// 校验表单，分类必须是已知分类之一
    pub fn validate(&self, categories: &[Category]) -> Result<NewQuestion, FormError> {
        let question = self.question.trim();
        let answer = self.answer.trim();

        if question.is_empty() {
            return Err(FormError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(FormError::EmptyAnswer);
        }
        if !(1..=5).contains(&self.difficulty) {
            return Err(FormError::DifficultyOutOfRange(self.difficulty));
        }
        if !categories.iter().any(|c| c.id == self.category) {
            return Err(FormError::UnknownCategory(self.category));
        }

        Ok(NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            difficulty: self.difficulty,
            category: self.category,
        })
    }

    /// 校验并提交，返回新题目 id
    pub async fn submit<A: TriviaApi>(&self, api: &A, categories: &[Category]) -> AppResult<i64> {
        let new_question = self.validate(categories)?;
        let id = api.create_question(&new_question).await?;
        info!("✓ 已新增题目 #{}", id);
        Ok(id)
    }
}
