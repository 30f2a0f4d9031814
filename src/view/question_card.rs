//! 翻转卡片：正面是题目，点击后显示答案

use crate::models::Question;
use regex::RegexBuilder;

/// 卡片向上层转发的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Delete(i64),
}

/// 单道题目的卡片
#[derive(Debug, Clone)]
pub struct QuestionCard {
    question: Question,
    category_label: String,
    answer_visible: bool,
}

impl QuestionCard {
    pub fn new(question: Question, category_label: impl Into<String>) -> Self {
        Self {
            question,
            category_label: category_label.into(),
            answer_visible: false,
        }
    }

    pub fn id(&self) -> i64 {
        self.question.id
    }

    pub fn is_answer_visible(&self) -> bool {
        self.answer_visible
    }

    /// 翻面
    pub fn flip(&mut self) {
        self.answer_visible = !self.answer_visible;
    }

    pub fn delete_action(&self) -> CardAction {
        CardAction::Delete(self.question.id)
    }

    /// 渲染为文本行，`highlight` 为搜索关键字时标出匹配处
    pub fn render(&self, highlight: Option<&str>) -> Vec<String> {
        let status = format!(
            "#{} [{}] Difficulty: {}",
            self.question.id, self.category_label, self.question.difficulty
        );
        if self.answer_visible {
            vec![
                status,
                format!("  {}", self.question.answer),
                "  (Click to hide answer)".to_string(),
            ]
        } else {
            let text = match highlight {
                Some(term) => highlight_matches(&self.question.question, term),
                None => self.question.question.clone(),
            };
            vec![
                status,
                format!("  {}", text),
                "  (Click to show answer)".to_string(),
            ]
        }
    }
}

/// 用 `*...*` 标出不区分大小写的匹配
pub fn highlight_matches(text: &str, term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        return text.to_string();
    }
    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures| format!("*{}*", &caps[0]))
            .into_owned(),
        Err(_) => text.to_string(),
    }
}
