//! 单元测试用的内存后端与提示实现

use crate::browser::UserPrompt;
use crate::clients::TriviaApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Category, NewQuestion, Question, QuestionList, QuizRequest, PAGE_SIZE,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// 内存后端，分页与筛选规则与真实后端一致
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub questions: Vec<Question>,
    pub categories: Vec<Category>,
    /// 收到的请求，格式同 `TriviaClient` 的 endpoint
    pub calls: Vec<String>,
    /// 为 true 时所有请求失败
    pub fail: bool,
    next_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<FakeBackend>>,
}

pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("answer {}", id),
        category,
        difficulty: 1,
    }
}

impl FakeApi {
    /// `count` 道题，轮流分到 1 号和 2 号分类
    pub fn with_questions(count: i64) -> Self {
        let questions = (1..=count)
            .map(|id| question(id, &format!("Question number {}", id), 1 + (id + 1) % 2))
            .collect();
        Self::with_data(
            questions,
            vec![Category::new(1, "Science"), Category::new(2, "Art")],
        )
    }

    pub fn with_data(questions: Vec<Question>, categories: Vec<Category>) -> Self {
        let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(FakeBackend {
                questions,
                categories,
                next_id,
                ..FakeBackend::default()
            })),
        }
    }

    pub fn backend(&self) -> MutexGuard<'_, FakeBackend> {
        self.inner.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.backend().calls.clone()
    }

    pub fn set_failing(&self, fail: bool) {
        self.backend().fail = fail;
    }

    fn record(&self, endpoint: String) -> ApiResult<MutexGuard<'_, FakeBackend>> {
        let mut backend = self.backend();
        backend.calls.push(endpoint.clone());
        if backend.fail {
            return Err(ApiError::BadStatus {
                endpoint,
                status: 500,
                message: Some("Internal Server Error".to_string()),
            });
        }
        Ok(backend)
    }
}

fn not_found(endpoint: String) -> ApiError {
    ApiError::BadStatus {
        endpoint,
        status: 404,
        message: Some("Resource Not Found".to_string()),
    }
}

fn paginate(selection: &[Question], page: u32) -> Vec<Question> {
    selection
        .iter()
        .skip((page.saturating_sub(1) as usize) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}

impl TriviaApi for FakeApi {
    async fn list_questions(&self, page: u32) -> ApiResult<QuestionList> {
        let endpoint = format!("GET /questions?page={}", page);
        let backend = self.record(endpoint.clone())?;
        let questions = paginate(&backend.questions, page);
        if questions.is_empty() {
            return Err(not_found(endpoint));
        }
        Ok(QuestionList {
            questions,
            total_questions: backend.questions.len(),
            categories: Some(backend.categories.clone()),
            current_category: None,
        })
    }

    async fn questions_by_category(&self, category_id: i64, page: u32) -> ApiResult<QuestionList> {
        let endpoint = format!("GET /categories/{}/questions?page={}", category_id, page);
        let backend = self.record(endpoint.clone())?;
        let selection: Vec<Question> = backend
            .questions
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect();
        if selection.is_empty() {
            return Err(not_found(endpoint));
        }
        Ok(QuestionList {
            questions: paginate(&selection, page),
            total_questions: selection.len(),
            categories: Some(backend.categories.clone()),
            current_category: Some(category_id),
        })
    }

    async fn search_questions(&self, term: &str, page: u32) -> ApiResult<QuestionList> {
        let endpoint = format!("POST /questions/search?page={} {}", page, term);
        let backend = self.record(endpoint.clone())?;
        if term.is_empty() {
            return Err(not_found(endpoint));
        }
        let needle = term.to_lowercase();
        let selection: Vec<Question> = backend
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(QuestionList {
            questions: paginate(&selection, page),
            total_questions: selection.len(),
            categories: None,
            current_category: None,
        })
    }

    async fn delete_question(&self, id: i64) -> ApiResult<()> {
        let endpoint = format!("DELETE /questions/{}", id);
        let mut backend = self.record(endpoint.clone())?;
        let before = backend.questions.len();
        backend.questions.retain(|q| q.id != id);
        if backend.questions.len() == before {
            return Err(not_found(endpoint));
        }
        Ok(())
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let backend = self.record("GET /categories".to_string())?;
        Ok(backend.categories.clone())
    }

    async fn create_question(&self, new: &NewQuestion) -> ApiResult<i64> {
        let mut backend = self.record("POST /questions".to_string())?;
        let id = backend.next_id;
        backend.next_id += 1;
        backend.questions.push(Question {
            id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        });
        Ok(id)
    }

    async fn next_quiz_question(&self, request: &QuizRequest) -> ApiResult<Option<Question>> {
        let backend = self.record("POST /quizzes".to_string())?;
        let category = request.quiz_category.id;
        Ok(backend
            .questions
            .iter()
            .filter(|q| category == 0 || q.category == category)
            .find(|q| !request.previous_questions.contains(&q.id))
            .cloned())
    }
}

/// 记录提示、按预设回答确认的用户
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub alerts: Vec<String>,
    pub confirms: Vec<String>,
    pub answers: VecDeque<bool>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl UserPrompt for ScriptedPrompt {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    async fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
