//! 浏览器状态（Model）
//!
//! 状态只会被整体替换：每次成功加载都由 `BrowserState::apply` 生成新状态。

use crate::models::{Category, Question, QuestionList, PAGE_SIZE};
use crate::utils::truncate_text;
use std::fmt;

/// 当前的筛选方式
///
/// 分类筛选与搜索互斥，用枚举表示后不存在两者同时生效的状态。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Unfiltered,
    ByCategory(i64),
    BySearch(String),
}

/// 一次列表请求：筛选方式 + 页码（从 1 开始）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub filter: FilterMode,
    pub page: u32,
}

impl LoadRequest {
    pub fn unfiltered(page: u32) -> Self {
        Self {
            filter: FilterMode::Unfiltered,
            page,
        }
    }

    pub fn by_category(category_id: i64, page: u32) -> Self {
        Self {
            filter: FilterMode::ByCategory(category_id),
            page,
        }
    }

    pub fn by_search(term: impl Into<String>, page: u32) -> Self {
        Self {
            filter: FilterMode::BySearch(term.into()),
            page,
        }
    }
}

impl fmt::Display for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            FilterMode::Unfiltered => write!(f, "[全部 第{}页]", self.page),
            FilterMode::ByCategory(id) => write!(f, "[分类#{} 第{}页]", id, self.page),
            FilterMode::BySearch(term) => {
                write!(f, "[搜索\"{}\" 第{}页]", truncate_text(term, 30), self.page)
            }
        }
    }
}

/// 请求序号
///
/// 只有最新发出的请求的结果会被应用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 题目浏览器状态
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    pub page: u32,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub filter: FilterMode,
    pub questions: Vec<Question>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            page: 1,
            total_questions: 0,
            categories: Vec::new(),
            filter: FilterMode::Unfiltered,
            questions: Vec::new(),
        }
    }
}

impl BrowserState {
    /// 根据成功的响应生成新状态
    ///
    /// 响应不带分类列表（搜索接口）时沿用当前分类。
    pub fn apply(&self, request: &LoadRequest, list: QuestionList) -> BrowserState {
        BrowserState {
            page: request.page,
            total_questions: list.total_questions,
            categories: list
                .categories
                .unwrap_or_else(|| self.categories.clone()),
            filter: request.filter.clone(),
            questions: list.questions,
        }
    }

    /// 总页数 = ceil(total / 10)
    pub fn page_count(&self) -> u32 {
        page_count(self.total_questions)
    }

    pub fn category_filter(&self) -> Option<i64> {
        match self.filter {
            FilterMode::ByCategory(id) => Some(id),
            _ => None,
        }
    }

    pub fn search_term(&self) -> Option<&str> {
        match &self.filter {
            FilterMode::BySearch(term) => Some(term),
            _ => None,
        }
    }

    /// 按 id 查找分类名称
    pub fn category_label(&self, category_id: i64) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.kind.as_str())
            .unwrap_or("Unknown")
    }
}

/// 题目总数对应的页数
pub fn page_count(total_questions: usize) -> u32 {
    total_questions.div_ceil(PAGE_SIZE) as u32
}
