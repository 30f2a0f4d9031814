use serde::{Deserialize, Serialize};

/// 每页题目数量
pub const PAGE_SIZE: usize = 10;

/// 题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_category_id")]
    pub category: i64,
    pub difficulty: u8,
}

/// 题目分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// 三个题目列表接口共用的响应结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionList {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// 搜索接口不返回分类
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub current_category: Option<i64>,
}

/// `GET /categories` 响应
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

/// 新增题目请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: i64,
}

/// `POST /questions` 响应
#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    pub created: i64,
}

/// 测验分类，id 为 0 表示全部分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl QuizCategory {
    /// 不限分类
    pub fn all() -> Self {
        Self {
            id: 0,
            kind: "click".to_string(),
        }
    }
}

impl From<&Category> for QuizCategory {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            kind: category.kind.clone(),
        }
    }
}

/// `POST /quizzes` 请求体
#[derive(Debug, Clone, Serialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// `POST /quizzes` 响应
#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: Option<Question>,
}

/// 搜索请求体
#[derive(Debug, Clone, Serialize)]
pub struct SearchBody<'a> {
    #[serde(rename = "searchTerm")]
    pub search_term: &'a str,
}

// 后端可能把分类 id 存成字符串
fn deserialize_category_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct CategoryIdVisitor;

    impl<'de> Visitor<'de> for CategoryIdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or numeric string category id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value.trim().parse().map_err(E::custom)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            i64::try_from(value).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(CategoryIdVisitor)
}
