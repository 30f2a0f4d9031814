//! 文本界面展示
//!
//! - `header` - 页头导航
//! - `question_card` - 翻转卡片

pub mod header;
pub mod question_card;

pub use header::{header_line, NavTarget};
pub use question_card::{highlight_matches, CardAction, QuestionCard};

use crate::browser::{pagination_line, BrowserState, FilterMode, PageControl};

/// 为当前页的题目生成卡片
pub fn cards_for(state: &BrowserState) -> Vec<QuestionCard> {
    state
        .questions
        .iter()
        .map(|q| QuestionCard::new(q.clone(), state.category_label(q.category)))
        .collect()
}

/// 渲染浏览页面
pub fn render_review(
    state: &BrowserState,
    cards: &[QuestionCard],
    controls: &[PageControl],
) -> String {
    let mut lines = vec![header_line(), "─".repeat(60)];

    let categories = state
        .categories
        .iter()
        .map(|c| {
            if state.category_filter() == Some(c.id) {
                format!("[{}:{}]", c.id, c.kind)
            } else {
                format!("{}:{}", c.id, c.kind)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!("Categories: {}", categories));

    lines.push(match &state.filter {
        FilterMode::Unfiltered => "Questions".to_string(),
        FilterMode::ByCategory(id) => format!("Questions in {}", state.category_label(*id)),
        FilterMode::BySearch(term) => format!("Questions matching \"{}\"", term),
    });

    if cards.is_empty() {
        lines.push("  (no questions)".to_string());
    }
    for card in cards {
        lines.extend(card.render(state.search_term()));
    }

    lines.push(format!(
        "Page {} of {} ({} questions): {}",
        state.page,
        state.page_count(),
        state.total_questions,
        pagination_line(controls)
    ));
    lines.join("\n")
}
