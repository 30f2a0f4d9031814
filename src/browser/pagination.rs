//! 分页控件

use crate::browser::state::page_count;
use std::fmt;

/// 一个页码控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: u32,
    pub active: bool,
}

impl fmt::Display for PageControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.active {
            write!(f, "[{}]", self.number)
        } else {
            write!(f, " {} ", self.number)
        }
    }
}

/// 生成分页控件，每页一个，当前页标记为 active
pub fn render_pagination(total_questions: usize, current_page: u32) -> Vec<PageControl> {
    (1..=page_count(total_questions))
        .map(|number| PageControl {
            number,
            active: number == current_page,
        })
        .collect()
}

/// 控件的单行文本形式
pub fn pagination_line(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("")
}
