/// 页头导航目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// 浏览题目
    Review,
    /// 新增题目
    Add,
    /// 测验
    Quiz,
}

static NAV_BY_LABEL: phf::Map<&'static str, NavTarget> = phf::phf_map! {
    "review" => NavTarget::Review,
    "add" => NavTarget::Add,
    "quiz" => NavTarget::Quiz,
};

impl NavTarget {
    /// 页头上依次显示的目标
    pub const ALL: [NavTarget; 3] = [NavTarget::Review, NavTarget::Add, NavTarget::Quiz];

    /// 显示名称
    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Review => "Review",
            NavTarget::Add => "Add",
            NavTarget::Quiz => "Quiz",
        }
    }

    /// 站内路径
    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Review => "",
            NavTarget::Add => "/add",
            NavTarget::Quiz => "/play",
        }
    }

    /// 从显示名称解析（不区分大小写）
    pub fn from_label(label: &str) -> Option<Self> {
        NAV_BY_LABEL.get(label.trim().to_lowercase().as_str()).copied()
    }

    /// 完整跳转地址
    pub fn url(self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }
}

/// 页头文本
pub fn header_line() -> String {
    NavTarget::ALL
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(" | ")
}
