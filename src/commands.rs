//! 浏览界面的命令解析

use std::fmt;

/// 浏览界面命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCommand {
    /// 全部题目第 1 页
    All,
    /// 按分类筛选
    Category(i64),
    /// 搜索
    Search(String),
    /// 翻页
    Page(u32),
    /// 翻转卡片
    Flip(i64),
    /// 删除题目
    Delete(i64),
    /// 显示页头导航地址
    Nav(String),
    /// 重新显示当前页面
    Show,
    Help,
    Quit,
}

/// 命令解析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
commands:
  all                 show all questions
  cat <id>            show questions in a category
  search <term>       search questions
  page <n>            go to page n
  flip <id>           show/hide the answer of a question
  delete <id>         delete a question
  nav <review|add|quiz>  print the page address
  show                redraw
  help                this help
  quit                exit";

impl ReviewCommand {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" | "show" | "ls" => Ok(ReviewCommand::Show),
            "all" | "categories" => Ok(ReviewCommand::All),
            "cat" | "category" => parse_number(word, rest).map(ReviewCommand::Category),
            "search" | "s" => {
                if rest.is_empty() {
                    Err(ParseError("search needs a term".to_string()))
                } else {
                    Ok(ReviewCommand::Search(rest.to_string()))
                }
            }
            "page" | "p" => parse_number(word, rest).map(ReviewCommand::Page),
            "flip" | "f" => parse_number(word, rest).map(ReviewCommand::Flip),
            "delete" | "del" | "rm" => parse_number(word, rest).map(ReviewCommand::Delete),
            "nav" => Ok(ReviewCommand::Nav(rest.to_string())),
            "help" | "?" => Ok(ReviewCommand::Help),
            "quit" | "q" | "exit" => Ok(ReviewCommand::Quit),
            other => Err(ParseError(format!("unknown command: {}", other))),
        }
    }
}

fn parse_number<T: std::str::FromStr>(word: &str, rest: &str) -> Result<T, ParseError> {
    rest.parse()
        .map_err(|_| ParseError(format!("{} needs a number, got '{}'", word, rest)))
}
