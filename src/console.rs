//! 控制台交互
//!
//! 标准输入由后台任务逐行读取，与后台加载任务的结果一起汇入同一个事件通道。
//! 主循环按到达顺序处理事件；等待用户确认时先到的加载结果会被暂存，
//! 确认结束后再依次处理。

use crate::browser::{Ticket, UserPrompt};
use crate::error::ApiResult;
use crate::models::QuestionList;
use std::collections::VecDeque;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// 控制台事件
#[derive(Debug)]
pub enum Event {
    /// 用户输入的一行
    Line(String),
    /// 标准输入已关闭
    InputClosed,
    /// 后台加载完成
    Loaded(Ticket, ApiResult<QuestionList>),
}

/// 控制台
pub struct Console {
    sender: UnboundedSender<Event>,
    events: UnboundedReceiver<Event>,
    deferred: VecDeque<Event>,
    input_closed: bool,
}

impl Console {
    /// 创建控制台并开始读取标准输入
    pub fn spawn_stdin() -> Self {
        let console = Self::detached();
        let sender = console.sender();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if sender.send(Event::Line(line)).is_err() {
                            break;
                        }
                    }
                    Ok(None) | Err(_) => {
                        let _ = sender.send(Event::InputClosed);
                        break;
                    }
                }
            }
        });
        console
    }

    /// 不连接标准输入的控制台，输入需通过 `sender()` 送入
    pub fn detached() -> Self {
        let (sender, events) = mpsc::unbounded_channel();
        Self {
            sender,
            events,
            deferred: VecDeque::new(),
            input_closed: false,
        }
    }

    /// 事件发送端，交给后台任务使用
    pub fn sender(&self) -> UnboundedSender<Event> {
        self.sender.clone()
    }

    /// 下一个事件，优先返回暂存的事件
    pub async fn next_event(&mut self) -> Option<Event> {
        if let Some(event) = self.deferred.pop_front() {
            return Some(event);
        }
        self.events.recv().await
    }

    /// 读取下一行输入，期间到达的其他事件暂存
    pub async fn read_line(&mut self, prompt: &str) -> Option<String> {
        if self.input_closed {
            return None;
        }
        if !prompt.is_empty() {
            println!("{}", prompt);
        }

        while let Some(event) = self.events.recv().await {
            match event {
                Event::Line(line) => return Some(line),
                Event::InputClosed => {
                    // 主循环仍需收到关闭事件才能退出
                    self.input_closed = true;
                    self.deferred.push_back(Event::InputClosed);
                    return None;
                }
                other => {
                    debug!("等待输入期间暂存事件");
                    self.deferred.push_back(other);
                }
            }
        }
        None
    }
}

impl UserPrompt for Console {
    fn alert(&mut self, message: &str) {
        println!("⚠️  {}", message);
    }

    async fn confirm(&mut self, message: &str) -> bool {
        let prompt = format!("{} [y/N]", message);
        match self.read_line(&prompt).await {
            Some(answer) => is_yes(&answer),
            None => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
