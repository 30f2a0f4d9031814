use crate::config::Config;
use clap::{Parser, Subcommand};

/// 题库浏览客户端
#[derive(Parser, Debug)]
#[command(name = "trivia_review", version, about = "Review, add and play trivia questions")]
pub struct Cli {
    /// 后端地址
    #[arg(long, env = "TRIVIA_API_BASE_URL")]
    pub base_url: Option<String>,

    /// 前端页面地址（页头导航）
    #[arg(long, env = "TRIVIA_FRONTEND_URL")]
    pub frontend_url: Option<String>,

    /// 请求超时（秒）
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// 显示详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// 身份认证环境文件（TOML）
    #[arg(long, env = "AUTH_ENV_FILE")]
    pub env_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 浏览、筛选、删除题目（默认）
    Review,
    /// 新增一道题目
    Add {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
        #[arg(long, default_value_t = 1)]
        difficulty: u8,
        #[arg(long, default_value_t = 1)]
        category: i64,
    },
    /// 开始一轮测验
    Quiz {
        /// 分类 id，不填则不限分类
        #[arg(long)]
        category: Option<i64>,
    },
    /// 打印身份认证登录链接
    AuthLink {
        #[arg(long, default_value = "")]
        callback_path: String,
    },
}

impl Cli {
    /// 命令行参数覆盖环境变量配置
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api_base_url = base_url.clone();
        }
        if let Some(frontend_url) = &self.frontend_url {
            config.frontend_url = frontend_url.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.request_timeout_secs = timeout;
        }
        if self.verbose {
            config.verbose_logging = true;
        }
        if let Some(env_file) = &self.env_file {
            config.auth_env_file = Some(env_file.clone());
        }
    }

    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Review)
    }
}
