use crate::error::ConfigError;
use std::str::FromStr;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库后端地址
    pub api_base_url: String,
    /// 前端页面地址，页头导航的跳转目标
    pub frontend_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 身份认证环境文件（TOML），为空时使用内置默认值
    pub auth_env_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            frontend_url: "http://127.0.0.1:3000".to_string(),
            request_timeout_secs: 10,
            verbose_logging: false,
            auth_env_file: None,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置的项使用默认值
    ///
    /// 地址在命令行参数覆盖之后才由 `validate` 校验。
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            api_base_url: std::env::var("TRIVIA_API_BASE_URL").unwrap_or(default.api_base_url),
            frontend_url: std::env::var("TRIVIA_FRONTEND_URL").unwrap_or(default.frontend_url),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", "u64")?
                .unwrap_or(default.request_timeout_secs),
            verbose_logging: parse_env("VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
            auth_env_file: std::env::var("AUTH_ENV_FILE").ok().or(default.auth_env_file),
        })
    }

    /// 校验后端与前端地址
    pub fn validate(&self) -> Result<(), ConfigError> {
        for url in [&self.api_base_url, &self.frontend_url] {
            reqwest::Url::parse(url).map_err(|_| ConfigError::InvalidUrl { url: url.clone() })?;
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
