use crate::error::ConfigError;
use crate::models::environment::AuthEnvironment;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载身份认证环境
pub async fn load_auth_environment(path: &Path) -> Result<AuthEnvironment, ConfigError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

    let env = parse_auth_environment(&content).map_err(|source| ConfigError::TomlParseFailed {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!("已加载认证环境: {}", path.display());
    Ok(env)
}

/// 解析 TOML 文本
pub fn parse_auth_environment(content: &str) -> Result<AuthEnvironment, toml::de::Error> {
    toml::from_str(content)
}

/// 有路径则读取文件，否则使用内置默认值
pub async fn load_or_default(path: Option<&str>) -> Result<AuthEnvironment, ConfigError> {
    match path {
        Some(path) => load_auth_environment(Path::new(path)).await,
        None => Ok(AuthEnvironment::default()),
    }
}
