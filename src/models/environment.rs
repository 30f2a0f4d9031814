//! 咖啡店前端的身份认证环境配置
//!
//! 只是一份静态记录，供外部认证库在会话开始时使用。

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// 前端运行环境
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthEnvironment {
    #[serde(default)]
    pub production: bool,
    /// 后端 API 地址
    pub api_server_url: String,
    pub auth0: Auth0Config,
}

/// 身份提供方配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth0Config {
    /// 域名前缀，拼成 `{url}.auth0.com`
    pub url: String,
    pub audience: String,
    pub client_id: String,
    /// 前端应用的回调地址
    #[serde(rename = "callbackURL", alias = "callbackUrl")]
    pub callback_url: String,
}

impl Default for AuthEnvironment {
    fn default() -> Self {
        Self {
            production: false,
            api_server_url: "http://127.0.0.1:5000".to_string(),
            auth0: Auth0Config {
                url: "udacity-segel.eu".to_string(),
                audience: "https://coffe-shop-api.segelmark.com".to_string(),
                client_id: "UFS1f21f11r1YF6FJmPa2L1P08Te8wy3".to_string(),
                callback_url: "http://localhost:8100".to_string(),
            },
        }
    }
}

impl AuthEnvironment {
    /// 身份提供方的完整域名
    pub fn identity_domain(&self) -> String {
        format!("{}.auth0.com", self.auth0.url)
    }

    /// 构建隐式授权登录链接
    ///
    /// # 参数
    /// - `callback_path`: 追加在回调地址后的路径，如 `/tabs/user-page`
    pub fn login_link(&self, callback_path: &str) -> Result<reqwest::Url, ConfigError> {
        let base = format!("https://{}/authorize", self.identity_domain());
        let mut url =
            reqwest::Url::parse(&base).map_err(|_| ConfigError::InvalidUrl { url: base })?;

        let redirect_uri = format!("{}{}", self.auth0.callback_url, callback_path);
        url.query_pairs_mut()
            .append_pair("audience", &self.auth0.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.auth0.client_id)
            .append_pair("redirect_uri", &redirect_uri);
        Ok(url)
    }
}
