//! 客户端传输层

use std::time::Duration;

use futures::future::BoxFuture;

use super::FetchError;

/// 一次 HTTP 请求的原始结果，正文已完整读取
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 发出 GET 请求的抽象，测试里可以替换成桩实现
pub trait Transport: Send + Sync + 'static {
    fn get<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<RawResponse, FetchError>>;
}

/// 基于 reqwest 的真实传输
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("item-catalog/{}", env!("CARGO_PKG_VERSION")))
            // 超时由挂载选项统一控制
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for ReqwestTransport {
    fn get<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<RawResponse, FetchError>> {
        Box::pin(async move {
            let url = format!("{}{}", self.base_url, path);

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            Ok(RawResponse::new(status, body.to_vec()))
        })
    }
}
