//! 条目拉取

use std::time::Duration;

use tracing::{debug, warn};

use super::transport::Transport;
use crate::app::catalog::Item;

/// 客户端请求的唯一接口
pub const ITEMS_PATH: &str = "/api/items";

/// 拉取失败的原因，`Display` 即展示给用户的错误文本
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// 请求 `/api/items`，校验状态码后解码正文
pub async fn fetch_items<T>(transport: &T) -> Result<Vec<Item>, FetchError>
where
    T: Transport + ?Sized,
{
    let response = transport.get(ITEMS_PATH).await?;

    if !response.is_success() {
        warn!("拉取条目失败，状态码: {}", response.status);
        return Err(FetchError::Http(response.status));
    }

    let items: Vec<Item> =
        serde_json::from_slice(&response.body).map_err(|e| FetchError::Decode(e.to_string()))?;
    debug!("拉取到 {} 个条目", items.len());

    Ok(items)
}

/// 带可选超时的拉取
pub async fn fetch_items_within<T>(
    transport: &T,
    timeout: Option<Duration>,
) -> Result<Vec<Item>, FetchError>
where
    T: Transport + ?Sized,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fetch_items(transport))
            .await
            .unwrap_or(Err(FetchError::Timeout(limit))),
        None => fetch_items(transport).await,
    }
}
