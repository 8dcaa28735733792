//! 目录处理器

use axum::{
    extract::{Path, State},
    http::Uri,
    response::Json,
};
use tracing::debug;

use super::model::Item;
use crate::app::AppState;
use crate::core::error::CoreError;

/// 健康检查返回的纯文本
pub const HEALTH_MESSAGE: &str = "API Service is healthy";

pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.catalog_service.list_items())
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>, CoreError> {
    let id = parse_item_id(&raw_id)?;
    debug!("合成条目 id={}", id);
    Ok(Json(state.catalog_service.get_item(id)))
}

/// 未注册路径统一返回 JSON 错误
pub async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("未找到路径: {}", uri.path()))
}

/// 按前缀解析 id：跳过前导空白，可带符号，`0x` 前缀按十六进制，
/// 遇到第一个非数字字符即停止。没有任何数字时才拒绝。
/// 超出 `i64` 范围的值饱和到边界。
fn parse_item_id(raw: &str) -> Result<i64, CoreError> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let prefix_len = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if prefix_len == 0 {
        return Err(CoreError::BadRequest(format!("无效的条目 id: {}", raw)));
    }

    let magnitude = digits[..prefix_len]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0_i128, |acc, d| {
            acc.saturating_mul(i128::from(radix))
                .saturating_add(i128::from(d))
        });
    let value = if negative { -magnitude } else { magnitude };

    Ok(value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}
