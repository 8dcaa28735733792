//! 核心中间件模块

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// 每个响应都带上的请求 id 头
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

tokio::task_local! {
    static REQUEST_ID: String;
}

/// 当前请求的 id；在中间件作用域之外生成一个新的
pub fn current_request_id() -> String {
    REQUEST_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| Uuid::new_v4().to_string())
}

/// 请求日志中间件，同时为响应附加请求 id
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let mut response = REQUEST_ID.scope(request_id.clone(), next.run(req)).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            "{} {} - {} - {}ms",
            method, path, status, elapsed_ms
        );
    } else {
        info!(
            request_id = %request_id,
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method, path, status, elapsed_ms, user_agent
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn request_id_is_visible_inside_scope() {
        let seen = REQUEST_ID
            .scope("req-1".to_string(), async { current_request_id() })
            .await;
        assert_eq!(seen, "req-1");
    }

    #[test]
    fn request_id_outside_scope_is_fresh() {
        let first = current_request_id();
        assert!(Uuid::parse_str(&first).is_ok());
        assert_ne!(first, current_request_id());
    }
}
