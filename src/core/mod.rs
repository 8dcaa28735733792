//! 核心层：边界错误与中间件

pub mod error;
pub mod middleware;
