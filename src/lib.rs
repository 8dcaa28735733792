//! # 条目目录 Demo
//!
//! 两层演示系统：
//! - 服务端：基于 axum 的只读条目目录，提供 `/health`、`/api/items`、`/api/items/:id`
//! - 客户端：挂载时拉取一次目录，经历 `Loading` → `Success` / `Error` 三态生命周期并渲染结果
//! - 工具：部署成本估算

pub mod app;
pub mod client;
pub mod config;
pub mod core;
pub mod costs;
pub mod infrastructure;
pub mod server;

pub use app::catalog::{Catalog, CatalogService, Item};
pub use app::AppState;
pub use client::{CatalogView, FetchError, FetchState, MountOptions};
pub use config::{Config, ConfigError};
