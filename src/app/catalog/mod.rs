//! 目录应用：条目模型、只读服务和 HTTP 处理器

pub mod handler;
pub mod model;
pub mod service;

pub use model::{Catalog, Item};
pub use service::CatalogService;
