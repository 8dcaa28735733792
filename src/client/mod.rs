//! 目录客户端
//!
//! 挂载 [`CatalogView`] 时通过 [`Transport`] 请求一次 `/api/items`，
//! 状态从 `Loading` 转到 `Success` 或 `Error` 后不再变化。

pub mod fetch;
pub mod render;
pub mod state;
pub mod transport;
pub mod view;

pub use fetch::{fetch_items, FetchError, ITEMS_PATH};
pub use render::render;
pub use state::{FetchState, FetchStatus};
pub use transport::{RawResponse, ReqwestTransport, Transport};
pub use view::{CatalogView, Delivery, MountOptions};
