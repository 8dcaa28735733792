//! 目录客户端
//! 挂载一次视图，等待拉取结束后输出渲染结果

use std::sync::Arc;

use item_catalog::client::{CatalogView, FetchState, MountOptions, ReqwestTransport};
use item_catalog::config::load_config;
use item_catalog::infrastructure::Logger;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    let transport = ReqwestTransport::new(&config.client.base_url)?;
    info!("从 {} 拉取目录", transport.base_url());

    let mut view = CatalogView::mount(
        Arc::new(transport),
        MountOptions::with_timeout(config.client.timeout()),
    );
    println!("{}", view.render());

    let state = view.settled().await;
    println!("{}", view.render());

    exit_status(state)
}

/// 拉取失败时以错误退出
fn exit_status(state: FetchState) -> anyhow::Result<()> {
    if let FetchState::Error(message) = state {
        anyhow::bail!("目录拉取失败: {}", message);
    }
    Ok(())
}
