use item_catalog::config::load_config;
use item_catalog::infrastructure::Logger;
use item_catalog::{server, AppState, Catalog};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    match &config.source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let catalog = Catalog::seed();
    info!("✅ 已初始化 {} 个目录条目", catalog.len());

    server::run(&config.http, AppState::new(catalog)).await
}
