//! 服务启动与优雅退出

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::app::{self, AppState};
use crate::config::HttpConfig;

/// 按配置绑定端口并运行目录服务，直到收到退出信号
pub async fn run(config: &HttpConfig, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.listen_addr()).await?;
    let port = listener.local_addr()?.port();

    info!("API service listening at http://localhost:{}", port);
    info!("📖 API 端点:");
    info!("   GET /health        - 健康检查");
    info!("   GET /api/items     - 获取全部条目");
    info!("   GET /api/items/:id - 获取单个条目");

    serve(listener, app::router(state, config)).await
}

/// 在已绑定的监听器上提供服务
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到退出信号，正在等待进行中的请求完成...");
}
