//! 目录视图：挂载时拉取一次，之后只做投影

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::fetch::fetch_items_within;
use super::render::render;
use super::state::{FetchState, FetchStatus};
use super::transport::Transport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MountOptions {
    /// 为空时挂起的请求会让视图一直停留在 `Loading`
    pub timeout: Option<Duration>,
}

impl MountOptions {
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

/// 拉取任务结束时结果的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    /// 视图已卸载，结果被丢弃
    Discarded,
}

/// 一次挂载的视图
///
/// 挂载时启动唯一一次拉取，结果只写入一次；卸载后迟到的结果直接丢弃。
/// 必须在 tokio 运行时内挂载。
pub struct CatalogView {
    state: watch::Receiver<FetchState>,
    task: JoinHandle<Delivery>,
}

impl CatalogView {
    pub fn mount<T>(transport: Arc<T>, options: MountOptions) -> Self
    where
        T: Transport + ?Sized,
    {
        let (tx, state) = watch::channel(FetchState::Loading);

        let task = tokio::spawn(async move {
            let next = FetchState::resolve(
                fetch_items_within(transport.as_ref(), options.timeout).await,
            );

            match &next {
                FetchState::Success(items) => info!("条目加载完成，共 {} 个", items.len()),
                FetchState::Error(message) => warn!("条目加载失败: {}", message),
                FetchState::Loading => {}
            }

            match tx.send(next) {
                Ok(()) => Delivery::Applied,
                Err(_) => {
                    debug!("视图已卸载，丢弃迟到的结果");
                    Delivery::Discarded
                }
            }
        });

        Self { state, task }
    }

    /// 当前状态的快照
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.state.borrow().status()
    }

    /// 等到成功或失败
    pub async fn settled(&mut self) -> FetchState {
        let settled = self
            .state
            .wait_for(FetchState::is_terminal)
            .await
            .map(|state| FetchState::clone(&state));

        match settled {
            Ok(state) => state,
            // 任务异常退出时保持当前状态
            Err(_) => self.state(),
        }
    }

    pub fn render(&self) -> String {
        render(&self.state.borrow())
    }

    /// 卸载视图，不取消进行中的请求；返回的句柄可用来观察结果去向
    pub fn unmount(self) -> JoinHandle<Delivery> {
        let CatalogView { state, task } = self;
        drop(state);
        task
    }
}
