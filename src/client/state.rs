//! 拉取生命周期状态

use super::FetchError;
use crate::app::catalog::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Success,
    Error,
}

/// 每次挂载持有的状态，条目和错误信息互斥
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Loading,
    Success(Vec<Item>),
    Error(String),
}

impl FetchState {
    /// 把一次拉取的结果转换为终态
    pub fn resolve(outcome: Result<Vec<Item>, FetchError>) -> Self {
        match outcome {
            Ok(items) => FetchState::Success(items),
            Err(err) => FetchState::Error(err.to_string()),
        }
    }

    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Success(_) => FetchStatus::Success,
            FetchState::Error(_) => FetchStatus::Error,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }

    /// 非 `Success` 时为空
    pub fn items(&self) -> &[Item] {
        match self {
            FetchState::Success(items) => items,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
