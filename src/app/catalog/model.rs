//! 目录数据模型

use serde::{Deserialize, Serialize};

/// 目录条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Item {
    /// 根据 id 合成条目，名称与描述完全由 id 决定
    pub fn synthesize(id: i64) -> Self {
        Self {
            id,
            name: format!("Item {}", id),
            description: format!("Description for Item {}", id),
        }
    }
}

/// 进程级只读目录，启动时创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// 种子条目的 id，按插入顺序排列
    pub const SEED_IDS: [i64; 3] = [1, 2, 3];

    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// 内置的三个种子条目
    pub fn seed() -> Self {
        Self::new(Self::SEED_IDS.iter().map(|&id| Item::synthesize(id)).collect())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}
