//! 目录业务服务

use std::sync::Arc;

use super::model::{Catalog, Item};

/// 只读目录服务，多个请求共享同一份目录，无需加锁
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// 按插入顺序返回全部条目
    pub fn list_items(&self) -> Vec<Item> {
        self.catalog.items().to_vec()
    }

    /// 按 id 合成条目，不检查目录中是否存在该 id
    pub fn get_item(&self, id: i64) -> Item {
        Item::synthesize(id)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::seed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_items_returns_seed_in_id_order() {
        let service = CatalogService::default();
        let items = service.list_items();

        let ids: Vec<i64> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(items[0].name, "Item 1");
        assert_eq!(items[2].description, "Description for Item 3");
    }

    #[test]
    fn list_items_is_idempotent() {
        let service = CatalogService::default();
        let first = service.list_items();
        for _ in 0..5 {
            assert_eq!(service.list_items(), first);
        }
    }

    #[test]
    fn get_item_synthesizes_any_id() {
        let service = CatalogService::default();

        for id in [0, 1, 3, 4, 42, -7, i64::MAX, i64::MIN] {
            let item = service.get_item(id);
            assert_eq!(item.id, id);
            assert_eq!(item.name, format!("Item {}", id));
            assert_eq!(item.description, format!("Description for Item {}", id));
        }
    }

    #[test]
    fn get_item_ignores_catalog_contents() {
        // 空目录也照样合成
        let service = CatalogService::new(Arc::new(Catalog::new(Vec::new())));
        assert!(service.list_items().is_empty());
        assert_eq!(service.get_item(2), Item::synthesize(2));
    }

    #[test]
    fn clones_share_the_same_catalog() {
        let service = CatalogService::default();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = service.clone();
                std::thread::spawn(move || service.list_items())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Catalog::seed().items());
        }
    }
}
