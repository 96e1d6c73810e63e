use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 列表响应（不分页，一次返回全部记录）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "list.ts")]
pub struct ListResponse<T: TS> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: TS> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
