use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 缴费列表项（关联学生信息）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "fee.ts")]
pub struct FeeListItem {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub amount: i64,
    pub status: String,
    pub date: String,
}
