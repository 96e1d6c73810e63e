use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    // 任教科目
    pub subject: String,
    pub phone: String,
}
