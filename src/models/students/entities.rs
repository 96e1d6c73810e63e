use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 姓名
    pub name: String,
    // 班级
    #[serde(rename = "class")]
    pub class_name: String,
    // 联系电话
    pub phone: String,
}
