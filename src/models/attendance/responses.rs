use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 点名结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct MarkAttendanceResponse {
    pub date: String,
    pub inserted: u64,
}

// 考勤列表项（关联学生信息）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceListItem {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub status: String,
    pub date: String,
}
