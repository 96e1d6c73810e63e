use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    // 不保证对应的学生仍然存在
    pub student_id: i64,
    // 自由文本，例如 "Present" / "Absent"
    pub status: String,
    // YYYY-MM-DD
    pub date: String,
}
