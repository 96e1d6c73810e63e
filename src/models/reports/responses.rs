use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 每个班级的学生人数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "report.ts")]
pub struct ClassCount {
    #[serde(rename = "class")]
    pub class_name: String,
    pub count: i64,
}

// 按状态分组的记录数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "report.ts")]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

// 仪表盘汇总
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "report.ts")]
pub struct DashboardResponse {
    pub students_per_class: Vec<ClassCount>,
    pub fees_by_status: Vec<StatusCount>,
    pub attendance_by_status: Vec<StatusCount>,
}
