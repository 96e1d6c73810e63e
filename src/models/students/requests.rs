use serde::Deserialize;
use ts_rs::TS;

// 入学登记请求（JSON 或表单）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub phone: String,
}
