use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct CreateTeacherRequest {
    pub name: String,
    pub subject: String,
    pub phone: String,
}
