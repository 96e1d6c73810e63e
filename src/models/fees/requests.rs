use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

// 缴费登记请求（JSON 或表单），未提供 date 时使用当天日期
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "fee.ts")]
pub struct RecordFeeRequest {
    pub student_id: i64,
    pub amount: i64,
    pub status: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
