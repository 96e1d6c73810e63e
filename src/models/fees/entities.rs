use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 缴费记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "fee.ts")]
pub struct FeePayment {
    pub id: i64,
    pub student_id: i64,
    pub amount: i64,
    // 自由文本，例如 "Paid" / "Due"
    pub status: String,
    pub date: String,
}
