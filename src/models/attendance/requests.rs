use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::utils::date::DATE_FORMAT;

static STUDENT_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^student_(.*)$").expect("Invalid student field regex"));

// 点名请求
//
// records 的键为学生ID，值为考勤状态。
// 未提供 date 时使用服务器当天日期。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct MarkAttendanceRequest {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub records: BTreeMap<i64, String>,
}

impl MarkAttendanceRequest {
    /// 从点名表单字段构造请求
    ///
    /// 表单中每个学生对应一个 `student_<id>=<status>` 字段，
    /// 可选的 `date` 字段指定日期，其余字段忽略。
    pub fn from_form_fields(fields: HashMap<String, String>) -> Result<Self> {
        let mut records = BTreeMap::new();
        let mut date = None;

        for (key, value) in fields {
            if key == "date" {
                if !value.trim().is_empty() {
                    date = Some(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?);
                }
                continue;
            }

            let Some(captures) = STUDENT_FIELD_RE.captures(&key) else {
                continue;
            };
            let student_id = captures[1].parse::<i64>().map_err(|_| {
                SchoolAdminError::form_field(format!("Invalid student id in field '{key}'"))
            })?;
            records.insert(student_id, value);
        }

        Ok(Self { date, records })
    }
}
