use chrono::NaiveDate;

/// 日期统一以 YYYY-MM-DD 文本存储
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 服务器本地时区的当天日期
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
