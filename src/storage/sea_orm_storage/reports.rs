//! 报表查询
//!
//! 列表报表使用内连接，学生已删除的考勤/缴费记录不会出现在结果中。

use super::SeaOrmStorage;
use crate::entity::attendance::{Column as AttendanceColumn, Relation as AttendanceRelation};
use crate::entity::fees::{Column as FeeColumn, Relation as FeeRelation};
use crate::entity::prelude::{Attendance, Fees, Students};
use crate::entity::students::Column as StudentColumn;
use crate::errors::{Result, SchoolAdminError};
use crate::models::{
    attendance::responses::AttendanceListItem,
    fees::responses::FeeListItem,
    reports::responses::{ClassCount, StatusCount},
};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect, RelationTrait,
};

#[derive(Debug, FromQueryResult)]
struct AttendanceReportRow {
    name: String,
    class_name: String,
    status: String,
    date: String,
}

#[derive(Debug, FromQueryResult)]
struct FeeReportRow {
    name: String,
    class_name: String,
    amount: i64,
    status: String,
    date: String,
}

impl SeaOrmStorage {
    /// 每个班级的学生人数，按班级名升序
    pub async fn count_students_per_class_impl(&self) -> Result<Vec<ClassCount>> {
        let rows = Students::find()
            .select_only()
            .column(StudentColumn::ClassName)
            .column_as(StudentColumn::Id.count(), "count")
            .group_by(StudentColumn::ClassName)
            .order_by_asc(StudentColumn::ClassName)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("统计班级人数失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(class_name, count)| ClassCount { class_name, count })
            .collect())
    }

    /// 按状态统计缴费记录
    pub async fn count_fees_by_status_impl(&self) -> Result<Vec<StatusCount>> {
        let rows = Fees::find()
            .select_only()
            .column(FeeColumn::Status)
            .column_as(FeeColumn::Id.count(), "count")
            .group_by(FeeColumn::Status)
            .order_by_asc(FeeColumn::Status)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("统计缴费状态失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect())
    }

    /// 按状态统计考勤记录
    pub async fn count_attendance_by_status_impl(&self) -> Result<Vec<StatusCount>> {
        let rows = Attendance::find()
            .select_only()
            .column(AttendanceColumn::Status)
            .column_as(AttendanceColumn::Id.count(), "count")
            .group_by(AttendanceColumn::Status)
            .order_by_asc(AttendanceColumn::Status)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("统计考勤状态失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect())
    }

    /// 考勤列表：日期倒序，同一天按写入顺序
    pub async fn list_attendance_report_impl(&self) -> Result<Vec<AttendanceListItem>> {
        let rows = Attendance::find()
            .select_only()
            .column_as(StudentColumn::Name, "name")
            .column_as(StudentColumn::ClassName, "class_name")
            .column_as(AttendanceColumn::Status, "status")
            .column_as(AttendanceColumn::Date, "date")
            .join(JoinType::InnerJoin, AttendanceRelation::Student.def())
            .order_by_desc(AttendanceColumn::Date)
            .order_by_asc(AttendanceColumn::Id)
            .into_model::<AttendanceReportRow>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| AttendanceListItem {
                name: row.name,
                class_name: row.class_name,
                status: row.status,
                date: row.date,
            })
            .collect())
    }

    /// 缴费列表：日期倒序，同一天按写入顺序
    pub async fn list_fees_report_impl(&self) -> Result<Vec<FeeListItem>> {
        let rows = Fees::find()
            .select_only()
            .column_as(StudentColumn::Name, "name")
            .column_as(StudentColumn::ClassName, "class_name")
            .column_as(FeeColumn::Amount, "amount")
            .column_as(FeeColumn::Status, "status")
            .column_as(FeeColumn::Date, "date")
            .join(JoinType::InnerJoin, FeeRelation::Student.def())
            .order_by_desc(FeeColumn::Date)
            .order_by_asc(FeeColumn::Id)
            .into_model::<FeeReportRow>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询缴费列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| FeeListItem {
                name: row.name,
                class_name: row.class_name,
                amount: row.amount,
                status: row.status,
                date: row.date,
            })
            .collect())
    }
}
