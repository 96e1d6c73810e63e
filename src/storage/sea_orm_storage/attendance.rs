//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, Entity as Attendance};
use crate::errors::{Result, SchoolAdminError};
use crate::models::attendance::{
    entities::AttendanceRecord, requests::MarkAttendanceRequest,
    responses::MarkAttendanceResponse,
};
use crate::utils::date::{format_date, today};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use tracing::debug;

impl SeaOrmStorage {
    /// 批量点名
    ///
    /// 每个学生插入一条记录，整批在一个事务里提交，失败时整批回滚。
    pub async fn mark_attendance_impl(
        &self,
        req: MarkAttendanceRequest,
    ) -> Result<MarkAttendanceResponse> {
        let date = format_date(req.date.unwrap_or_else(today));

        if req.records.is_empty() {
            return Ok(MarkAttendanceResponse { date, inserted: 0 });
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("开启事务失败: {e}")))?;

        let mut inserted = 0u64;
        for (student_id, status) in req.records {
            let model = ActiveModel {
                student_id: Set(student_id),
                status: Set(status),
                date: Set(date.clone()),
                ..Default::default()
            };

            model
                .insert(&txn)
                .await
                .map_err(|e| SchoolAdminError::database_operation(format!("写入考勤失败: {e}")))?;
            inserted += 1;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("提交考勤失败: {e}")))?;

        debug!("Marked attendance for {} students on {}", inserted, date);

        Ok(MarkAttendanceResponse { date, inserted })
    }

    /// 列出全部考勤记录
    pub async fn list_attendance_records_impl(&self) -> Result<Vec<AttendanceRecord>> {
        let records = Attendance::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(records
            .into_iter()
            .map(|m| m.into_attendance_record())
            .collect())
    }

    /// 删除考勤记录
    pub async fn delete_attendance_record_impl(&self, id: i64) -> Result<bool> {
        let result = Attendance::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("删除考勤记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use sea_orm::ConnectionTrait;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_mark_attendance_rolls_back_whole_batch() {
        let path = std::env::temp_dir().join(format!(
            "schooladmin-attendance-rollback-{}.db",
            std::process::id()
        ));
        let storage = SeaOrmStorage::connect(&DatabaseConfig {
            url: path.to_string_lossy().to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
        .unwrap();

        storage
            .db
            .execute_unprepared(
                "CREATE TRIGGER reject_student_two BEFORE INSERT ON attendance \
                 WHEN NEW.student_id = 2 BEGIN SELECT RAISE(ABORT, 'rejected'); END",
            )
            .await
            .unwrap();

        let result = storage
            .mark_attendance_impl(MarkAttendanceRequest {
                date: None,
                records: BTreeMap::from([
                    (1, "Present".to_string()),
                    (2, "Absent".to_string()),
                    (3, "Present".to_string()),
                ]),
            })
            .await;

        assert!(result.is_err());
        // 学生 1 已写入的行也应回滚
        assert!(storage.list_attendance_records_impl().await.unwrap().is_empty());

        drop(storage);
        for suffix in ["", "-wal", "-shm"] {
            let mut file = path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}
