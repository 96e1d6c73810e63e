//! 缴费存储操作

use super::SeaOrmStorage;
use crate::entity::fees::{ActiveModel, Column, Entity as Fees};
use crate::errors::{Result, SchoolAdminError};
use crate::models::fees::{entities::FeePayment, requests::RecordFeeRequest};
use crate::utils::date::{format_date, today};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 登记一笔缴费
    pub async fn record_fee_impl(&self, req: RecordFeeRequest) -> Result<FeePayment> {
        let date = format_date(req.date.unwrap_or_else(today));

        let model = ActiveModel {
            student_id: Set(req.student_id),
            amount: Set(req.amount),
            status: Set(req.status),
            date: Set(date),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("登记缴费失败: {e}")))?;

        Ok(result.into_fee_payment())
    }

    /// 列出全部缴费记录
    pub async fn list_fee_payments_impl(&self) -> Result<Vec<FeePayment>> {
        let fees = Fees::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(fees.into_iter().map(|m| m.into_fee_payment()).collect())
    }

    /// 删除缴费记录
    pub async fn delete_fee_payment_impl(&self, id: i64) -> Result<bool> {
        let result = Fees::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("删除缴费记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
