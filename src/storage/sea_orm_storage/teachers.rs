//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::Teachers;
use crate::entity::teachers::{ActiveModel, Column};
use crate::errors::{Result, SchoolAdminError};
use crate::models::teachers::{entities::Teacher, requests::CreateTeacherRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 添加教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let model = ActiveModel {
            name: Set(req.name),
            subject: Set(req.subject),
            phone: Set(req.phone),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 列出全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let teachers = Teachers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 删除教师
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
