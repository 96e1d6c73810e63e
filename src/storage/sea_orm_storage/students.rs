//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolAdminError};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 入学登记
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            name: Set(req.name),
            class_name: Set(req.class_name),
            phone: Set(req.phone),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 删除学生
    ///
    /// 不会级联删除考勤和缴费记录。
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
