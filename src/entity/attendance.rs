//! 考勤实体
//!
//! student_id 只在 ORM 层声明关联，数据库中没有外键约束。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub status: String,
    // YYYY-MM-DD 文本
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attendance_record(self) -> crate::models::attendance::entities::AttendanceRecord {
        use crate::models::attendance::entities::AttendanceRecord;

        AttendanceRecord {
            id: self.id,
            student_id: self.student_id,
            status: self.status,
            date: self.date,
        }
    }
}
