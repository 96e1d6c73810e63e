//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher(self) -> crate::models::teachers::entities::Teacher {
        use crate::models::teachers::entities::Teacher;

        Teacher {
            id: self.id,
            name: self.name,
            subject: self.subject,
            phone: self.phone,
        }
    }
}
