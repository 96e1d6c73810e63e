use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Class).string().not_null())
                    .col(ColumnDef::new(Students::Phone).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(ColumnDef::new(Teachers::Subject).string().not_null())
                    .col(ColumnDef::new(Teachers::Phone).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建考勤表
        // student_id 不声明外键，学生被删除后考勤记录仍然保留
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Attendance::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendance::Status).string().not_null())
                    .col(ColumnDef::new(Attendance::Date).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建缴费表
        manager
            .create_table(
                Table::create()
                    .table(Fees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fees::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Fees::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Fees::Status).string().not_null())
                    .col(ColumnDef::new(Fees::Date).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 列表报表按日期倒序
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_date")
                    .table(Attendance::Table)
                    .col(Attendance::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fees_date")
                    .table(Fees::Table)
                    .col(Fees::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Fees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    Class,
    Phone,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    Name,
    Subject,
    Phone,
}

#[derive(DeriveIden)]
enum Attendance {
    #[sea_orm(iden = "attendance")]
    Table,
    Id,
    StudentId,
    Status,
    Date,
}

#[derive(DeriveIden)]
enum Fees {
    #[sea_orm(iden = "fees")]
    Table,
    Id,
    StudentId,
    Amount,
    Status,
    Date,
}
