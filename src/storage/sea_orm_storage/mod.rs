//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod fees;
mod reports;
mod students;
mod teachers;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, SchoolAdminError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database).await
    }

    /// 按数据库配置建立连接池并确保表结构存在
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 建表（幂等）
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 再次执行建表，已存在的表保持不变
    pub async fn ensure_schema(&self) -> Result<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("数据库迁移失败: {e}")))
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolAdminError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                SchoolAdminError::database_connection(format!("SQLite 连接失败: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolAdminError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    attendance::{
        entities::AttendanceRecord,
        requests::MarkAttendanceRequest,
        responses::{AttendanceListItem, MarkAttendanceResponse},
    },
    fees::{entities::FeePayment, requests::RecordFeeRequest, responses::FeeListItem},
    reports::responses::{ClassCount, StatusCount},
    students::{entities::Student, requests::CreateStudentRequest},
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 考勤模块
    async fn mark_attendance(&self, req: MarkAttendanceRequest) -> Result<MarkAttendanceResponse> {
        self.mark_attendance_impl(req).await
    }

    async fn list_attendance_records(&self) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_records_impl().await
    }

    async fn delete_attendance_record(&self, id: i64) -> Result<bool> {
        self.delete_attendance_record_impl(id).await
    }

    // 缴费模块
    async fn record_fee(&self, fee: RecordFeeRequest) -> Result<FeePayment> {
        self.record_fee_impl(fee).await
    }

    async fn list_fee_payments(&self) -> Result<Vec<FeePayment>> {
        self.list_fee_payments_impl().await
    }

    async fn delete_fee_payment(&self, id: i64) -> Result<bool> {
        self.delete_fee_payment_impl(id).await
    }

    // 报表模块
    async fn count_students_per_class(&self) -> Result<Vec<ClassCount>> {
        self.count_students_per_class_impl().await
    }

    async fn count_fees_by_status(&self) -> Result<Vec<StatusCount>> {
        self.count_fees_by_status_impl().await
    }

    async fn count_attendance_by_status(&self) -> Result<Vec<StatusCount>> {
        self.count_attendance_by_status_impl().await
    }

    async fn list_attendance_report(&self) -> Result<Vec<AttendanceListItem>> {
        self.list_attendance_report_impl().await
    }

    async fn list_fees_report(&self) -> Result<Vec<FeeListItem>> {
        self.list_fees_report_impl().await
    }
}
