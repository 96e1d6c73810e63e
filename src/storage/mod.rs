use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 入学登记
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出全部学生（按ID升序）
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 删除学生，不存在时返回 false
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    // 批量点名，每个学生插入一条记录，整批在同一事务中提交
    async fn mark_attendance(&self, req: MarkAttendanceRequest) -> Result<MarkAttendanceResponse>;
    async fn list_attendance_records(&self) -> Result<Vec<AttendanceRecord>>;
    async fn delete_attendance_record(&self, id: i64) -> Result<bool>;

    /// 缴费管理方法
    async fn record_fee(&self, fee: RecordFeeRequest) -> Result<FeePayment>;
    async fn list_fee_payments(&self) -> Result<Vec<FeePayment>>;
    async fn delete_fee_payment(&self, id: i64) -> Result<bool>;

    /// 报表方法
    // 每个班级的学生人数
    async fn count_students_per_class(&self) -> Result<Vec<ClassCount>>;
    // 按状态统计缴费记录
    async fn count_fees_by_status(&self) -> Result<Vec<StatusCount>>;
    // 按状态统计考勤记录
    async fn count_attendance_by_status(&self) -> Result<Vec<StatusCount>>;
    // 考勤列表（内连接学生，日期倒序）
    async fn list_attendance_report(&self) -> Result<Vec<AttendanceListItem>>;
    // 缴费列表（内连接学生，日期倒序）
    async fn list_fees_report(&self) -> Result<Vec<FeeListItem>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
