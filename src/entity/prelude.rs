//! 预导入模块，方便使用

pub use super::attendance::Entity as Attendance;
pub use super::fees::Entity as Fees;
pub use super::students::Entity as Students;
pub use super::teachers::Entity as Teachers;
