#![allow(dead_code)]

use std::ops::Deref;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_schooladmin::config::DatabaseConfig;
use rust_schooladmin::models::students::requests::CreateStudentRequest;
use rust_schooladmin::storage::sea_orm_storage::SeaOrmStorage;

/// 每个测试独立的 SQLite 文件
pub fn temp_db_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    std::env::temp_dir().join(format!(
        "schooladmin-{prefix}-{}-{nanos}.db",
        std::process::id()
    ))
}

/// 临时数据库，离开作用域时删除数据库文件及 WAL 附属文件
pub struct TempStorage {
    pub storage: SeaOrmStorage,
    path: PathBuf,
}

impl TempStorage {
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Deref for TempStorage {
    type Target = SeaOrmStorage;

    fn deref(&self) -> &Self::Target {
        &self.storage
    }
}

impl Drop for TempStorage {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

pub async fn temp_storage(prefix: &str) -> TempStorage {
    let path = temp_db_path(prefix);
    let config = DatabaseConfig {
        url: path.to_string_lossy().to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("temp storage should open");
    TempStorage { storage, path }
}

pub fn student(name: &str, class_name: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        name: name.to_string(),
        class_name: class_name.to_string(),
        phone: "555-0100".to_string(),
    }
}
