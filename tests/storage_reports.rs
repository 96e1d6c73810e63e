mod common;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_schooladmin::models::attendance::requests::MarkAttendanceRequest;
use rust_schooladmin::models::fees::requests::RecordFeeRequest;
use rust_schooladmin::models::reports::responses::{ClassCount, StatusCount};
use rust_schooladmin::storage::Storage;
use rust_schooladmin::storage::sea_orm_storage::SeaOrmStorage;

use common::{student, temp_storage};

async fn record(storage: &SeaOrmStorage, student_id: i64, status: &str, date: (i32, u32, u32)) {
    storage
        .record_fee(RecordFeeRequest {
            student_id,
            amount: 100,
            status: status.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn fees_are_counted_by_status() {
    let storage = temp_storage("fees-by-status").await;
    record(&storage, 1, "Paid", (2024, 1, 1)).await;
    record(&storage, 2, "Paid", (2024, 1, 1)).await;
    record(&storage, 3, "Due", (2024, 1, 2)).await;

    let counts = storage.count_fees_by_status().await.unwrap();
    assert_eq!(
        counts,
        vec![
            StatusCount {
                status: "Due".to_string(),
                count: 1
            },
            StatusCount {
                status: "Paid".to_string(),
                count: 2
            },
        ]
    );
}

#[tokio::test]
async fn students_are_counted_per_class() {
    let storage = temp_storage("students-per-class").await;
    storage.create_student(student("Ana", "5B")).await.unwrap();
    storage.create_student(student("Ben", "5A")).await.unwrap();
    storage.create_student(student("Cai", "5B")).await.unwrap();

    let counts = storage.count_students_per_class().await.unwrap();
    assert_eq!(
        counts,
        vec![
            ClassCount {
                class_name: "5A".to_string(),
                count: 1
            },
            ClassCount {
                class_name: "5B".to_string(),
                count: 2
            },
        ]
    );
}

#[tokio::test]
async fn attendance_is_counted_by_status() {
    let storage = temp_storage("attendance-by-status").await;
    storage
        .mark_attendance(MarkAttendanceRequest {
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            records: BTreeMap::from([
                (1, "Present".to_string()),
                (2, "Absent".to_string()),
                (3, "Present".to_string()),
            ]),
        })
        .await
        .unwrap();

    let counts = storage.count_attendance_by_status().await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].status, "Absent");
    assert_eq!(counts[0].count, 1);
    assert_eq!(counts[1].status, "Present");
    assert_eq!(counts[1].count, 2);
}

#[tokio::test]
async fn attendance_list_is_newest_first() {
    let storage = temp_storage("attendance-order").await;
    let ana = storage.create_student(student("Ana", "5A")).await.unwrap();

    for (day, status) in [(1, "Present"), (2, "Absent")] {
        storage
            .mark_attendance(MarkAttendanceRequest {
                date: NaiveDate::from_ymd_opt(2024, 1, day),
                records: BTreeMap::from([(ana.id, status.to_string())]),
            })
            .await
            .unwrap();
    }

    let rows = storage.list_attendance_report().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-01-02");
    assert_eq!(rows[0].status, "Absent");
    assert_eq!(rows[1].date, "2024-01-01");
    assert_eq!(rows[1].name, "Ana");
    assert_eq!(rows[1].class_name, "5A");
}

#[tokio::test]
async fn fees_of_deleted_students_are_not_listed() {
    let storage = temp_storage("fees-deleted-student").await;
    let ana = storage.create_student(student("Ana", "5A")).await.unwrap();
    let ben = storage.create_student(student("Ben", "5B")).await.unwrap();

    record(&storage, ana.id, "Paid", (2024, 1, 1)).await;
    record(&storage, ben.id, "Due", (2024, 1, 3)).await;
    record(&storage, ana.id, "Due", (2024, 1, 3)).await;

    let rows = storage.list_fees_report().await.unwrap();
    assert_eq!(rows.len(), 3);
    // 同一天按写入顺序
    assert_eq!(rows[0].name, "Ben");
    assert_eq!(rows[1].name, "Ana");
    assert_eq!(rows[2].date, "2024-01-01");

    storage.delete_student(ben.id).await.unwrap();

    let rows = storage.list_fees_report().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.name == "Ana"));
    // 原始记录仍然保留
    assert_eq!(storage.list_fee_payments().await.unwrap().len(), 3);
}

#[tokio::test]
async fn attendance_of_missing_students_is_not_listed() {
    let storage = temp_storage("attendance-orphans").await;
    let ana = storage.create_student(student("Ana", "5A")).await.unwrap();
    let ben = storage.create_student(student("Ben", "5B")).await.unwrap();

    storage
        .mark_attendance(MarkAttendanceRequest {
            date: NaiveDate::from_ymd_opt(2024, 2, 1),
            records: BTreeMap::from([
                (ana.id, "Present".to_string()),
                (ben.id, "Absent".to_string()),
                (999, "Present".to_string()),
            ]),
        })
        .await
        .unwrap();

    // 999 从未入学
    assert_eq!(storage.list_attendance_report().await.unwrap().len(), 2);

    storage.delete_student(ben.id).await.unwrap();

    let rows = storage.list_attendance_report().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ana");
    assert_eq!(rows[0].status, "Present");
    assert_eq!(storage.list_attendance_records().await.unwrap().len(), 3);
}

#[tokio::test]
async fn attendance_on_same_date_keeps_insert_order() {
    let storage = temp_storage("attendance-same-date").await;
    let ana = storage.create_student(student("Ana", "5A")).await.unwrap();
    let ben = storage.create_student(student("Ben", "5B")).await.unwrap();

    // Ben 先点名，记录 id 更小
    for (id, status) in [(ben.id, "Late"), (ana.id, "Present")] {
        storage
            .mark_attendance(MarkAttendanceRequest {
                date: NaiveDate::from_ymd_opt(2024, 2, 5),
                records: BTreeMap::from([(id, status.to_string())]),
            })
            .await
            .unwrap();
    }
    storage
        .mark_attendance(MarkAttendanceRequest {
            date: NaiveDate::from_ymd_opt(2024, 2, 4),
            records: BTreeMap::from([(ana.id, "Absent".to_string())]),
        })
        .await
        .unwrap();

    let rows = storage.list_attendance_report().await.unwrap();
    let names: Vec<_> = rows.iter().map(|r| (r.name.as_str(), r.date.as_str())).collect();
    assert_eq!(
        names,
        vec![
            ("Ben", "2024-02-05"),
            ("Ana", "2024-02-05"),
            ("Ana", "2024-02-04"),
        ]
    );
}
