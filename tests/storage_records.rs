mod common;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_schooladmin::models::attendance::requests::MarkAttendanceRequest;
use rust_schooladmin::models::fees::requests::RecordFeeRequest;
use rust_schooladmin::models::teachers::requests::CreateTeacherRequest;
use rust_schooladmin::storage::Storage;
use rust_schooladmin::utils::date::{format_date, today};

use common::{student, temp_storage};

#[tokio::test]
async fn admitted_student_is_listed_once_with_fresh_id() {
    let storage = temp_storage("admit").await;

    let first = storage.create_student(student("Ana", "5A")).await.unwrap();
    let second = storage.create_student(student("Ben", "5B")).await.unwrap();
    assert_ne!(first.id, second.id);

    let students = storage.list_students().await.unwrap();
    let matching: Vec<_> = students.iter().filter(|s| s.name == "Ana").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].class_name, "5A");
    assert_eq!(matching[0].phone, "555-0100");
    assert_eq!(matching[0].id, first.id);

    // 按 id 升序
    assert_eq!(
        students.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let found = storage.get_student_by_id(second.id).await.unwrap();
    assert_eq!(found, Some(second));
    assert_eq!(storage.get_student_by_id(9_999).await.unwrap(), None);
}

#[tokio::test]
async fn deleting_teacher_twice_is_idempotent() {
    let storage = temp_storage("teacher-delete").await;

    let teacher = storage
        .create_teacher(CreateTeacherRequest {
            name: "Mr. Kim".to_string(),
            subject: "Math".to_string(),
            phone: "555-0101".to_string(),
        })
        .await
        .unwrap();

    assert!(storage.delete_teacher(teacher.id).await.unwrap());
    assert!(!storage.delete_teacher(teacher.id).await.unwrap());
    assert!(storage.list_teachers().await.unwrap().is_empty());
}

#[tokio::test]
async fn mark_attendance_inserts_one_row_per_student() {
    let storage = temp_storage("attendance-batch").await;

    let records = BTreeMap::from([(1, "Present".to_string()), (2, "Absent".to_string())]);
    let response = storage
        .mark_attendance(MarkAttendanceRequest {
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            records,
        })
        .await
        .unwrap();

    assert_eq!(response.inserted, 2);
    assert_eq!(response.date, "2024-01-01");

    let rows = storage.list_attendance_records().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.date == "2024-01-01"));
    // 按学生 id 升序写入
    assert_eq!(rows[0].student_id, 1);
    assert_eq!(rows[0].status, "Present");
    assert_eq!(rows[1].student_id, 2);
    assert_eq!(rows[1].status, "Absent");
}

#[tokio::test]
async fn empty_attendance_mapping_inserts_nothing() {
    let storage = temp_storage("attendance-empty").await;

    let response = storage
        .mark_attendance(MarkAttendanceRequest {
            date: None,
            records: BTreeMap::new(),
        })
        .await
        .unwrap();

    assert_eq!(response.inserted, 0);
    assert!(storage.list_attendance_records().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_dates_default_to_today() {
    let storage = temp_storage("default-date").await;
    let expected = format_date(today());

    let marked = storage
        .mark_attendance(MarkAttendanceRequest {
            date: None,
            records: BTreeMap::from([(3, "Late".to_string())]),
        })
        .await
        .unwrap();
    assert_eq!(marked.date, expected);

    let fee = storage
        .record_fee(RecordFeeRequest {
            student_id: 3,
            amount: 1200,
            status: "Paid".to_string(),
            date: None,
        })
        .await
        .unwrap();
    assert_eq!(fee.date, expected);
}

#[tokio::test]
async fn fee_and_attendance_rows_can_be_deleted() {
    let storage = temp_storage("row-delete").await;

    let fee = storage
        .record_fee(RecordFeeRequest {
            student_id: 1,
            amount: 500,
            status: "Due".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 1),
        })
        .await
        .unwrap();
    assert_eq!(fee.amount, 500);
    assert_eq!(storage.list_fee_payments().await.unwrap(), vec![fee.clone()]);

    assert!(storage.delete_fee_payment(fee.id).await.unwrap());
    assert!(!storage.delete_fee_payment(fee.id).await.unwrap());
    assert!(storage.list_fee_payments().await.unwrap().is_empty());

    storage
        .mark_attendance(MarkAttendanceRequest {
            date: NaiveDate::from_ymd_opt(2024, 2, 1),
            records: BTreeMap::from([(1, "Present".to_string())]),
        })
        .await
        .unwrap();
    let row = storage.list_attendance_records().await.unwrap().remove(0);
    assert!(storage.delete_attendance_record(row.id).await.unwrap());
    assert!(!storage.delete_attendance_record(row.id).await.unwrap());
}

#[tokio::test]
async fn schema_initialization_is_repeatable() {
    let storage = temp_storage("schema-twice").await;
    storage.create_student(student("Ana", "5A")).await.unwrap();

    storage.ensure_schema().await.unwrap();
    storage.ensure_schema().await.unwrap();

    assert_eq!(storage.list_students().await.unwrap().len(), 1);
}

#[tokio::test]
async fn temp_database_files_are_removed_on_drop() {
    let storage = temp_storage("drop-cleanup").await;
    storage.create_student(student("Ana", "5A")).await.unwrap();
    let path = storage.path().to_path_buf();
    assert!(path.exists());

    drop(storage);

    assert!(!path.exists());
}
