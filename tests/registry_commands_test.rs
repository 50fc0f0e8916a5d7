//! Command operations against a real database

mod helpers;

use assert_matches::assert_matches;
use campus_events::models::{AttendanceStatus, CreateEventRequest};
use campus_events::RegistryError;
use chrono::Utc;
use helpers::*;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_create_event_assigns_id() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");
    let registry = db.registry();

    let event = registry
        .create_event(event_request("Rust Bootcamp", "Workshop", Some(1)))
        .await
        .expect("Failed to create event");

    // Seeded ids are 1..=3; sequences were moved past them
    assert!(event.event_id > 3);
    assert_eq!(event.event_name, "Rust Bootcamp");
    assert_eq!(event.event_type.as_deref(), Some("Workshop"));
    assert_eq!(event.event_date, date(2025, 11, 20));
    assert_eq!(db.count_records("events").await.unwrap(), 4);
}

#[tokio::test]
#[serial]
async fn test_create_event_without_college() {
    let db = TestDatabase::new().await.expect("Failed to create test database");

    let event = db
        .registry()
        .create_event(event_request("Open Day", "Fest", None))
        .await
        .expect("Failed to create event");

    assert!(event.college_id.is_none());
}

#[tokio::test]
#[serial]
async fn test_create_event_with_unknown_college_is_reference_error() {
    let db = TestDatabase::new().await.expect("Failed to create test database");

    let result = db.registry().create_event(event_request("Ghost Event", "Workshop", Some(999))).await;

    assert_matches!(result, Err(RegistryError::Reference(_)));
    assert_eq!(db.count_records("events").await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn test_create_event_validation_touches_no_rows() {
    let db = TestDatabase::new().await.expect("Failed to create test database");

    let request = CreateEventRequest {
        event_name: Some("No Date".into()),
        ..Default::default()
    };
    assert_matches!(db.registry().create_event(request).await, Err(RegistryError::Validation(_)));
    assert_eq!(db.count_records("events").await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn test_register_student_defaults() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");

    let registration = db
        .registry()
        .register_student(registration(101, 2))
        .await
        .expect("Failed to register student");

    assert_eq!(registration.student_id, 101);
    assert_eq!(registration.event_id, 2);
    assert_eq!(registration.attendance_status, AttendanceStatus::Registered);
    assert_eq!(registration.registration_date, Utc::now().date_naive());
    assert!(registration.feedback_score.is_none());
}

#[tokio::test]
#[serial]
async fn test_duplicate_registration_is_conflict_and_keeps_original() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");
    let registry = db.registry();

    let before = db.service().registrations.find(101, 1).await.unwrap().expect("seeded registration");

    let result = registry.register_student(registration(101, 1)).await;
    assert_matches!(result, Err(RegistryError::DuplicateRegistration { student_id: 101, event_id: 1 }));

    let after = db.service().registrations.find(101, 1).await.unwrap().expect("seeded registration");
    assert_eq!(before, after);
    assert_eq!(db.count_records("registrations").await.unwrap(), 3);
}

#[tokio::test]
#[serial]
async fn test_concurrent_registrations_only_one_wins() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");
    let registry = db.registry();

    let (first, second) = tokio::join!(
        registry.register_student(registration(201, 2)),
        registry.register_student(registration(201, 2)),
    );

    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(
        outcomes
            .iter()
            .filter(|r| matches!(r, Err(RegistryError::DuplicateRegistration { .. })))
            .count(),
        1
    );
    assert_eq!(db.count_where("registrations", "event_id", 2).await.unwrap(), 1);
}

#[tokio::test]
#[serial]
async fn test_register_unknown_student_is_reference_error() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");

    let result = db.registry().register_student(registration(999, 1)).await;
    assert_matches!(result, Err(RegistryError::Reference(_)));

    let result = db.registry().register_student(registration(101, 999)).await;
    assert_matches!(result, Err(RegistryError::Reference(_)));
}

#[tokio::test]
#[serial]
async fn test_mark_attendance_and_absence() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");
    let registry = db.registry();

    let updated = registry.mark_attendance(3, attendance(201)).await.expect("Failed to mark attendance");
    assert_eq!(updated.attendance_status, AttendanceStatus::Attended);

    let updated = registry.mark_absence(3, attendance(201)).await.expect("Failed to mark absence");
    assert_eq!(updated.attendance_status, AttendanceStatus::NotAttended);

    // Other rows untouched
    let other = db.service().registrations.find(101, 1).await.unwrap().unwrap();
    assert_eq!(other.attendance_status, AttendanceStatus::Attended);
}

#[tokio::test]
#[serial]
async fn test_mark_attendance_without_registration_is_not_found() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");

    let result = db.registry().mark_attendance(2, attendance(101)).await;
    assert_matches!(result, Err(RegistryError::RegistrationNotFound { student_id: 101, event_id: 2 }));

    // No registration was created as a side effect
    assert!(db.service().registrations.find(101, 2).await.unwrap().is_none());
    assert_eq!(db.count_records("registrations").await.unwrap(), 3);
}

#[tokio::test]
#[serial]
async fn test_record_feedback() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");
    let registry = db.registry();

    let updated = registry.record_feedback(3, feedback(201, 3)).await.expect("Failed to record feedback");
    assert_eq!(updated.feedback_score, Some(3));

    // Scores are stored verbatim
    let updated = registry.record_feedback(3, feedback(201, 42)).await.expect("Failed to record feedback");
    assert_eq!(updated.feedback_score, Some(42));
}

#[tokio::test]
#[serial]
async fn test_record_feedback_without_registration_is_not_found() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");

    let result = db.registry().record_feedback(1, feedback(201, 5)).await;
    assert_matches!(result, Err(RegistryError::RegistrationNotFound { .. }));

    let untouched = db.service().registrations.list_for_event(1).await.unwrap();
    assert_eq!(untouched.iter().filter_map(|r| r.feedback_score).collect::<Vec<_>>(), vec![5, 4]);
}

#[tokio::test]
#[serial]
async fn test_create_student_with_duplicate_email_is_conflict() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");

    let result = db
        .registry()
        .create_student(student_request("Alice Again", "alice.j@example.com", Some(1)))
        .await;

    assert_matches!(result, Err(RegistryError::DuplicateEmail { email }) if email == "alice.j@example.com");
    assert_eq!(db.count_records("students").await.unwrap(), 3);
}

#[tokio::test]
#[serial]
async fn test_list_events_ordered_by_date() {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");

    let names: Vec<String> = db
        .registry()
        .list_events()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.event_name)
        .collect();

    assert_eq!(names, vec!["Web Dev Workshop", "AI & ML Talk", "Annual Fest"]);
}
