//! Reference dataset
//!
//! Inserts the fixed set of colleges, students, events and registrations the
//! service starts with. Rows that already exist are skipped, so seeding is idempotent.

use chrono::NaiveDate;
use crate::database::DatabasePool;
use crate::models::AttendanceStatus;
use crate::utils::errors::Result;

struct SeedCollege {
    id: i64,
    name: &'static str,
    location: &'static str,
}

struct SeedStudent {
    id: i64,
    name: &'static str,
    email: &'static str,
    college_id: i64,
}

struct SeedEvent {
    id: i64,
    name: &'static str,
    description: &'static str,
    event_type: &'static str,
    date: (i32, u32, u32),
    college_id: i64,
}

struct SeedRegistration {
    student_id: i64,
    event_id: i64,
    date: (i32, u32, u32),
    status: AttendanceStatus,
    feedback_score: Option<i32>,
}

const COLLEGES: &[SeedCollege] = &[
    SeedCollege { id: 1, name: "Tech University", location: "Bengaluru" },
    SeedCollege { id: 2, name: "State College", location: "Mumbai" },
];

const STUDENTS: &[SeedStudent] = &[
    SeedStudent { id: 101, name: "Alice Johnson", email: "alice.j@example.com", college_id: 1 },
    SeedStudent { id: 102, name: "Bob Williams", email: "bob.w@example.com", college_id: 1 },
    SeedStudent { id: 201, name: "Charlie Davis", email: "charlie.d@example.com", college_id: 2 },
];

const EVENTS: &[SeedEvent] = &[
    SeedEvent {
        id: 1,
        name: "Web Dev Workshop",
        description: "Intro to Flask & APIs",
        event_type: "Workshop",
        date: (2025, 10, 26),
        college_id: 1,
    },
    SeedEvent {
        id: 2,
        name: "AI & ML Talk",
        description: "A talk on the future of AI",
        event_type: "Tech Talk",
        date: (2025, 11, 15),
        college_id: 1,
    },
    SeedEvent {
        id: 3,
        name: "Annual Fest",
        description: "The biggest cultural event of the year",
        event_type: "Fest",
        date: (2025, 12, 1),
        college_id: 2,
    },
];

const REGISTRATIONS: &[SeedRegistration] = &[
    SeedRegistration {
        student_id: 101,
        event_id: 1,
        date: (2025, 10, 10),
        status: AttendanceStatus::Attended,
        feedback_score: Some(5),
    },
    SeedRegistration {
        student_id: 102,
        event_id: 1,
        date: (2025, 10, 10),
        status: AttendanceStatus::Attended,
        feedback_score: Some(4),
    },
    SeedRegistration {
        student_id: 201,
        event_id: 3,
        date: (2025, 10, 15),
        status: AttendanceStatus::Registered,
        feedback_score: None,
    },
];

fn seed_date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Insert the reference dataset inside one transaction.
///
/// Returns the number of rows actually inserted; a second run returns 0.
pub async fn seed_reference_data(pool: &DatabasePool) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for college in COLLEGES {
        inserted += sqlx::query(
            "INSERT INTO colleges (college_id, college_name, location) VALUES ($1, $2, $3) ON CONFLICT DO NOTHING"
        )
        .bind(college.id)
        .bind(college.name)
        .bind(college.location)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for student in STUDENTS {
        inserted += sqlx::query(
            "INSERT INTO students (student_id, student_name, email, college_id) VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING"
        )
        .bind(student.id)
        .bind(student.name)
        .bind(student.email)
        .bind(student.college_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for event in EVENTS {
        inserted += sqlx::query(
            r#"
            INSERT INTO events (event_id, event_name, description, event_type, event_date, college_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT DO NOTHING
            "#
        )
        .bind(event.id)
        .bind(event.name)
        .bind(event.description)
        .bind(event.event_type)
        .bind(seed_date(event.date))
        .bind(event.college_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for registration in REGISTRATIONS {
        inserted += sqlx::query(
            r#"
            INSERT INTO registrations (student_id, event_id, registration_date, attendance_status, feedback_score)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT DO NOTHING
            "#
        )
        .bind(registration.student_id)
        .bind(registration.event_id)
        .bind(seed_date(registration.date))
        .bind(registration.status)
        .bind(registration.feedback_score)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    // Explicit ids bypass the sequences; move them past the seeded rows.
    for (table, column) in [("colleges", "college_id"), ("students", "student_id"), ("events", "event_id")] {
        sqlx::query(&format!(
            "SELECT setval(pg_get_serial_sequence('{table}', '{column}'), GREATEST((SELECT MAX({column}) FROM {table}), 1))"
        ))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(rows_inserted = inserted, "Reference data seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_dates_are_valid() {
        for event in EVENTS {
            assert_ne!(seed_date(event.date), NaiveDate::default(), "{}", event.name);
        }
        for registration in REGISTRATIONS {
            assert_ne!(seed_date(registration.date), NaiveDate::default());
        }
    }

    #[test]
    fn test_seed_references_resolve() {
        let colleges: HashSet<i64> = COLLEGES.iter().map(|c| c.id).collect();
        let students: HashSet<i64> = STUDENTS.iter().map(|s| s.id).collect();
        let events: HashSet<i64> = EVENTS.iter().map(|e| e.id).collect();

        assert!(STUDENTS.iter().all(|s| colleges.contains(&s.college_id)));
        assert!(EVENTS.iter().all(|e| colleges.contains(&e.college_id)));
        assert!(REGISTRATIONS.iter().all(|r| students.contains(&r.student_id) && events.contains(&r.event_id)));
    }

    #[test]
    fn test_seed_registration_pairs_are_unique() {
        let pairs: HashSet<(i64, i64)> = REGISTRATIONS.iter().map(|r| (r.student_id, r.event_id)).collect();
        assert_eq!(pairs.len(), REGISTRATIONS.len());
    }
}
