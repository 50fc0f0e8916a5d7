//! Request builders for test scenarios

use chrono::NaiveDate;
use campus_events::models::*;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn college_request(name: &str) -> CreateCollegeRequest {
    CreateCollegeRequest {
        college_name: Some(name.to_string()),
        location: Some("Pune".to_string()),
    }
}

pub fn student_request(name: &str, email: &str, college_id: Option<i64>) -> CreateStudentRequest {
    CreateStudentRequest {
        student_name: Some(name.to_string()),
        email: Some(email.to_string()),
        college_id,
    }
}

pub fn event_request(name: &str, event_type: &str, college_id: Option<i64>) -> CreateEventRequest {
    CreateEventRequest {
        event_name: Some(name.to_string()),
        description: Some(format!("{} description", name)),
        event_type: Some(event_type.to_string()),
        event_date: Some(date(2025, 11, 20)),
        college_id,
    }
}

pub fn registration(student_id: i64, event_id: i64) -> RegisterStudentRequest {
    RegisterStudentRequest {
        student_id: Some(student_id),
        event_id: Some(event_id),
    }
}

pub fn attendance(student_id: i64) -> AttendanceRequest {
    AttendanceRequest { student_id: Some(student_id) }
}

pub fn feedback(student_id: i64, score: i32) -> FeedbackRequest {
    FeedbackRequest {
        score: Some(score),
        student_id: Some(student_id),
    }
}
