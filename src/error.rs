use actix_web::{body, http::{header::ContentType, StatusCode}, HttpResponse};
use thiserror::Error;

/// Business and infrastructure failures of the payroll domain.
///
/// Every handler returns this so the API layer can map each case to a
/// distinct response instead of a blanket 400.
#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("start date is later than end date")]
    InvalidDateRange,
    #[error("invalid `period_id`")]
    InvalidPeriodId,
    #[error("attendance must start and end on the same day")]
    AttendanceNotSameDay,
    #[error("cannot attend on weekend")]
    AttendanceNotWeekday,
    #[error("end time must be greater than start time")]
    AttendanceInvalidTimeOrder,
    #[error("attendance must be submitted for today")]
    AttendanceNotToday,
    #[error("overtime must be between {} and {} hours", crate::consts::OVERTIME_HOURS.0, crate::consts::OVERTIME_HOURS.1)]
    OvertimeInvalidDuration,
    #[error("overtime must be submitted for today")]
    OvertimeNotToday,
    #[error("no attendance found for that date")]
    OvertimeWithoutAttendance,
    #[error("reimbursement amount must be positive")]
    ReimbursementInvalidAmount,

    #[error("a period with the same date range already exists")]
    PeriodAlreadyExists,
    #[error("the period overlaps an existing period")]
    PeriodOverlapping,
    #[error("attendance for today already exists")]
    AttendanceAlreadyExists,
    #[error("overtime for that date already exists")]
    OvertimeAlreadyExists,

    #[error("the period is already processed")]
    AlreadyProcessed,
    #[error("the period is not processed")]
    PeriodNotProcessed,

    #[error("period not found")]
    PeriodNotFound,
    #[error("employee not found")]
    EmployeeNotFound,

    #[error("database error")]
    Database(#[from] sea_orm::DbErr),
}

impl actix_web::error::ResponseError for PayrollError {
    fn error_response(&self) -> HttpResponse<body::BoxBody> {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PayrollError::InvalidDateRange
            | PayrollError::InvalidPeriodId
            | PayrollError::AttendanceNotSameDay
            | PayrollError::AttendanceNotWeekday
            | PayrollError::AttendanceInvalidTimeOrder
            | PayrollError::AttendanceNotToday
            | PayrollError::OvertimeInvalidDuration
            | PayrollError::OvertimeNotToday
            | PayrollError::OvertimeWithoutAttendance
            | PayrollError::ReimbursementInvalidAmount
            | PayrollError::AlreadyProcessed
            | PayrollError::PeriodNotProcessed => StatusCode::BAD_REQUEST,

            PayrollError::PeriodAlreadyExists
            | PayrollError::PeriodOverlapping
            | PayrollError::AttendanceAlreadyExists
            | PayrollError::OvertimeAlreadyExists => StatusCode::CONFLICT,

            PayrollError::PeriodNotFound
            | PayrollError::EmployeeNotFound => StatusCode::NOT_FOUND,

            PayrollError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::error::ResponseError as _;

    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(PayrollError::InvalidDateRange.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PayrollError::AttendanceNotWeekday.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PayrollError::OvertimeInvalidDuration.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_state_errors_are_bad_request() {
        assert_eq!(PayrollError::AlreadyProcessed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PayrollError::PeriodNotProcessed.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_errors_are_conflict() {
        assert_eq!(PayrollError::PeriodAlreadyExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(PayrollError::PeriodOverlapping.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_is_distinct_from_state_errors() {
        assert_eq!(PayrollError::PeriodNotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_is_internal() {
        let err = PayrollError::from(sea_orm::DbErr::Custom("connection reset".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
