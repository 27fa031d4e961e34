use actix_web::{post, web, HttpResponse};
use chrono::{Local, Utc};
use sea_orm::{prelude::DateTimeWithTimeZone, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::{entity::{attendance, employee, prelude::*}, error::PayrollError, utils};

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(create_attendance);
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateAttendance {
    start_time: DateTimeWithTimeZone,
    end_time: DateTimeWithTimeZone,
}

#[post("")]
async fn create_attendance(db: web::Data<DatabaseConnection>, employee: employee::Model, payload: web::Json<CreateAttendance>) -> Result<HttpResponse, PayrollError> {
    if payload.start_time.date_naive() != payload.end_time.date_naive() {
        return Err(PayrollError::AttendanceNotSameDay);
    }

    if !utils::is_weekday(payload.start_time.date_naive()) {
        return Err(PayrollError::AttendanceNotWeekday);
    }

    if payload.end_time <= payload.start_time {
        return Err(PayrollError::AttendanceInvalidTimeOrder);
    }

    // Submission-time policy: attendance is reported for the current day only.
    let now = Utc::now().with_timezone(&payload.start_time.timezone());
    if payload.start_time.date_naive() != now.date_naive() {
        return Err(PayrollError::AttendanceNotToday);
    }

    let (start_of_day, end_of_day) = utils::get_today_range(&now);

    let existing = Attendance::find()
        .filter(attendance::Column::StartTime.between(start_of_day, end_of_day))
        .filter(attendance::Column::CreatedBy.eq(employee.id))
        .one(db.as_ref()).await?;

    if existing.is_some() {
        return Err(PayrollError::AttendanceAlreadyExists);
    }

    let model = attendance::ActiveModel {
        created_by: Set(Some(employee.id)),
        updated_by: Set(Some(employee.id)),
        created_at: Set(Local::now().fixed_offset()),
        updated_at: Set(Local::now().fixed_offset()),
        start_time: Set(payload.start_time),
        end_time: Set(payload.end_time),
        ..Default::default()
    };

    let created = Attendance::insert(model)
        .exec_with_returning(db.as_ref()).await?;

    Ok(HttpResponse::Created()
        .json(web::Json(created)))
}
