use actix_web::{post, web, HttpResponse};
use chrono::{Local, NaiveDate};
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::{consts::OVERTIME_HOURS, entity::{attendance, employee, overtime, prelude::*}, error::PayrollError, utils};

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(create_overtime);
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateOvertime {
    date: NaiveDate,
    total_hours: i16,
}

#[post("")]
async fn create_overtime(db: web::Data<DatabaseConnection>, employee: employee::Model, payload: web::Json<CreateOvertime>) -> Result<HttpResponse, PayrollError> {
    if !(OVERTIME_HOURS.0..=OVERTIME_HOURS.1).contains(&payload.total_hours) {
        return Err(PayrollError::OvertimeInvalidDuration);
    }

    let now = Local::now().fixed_offset();
    if payload.date != now.date_naive() {
        return Err(PayrollError::OvertimeNotToday);
    }

    // Overtime extends a worked day, so the day must have an attendance.
    let (start_of_day, end_of_day) = utils::period_range(payload.date, payload.date);

    let attended = Attendance::find()
        .filter(attendance::Column::CreatedBy.eq(employee.id))
        .filter(attendance::Column::StartTime.between(start_of_day, end_of_day))
        .one(db.as_ref()).await?;

    if attended.is_none() {
        return Err(PayrollError::OvertimeWithoutAttendance);
    }

    let existing = Overtime::find()
        .filter(overtime::Column::CreatedBy.eq(employee.id))
        .filter(overtime::Column::Date.eq(payload.date))
        .one(db.as_ref()).await?;

    if existing.is_some() {
        return Err(PayrollError::OvertimeAlreadyExists);
    }

    let model = overtime::ActiveModel {
        created_by: Set(Some(employee.id)),
        updated_by: Set(Some(employee.id)),
        created_at: Set(Local::now().fixed_offset()),
        updated_at: Set(Local::now().fixed_offset()),
        date: Set(payload.date),
        total_hours: Set(payload.total_hours),
        ..Default::default()
    };

    let created = Overtime::insert(model)
        .exec_with_returning(db.as_ref()).await?;

    Ok(HttpResponse::Created()
        .json(web::Json(created)))
}
