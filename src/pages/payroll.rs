use std::str::FromStr;

use actix_web::{dev, get, post, web, FromRequest, HttpRequest, HttpResponse};
use chrono::Local;
use futures_util::future::{try_join_all, LocalBoxFuture};
use sea_orm::{ActiveValue::{Set, Unchanged}, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{auth::Admin, consts::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE}, entity::{attendance, employee, overtime, payroll_period, prelude::*, reimbursement, sea_orm_active_enums::RoleType}, error::PayrollError, payslip::{Payslip, PayslipReport}, utils};

use extractor::{ProcessedPeriod, UnprocessedPeriod};
use model::*;

mod extractor;
mod model;

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(create_period)
        .service(list_periods)
        .service(process_period)
        .service(get_payslip)
        .service(get_payslip_report);
}

#[post("/period")]
async fn create_period(db: web::Data<DatabaseConnection>, admin: Admin, payload: web::Json<CreatePeriod>) -> Result<HttpResponse, PayrollError> {
    if payload.start_date > payload.end_date {
        return Err(PayrollError::InvalidDateRange);
    }

    let exact = PayrollPeriod::find()
        .filter(payroll_period::Column::StartDate.eq(payload.start_date))
        .filter(payroll_period::Column::EndDate.eq(payload.end_date))
        .one(db.as_ref()).await?;

    if exact.is_some() {
        return Err(PayrollError::PeriodAlreadyExists);
    }

    // Inclusive ranges overlap when each starts no later than the other ends.
    let overlapping = PayrollPeriod::find()
        .filter(payroll_period::Column::StartDate.lte(payload.end_date))
        .filter(payroll_period::Column::EndDate.gte(payload.start_date))
        .one(db.as_ref()).await?;

    if overlapping.is_some() {
        return Err(PayrollError::PeriodOverlapping);
    }

    let period = payroll_period::ActiveModel {
        created_at: Set(Local::now().fixed_offset()),
        updated_at: Set(Local::now().fixed_offset()),
        created_by: Set(Some(admin.id)),
        updated_by: Set(Some(admin.id)),
        start_date: Set(payload.start_date),
        end_date: Set(payload.end_date),
        ..Default::default()
    };

    let period = PayrollPeriod::insert(period)
        .exec_with_returning(db.as_ref()).await?;

    Ok(HttpResponse::Created().json(web::Json(period)))
}

#[get("/period")]
async fn list_periods(db: web::Data<DatabaseConnection>, _admin: Admin, query: web::Query<ListPeriods>) -> Result<HttpResponse, PayrollError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
    let page_size = query.size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

    let paginator = PayrollPeriod::find()
        .order_by_asc(payroll_period::Column::StartDate)
        .paginate(db.as_ref(), page_size);

    let total_item = paginator.num_items().await?;
    let data = paginator.fetch_page(page - 1).await?;

    Ok(HttpResponse::Ok().json(web::Json(PeriodPage {
        data,
        paging: PageMetadata {
            page,
            page_size,
            total_item,
            total_page: utils::page_count(total_item, page_size),
        },
    })))
}

#[post("/period/{period_id}/process")]
async fn process_period(db: web::Data<DatabaseConnection>, admin: Admin, period: UnprocessedPeriod) -> Result<HttpResponse, PayrollError> {
    let now = Local::now().fixed_offset();

    // One-way transition: a processed period never reopens.
    let period = PayrollPeriod::update(payroll_period::ActiveModel {
        id: Unchanged(period.id),
        updated_at: Set(now),
        updated_by: Set(Some(admin.id)),
        processed_at: Set(Some(now)),
        processed_by: Set(Some(admin.id)),
        ..Default::default()
    }).exec(db.as_ref()).await?;

    Ok(HttpResponse::Ok().json(web::Json(period)))
}

/// Loads one employee's records inside the period window and computes the payslip.
///
/// The window bounds what a record's own date may be; the processing cutoff
/// inside [`Payslip::generate`] bounds when it may have been submitted.
async fn generate_employee_payslip(
    db: &DatabaseConnection,
    employee: &employee::Model,
    period: &payroll_period::Model,
) -> Result<Payslip, PayrollError> {
    let cutoff = period.processed_at.ok_or(PayrollError::PeriodNotProcessed)?;
    let (window_start, window_end) = utils::period_range(period.start_date, period.end_date);

    info!("Generating payslip for period {} to {}", period.start_date, period.end_date);

    let attendances = Attendance::find()
        .filter(attendance::Column::CreatedBy.eq(employee.id))
        .filter(attendance::Column::StartTime.between(window_start, window_end))
        .all(db).await?;

    let overtimes = Overtime::find()
        .filter(overtime::Column::CreatedBy.eq(employee.id))
        .filter(overtime::Column::Date.between(period.start_date, period.end_date))
        .all(db).await?;

    // Reimbursements carry no date of their own; the submission window alone bounds them.
    let reimbursements = Reimbursement::find()
        .filter(reimbursement::Column::CreatedBy.eq(employee.id))
        .filter(reimbursement::Column::CreatedAt.between(window_start, cutoff))
        .all(db).await?;

    Payslip::generate(employee.id, employee.salary, period, attendances, overtimes, reimbursements)
}

#[get("/period/{period_id}/payslip")]
async fn get_payslip(db: web::Data<DatabaseConnection>, employee: employee::Model, period: ProcessedPeriod) -> Result<HttpResponse, PayrollError> {
    // Salary comes from the store, not the token, so raises apply immediately.
    let employee = Employee::find_by_id(employee.id)
        .one(db.as_ref()).await?
        .ok_or(PayrollError::EmployeeNotFound)?;

    let payslip = generate_employee_payslip(db.as_ref(), &employee, &period).await?;

    Ok(HttpResponse::Ok().json(web::Json(payslip)))
}

#[get("/period/{period_id}/report")]
async fn get_payslip_report(db: web::Data<DatabaseConnection>, _admin: Admin, period: ProcessedPeriod) -> Result<HttpResponse, PayrollError> {
    let employees = Employee::find()
        .filter(employee::Column::Role.eq(RoleType::Employee))
        .all(db.as_ref()).await?;

    // One future per employee; the first failure aborts the whole report.
    let payslips = try_join_all(
        employees.iter().map(|employee|
            generate_employee_payslip(db.as_ref(), employee, &period)
        )
    ).await?;

    Ok(HttpResponse::Ok().json(web::Json(PayslipReport::aggregate(&employees, &payslips))))
}
