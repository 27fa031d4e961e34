use actix_web::{post, web, HttpResponse};
use chrono::Local;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};

use crate::{entity::{employee, prelude::*, reimbursement}, error::PayrollError};

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(create_reimbursement);
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateReimbursement {
    amount: i64,
    description: String,
}

#[post("")]
async fn create_reimbursement(db: web::Data<DatabaseConnection>, employee: employee::Model, payload: web::Json<CreateReimbursement>) -> Result<HttpResponse, PayrollError> {
    if payload.amount <= 0 {
        return Err(PayrollError::ReimbursementInvalidAmount);
    }

    let model = reimbursement::ActiveModel {
        created_by: Set(Some(employee.id)),
        updated_by: Set(Some(employee.id)),
        created_at: Set(Local::now().fixed_offset()),
        updated_at: Set(Local::now().fixed_offset()),
        amount: Set(payload.amount),
        description: Set(payload.description.clone()),
        ..Default::default()
    };

    let created = Reimbursement::insert(model)
        .exec_with_returning(db.as_ref()).await?;

    Ok(HttpResponse::Created()
        .json(web::Json(created)))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::{Method, StatusCode}, test, App};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use crate::{auth::Authority, entity::sea_orm_active_enums::RoleType};

    use super::*;

    const SECRET: &[u8] = b"secret";

    fn employee() -> employee::Model {
        employee::Model {
            id: Uuid::new_v4(),
            created_at: Local::now().into(),
            updated_at: Local::now().into(),
            username: "Bob".to_string(),
            password: Vec::new(),
            role: RoleType::Employee,
            salary: 1_000_000,
        }
    }

    #[actix_web::test]
    async fn test_non_positive_amount_is_rejected() {
        let employee = employee();
        let token = Authority::new(SECRET).issue_for(&employee);

        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/reimbursement").configure(config))
        ).await;

        let req = test::TestRequest::default()
            .uri("/reimbursement")
            .method(Method::POST)
            .insert_header(("Authorization", format!("JWT {token}")))
            .set_json(CreateReimbursement {
                amount: 0,
                description: "lunch".to_string(),
            })
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_reimbursement() {
        let employee = employee();
        let token = Authority::new(SECRET).issue_for(&employee);

        let created = reimbursement::Model {
            id: Uuid::new_v4(),
            created_at: Local::now().into(),
            updated_at: Local::now().into(),
            created_by: Some(employee.id),
            updated_by: Some(employee.id),
            amount: 150_000,
            description: "client taxi".to_string(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ created.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/reimbursement").configure(config))
        ).await;

        let req = test::TestRequest::default()
            .uri("/reimbursement")
            .method(Method::POST)
            .insert_header(("Authorization", format!("JWT {token}")))
            .set_json(CreateReimbursement {
                amount: created.amount,
                description: created.description.clone(),
            })
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
