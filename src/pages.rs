use actix_web::web;

mod auth;
mod attendance;
mod overtime;
mod reimbursement;
mod payroll;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(web::scope("/auth")
            .configure(auth::config))
        .service(web::scope("/attendance")
            .configure(attendance::config))
        .service(web::scope("/overtime")
            .configure(overtime::config))
        .service(web::scope("/reimbursement")
            .configure(reimbursement::config))
        .service(web::scope("/payroll")
            .configure(payroll::config));
}
