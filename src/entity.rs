pub mod prelude;

pub mod attendance;
pub mod employee;
pub mod overtime;
pub mod payroll_period;
pub mod reimbursement;
pub mod sea_orm_active_enums;
