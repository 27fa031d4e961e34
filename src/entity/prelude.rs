pub use super::attendance::Entity as Attendance;
pub use super::employee::Entity as Employee;
pub use super::overtime::Entity as Overtime;
pub use super::payroll_period::Entity as PayrollPeriod;
pub use super::reimbursement::Entity as Reimbursement;
