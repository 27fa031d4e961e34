use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{consts::{OVERTIME_PAY_MULTIPLIER, WORKING_HOURS_PER_DAY}, entity::{attendance, employee, overtime, payroll_period, reimbursement}, error::PayrollError, utils};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSummary {
    pub total_item: usize,
    pub total_amount: i64,
    pub total_hours: i64,
    pub overtimes: Vec<overtime::Model>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementSummary {
    pub total_item: usize,
    pub total_amount: i64,
    pub reimbursements: Vec<reimbursement::Model>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    pub employee_id: Uuid,
    pub attendances: Vec<attendance::Model>,
    pub overtime: OvertimeSummary,
    pub reimbursement: ReimbursementSummary,
    pub basic_salary: i64,
    pub salary: i64,
    pub take_home_pay: i64,
}

/// Keeps records submitted strictly before the period's processing cutoff.
fn filter_by_cutoff<T>(
    records: Vec<T>,
    created_at: impl Fn(&T) -> DateTimeWithTimeZone,
    cutoff: DateTimeWithTimeZone,
) -> Vec<T> {
    records.into_iter().filter(|record| created_at(record) < cutoff).collect()
}

impl Payslip {
    /// Salary breakdown for one employee over a processed period.
    ///
    /// Pure function of its inputs: recomputing with the same records always
    /// yields the same payslip, and records created at or after the
    /// processing cutoff never contribute even when their date falls inside
    /// the period.
    pub fn generate(
        employee_id: Uuid,
        basic_salary: i64,
        period: &payroll_period::Model,
        attendances: Vec<attendance::Model>,
        overtimes: Vec<overtime::Model>,
        reimbursements: Vec<reimbursement::Model>,
    ) -> Result<Self, PayrollError> {
        let Some(cutoff) = period.processed_at else {
            return Err(PayrollError::PeriodNotProcessed);
        };

        let total_days = utils::period_day_count(period.start_date, period.end_date);
        if total_days < 1 {
            return Err(PayrollError::InvalidDateRange);
        }

        let attendances = filter_by_cutoff(attendances, |a| a.created_at, cutoff);

        // Attendance credit never exceeds the calendar length of the period.
        let effective_days = (attendances.len() as i64).min(total_days);

        let salary_per_day = basic_salary / total_days;
        let salary_per_hour = salary_per_day / WORKING_HOURS_PER_DAY;
        let salary = salary_per_day * effective_days;

        let overtimes = filter_by_cutoff(overtimes, |o| o.created_at, cutoff);
        let total_overtime_hours = overtimes.iter().map(|o| i64::from(o.total_hours)).sum::<i64>();
        let total_overtime_pay = overtimes.iter()
            .map(|o| i64::from(o.total_hours) * salary_per_hour * OVERTIME_PAY_MULTIPLIER)
            .sum::<i64>();

        let reimbursements = filter_by_cutoff(reimbursements, |r| r.created_at, cutoff);
        let total_reimbursement = reimbursements.iter().map(|r| r.amount).sum::<i64>();

        Ok(Self {
            employee_id,
            overtime: OvertimeSummary {
                total_item: overtimes.len(),
                total_amount: total_overtime_pay,
                total_hours: total_overtime_hours,
                overtimes,
            },
            reimbursement: ReimbursementSummary {
                total_item: reimbursements.len(),
                total_amount: total_reimbursement,
                reimbursements,
            },
            attendances,
            basic_salary,
            salary,
            // Reimbursement is deducted from take-home pay.
            take_home_pay: salary - total_reimbursement + total_overtime_pay,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipReportEmployee {
    pub id: Uuid,
    pub username: String,
    pub basic_salary: i64,
    pub salary: i64,
    pub take_home_pay: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipReport {
    pub employees: Vec<PayslipReportEmployee>,
    pub total_basic_salary: i64,
    pub total_salary: i64,
    pub total_take_home_pay: i64,
}

impl PayslipReport {
    /// Rows follow the employee order; totals are the column sums.
    pub fn aggregate(employees: &[employee::Model], payslips: &[Payslip]) -> Self {
        let mut rows = Vec::with_capacity(employees.len());
        let mut total_basic_salary = 0;
        let mut total_salary = 0;
        let mut total_take_home_pay = 0;

        for employee in employees {
            let Some(payslip) = payslips.iter().find(|p| p.employee_id == employee.id) else {
                continue;
            };

            rows.push(PayslipReportEmployee {
                id: employee.id,
                username: employee.username.clone(),
                basic_salary: payslip.basic_salary,
                salary: payslip.salary,
                take_home_pay: payslip.take_home_pay,
            });

            total_basic_salary += payslip.basic_salary;
            total_salary += payslip.salary;
            total_take_home_pay += payslip.take_home_pay;
        }

        Self {
            employees: rows,
            total_basic_salary,
            total_salary,
            total_take_home_pay,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone as _};

    use crate::entity::sea_orm_active_enums::RoleType;

    use super::*;

    fn dt(year: i32, month: u32, day: u32, hour: u32) -> DateTimeWithTimeZone {
        Local.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap().fixed_offset()
    }

    /// January 2025, processed on February 1st at 09:00.
    fn processed_period() -> payroll_period::Model {
        payroll_period::Model {
            id: Uuid::new_v4(),
            created_at: dt(2024, 12, 20, 10),
            updated_at: dt(2025, 2, 1, 9),
            created_by: Some(Uuid::new_v4()),
            updated_by: None,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            processed_at: Some(dt(2025, 2, 1, 9)),
            processed_by: Some(Uuid::new_v4()),
        }
    }

    fn attendance_on(day: u32, created_at: DateTimeWithTimeZone) -> attendance::Model {
        attendance::Model {
            id: Uuid::new_v4(),
            created_at,
            updated_at: created_at,
            created_by: Some(Uuid::new_v4()),
            updated_by: None,
            start_time: dt(2025, 1, day, 9),
            end_time: dt(2025, 1, day, 17),
        }
    }

    fn overtime_of(day: u32, hours: i16, created_at: DateTimeWithTimeZone) -> overtime::Model {
        overtime::Model {
            id: Uuid::new_v4(),
            created_at,
            updated_at: created_at,
            created_by: Some(Uuid::new_v4()),
            updated_by: None,
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            total_hours: hours,
        }
    }

    fn reimbursement_of(amount: i64, created_at: DateTimeWithTimeZone) -> reimbursement::Model {
        reimbursement::Model {
            id: Uuid::new_v4(),
            created_at,
            updated_at: created_at,
            created_by: Some(Uuid::new_v4()),
            updated_by: None,
            amount,
            description: "taxi".to_string(),
        }
    }

    #[test]
    fn test_payslip_for_a_31_day_period() {
        let period = processed_period();

        // 3,100,000 over 31 days: 100,000 per day, 12,500 per hour.
        let attendances = (1..=20).map(|day| attendance_on(day, dt(2025, 1, day, 9))).collect();
        let overtimes = vec![overtime_of(10, 2, dt(2025, 1, 10, 18))];
        let reimbursements = vec![reimbursement_of(50_000, dt(2025, 1, 15, 12))];

        let payslip = Payslip::generate(
            Uuid::new_v4(),
            3_100_000,
            &period,
            attendances,
            overtimes,
            reimbursements,
        ).unwrap();

        assert_eq!(payslip.basic_salary, 3_100_000);
        assert_eq!(payslip.salary, 2_000_000);
        assert_eq!(payslip.attendances.len(), 20);
        assert_eq!(payslip.overtime.total_item, 1);
        assert_eq!(payslip.overtime.total_hours, 2);
        assert_eq!(payslip.overtime.total_amount, 50_000);
        assert_eq!(payslip.reimbursement.total_item, 1);
        assert_eq!(payslip.reimbursement.total_amount, 50_000);
        assert_eq!(payslip.take_home_pay, 2_000_000);
    }

    #[test]
    fn test_records_created_at_or_after_cutoff_are_excluded() {
        let period = processed_period();
        let cutoff = period.processed_at.unwrap();

        let attendances = vec![
            attendance_on(10, dt(2025, 1, 10, 9)),
            // Dates inside the period, submitted at and after processing.
            attendance_on(11, cutoff),
            attendance_on(12, dt(2025, 2, 2, 9)),
        ];
        let overtimes = vec![overtime_of(13, 3, dt(2025, 2, 2, 9))];
        let reimbursements = vec![reimbursement_of(75_000, dt(2025, 2, 3, 9))];

        let payslip = Payslip::generate(
            Uuid::new_v4(),
            3_100_000,
            &period,
            attendances,
            overtimes,
            reimbursements,
        ).unwrap();

        assert_eq!(payslip.attendances.len(), 1);
        assert_eq!(payslip.salary, 100_000);
        assert_eq!(payslip.overtime.total_item, 0);
        assert_eq!(payslip.overtime.total_amount, 0);
        assert_eq!(payslip.reimbursement.total_item, 0);
        assert_eq!(payslip.reimbursement.total_amount, 0);
        assert_eq!(payslip.take_home_pay, 100_000);
    }

    #[test]
    fn test_attendance_credit_is_capped_at_period_length() {
        let period = processed_period();

        // 40 submissions in a 31-day period.
        let attendances = (0..40).map(|i| attendance_on(1 + i % 28, dt(2025, 1, 1 + i % 28, 9))).collect();

        let payslip = Payslip::generate(
            Uuid::new_v4(),
            3_100_000,
            &period,
            attendances,
            Vec::new(),
            Vec::new(),
        ).unwrap();

        assert_eq!(payslip.attendances.len(), 40);
        assert_eq!(payslip.salary, 3_100_000);
    }

    #[test]
    fn test_unprocessed_period_yields_no_payslip() {
        let mut period = processed_period();
        period.processed_at = None;
        period.processed_by = None;

        let result = Payslip::generate(
            Uuid::new_v4(),
            3_100_000,
            &period,
            vec![attendance_on(10, dt(2025, 1, 10, 9))],
            Vec::new(),
            Vec::new(),
        );

        assert!(matches!(result, Err(PayrollError::PeriodNotProcessed)));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let period = processed_period();
        let employee_id = Uuid::new_v4();

        let attendances: Vec<_> = (1..=5).map(|day| attendance_on(day, dt(2025, 1, day, 9))).collect();
        let overtimes = vec![overtime_of(3, 1, dt(2025, 1, 3, 18))];
        let reimbursements = vec![reimbursement_of(20_000, dt(2025, 1, 4, 12))];

        let first = Payslip::generate(
            employee_id,
            3_100_000,
            &period,
            attendances.clone(),
            overtimes.clone(),
            reimbursements.clone(),
        ).unwrap();
        let second = Payslip::generate(
            employee_id,
            3_100_000,
            &period,
            attendances,
            overtimes,
            reimbursements,
        ).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_report_totals_are_row_sums_in_employee_order() {
        let period = processed_period();

        let employees: Vec<_> = ["alice", "bob"].iter().map(|username| employee::Model {
            id: Uuid::new_v4(),
            created_at: dt(2024, 12, 1, 9),
            updated_at: dt(2024, 12, 1, 9),
            username: username.to_string(),
            password: Vec::new(),
            role: RoleType::Employee,
            salary: 3_100_000,
        }).collect();

        let payslips: Vec<_> = employees.iter().rev().map(|employee| Payslip::generate(
            employee.id,
            employee.salary,
            &period,
            (1..=10).map(|day| attendance_on(day, dt(2025, 1, day, 9))).collect(),
            vec![overtime_of(5, 2, dt(2025, 1, 5, 18))],
            Vec::new(),
        ).unwrap()).collect();

        let report = PayslipReport::aggregate(&employees, &payslips);

        assert_eq!(report.employees.len(), 2);
        assert_eq!(report.employees[0].username, "alice");
        assert_eq!(report.employees[1].username, "bob");
        assert_eq!(report.total_basic_salary, report.employees.iter().map(|e| e.basic_salary).sum::<i64>());
        assert_eq!(report.total_salary, report.employees.iter().map(|e| e.salary).sum::<i64>());
        assert_eq!(report.total_take_home_pay, report.employees.iter().map(|e| e.take_home_pay).sum::<i64>());
        assert_eq!(report.total_salary, 2_000_000);
        assert_eq!(report.total_take_home_pay, 2_100_000);
    }
}
