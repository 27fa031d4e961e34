use sea_orm_migration::{prelude::{extension::postgres::TypeDropStatement, *}, sea_orm::{ActiveEnum, DbBackend, DeriveActiveEnum, EnumIter, Schema}};

use crate::{setup_employee_table_fk, util::{default_employee_table_statement, default_table_statement, DefaultColumn}};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(DbBackend::Postgres);

        manager
            .create_type(
                schema.create_enum_from_active_enum::<RoleType>()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(Employee::Table)
                .col(ColumnDef::new(Employee::Username)
                    .text()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(Employee::Password)
                    .binary()
                    .not_null()) // Password should be in a hashed format
                .col(ColumnDef::new(Employee::Role)
                    .custom(RoleType::name())
                    .not_null())
                .col(ColumnDef::new(Employee::Salary)
                    .big_integer()
                    .not_null())
                .take()
            ).await.unwrap();

        manager
            .create_table(default_employee_table_statement()
                .table(PayrollPeriod::Table)
                .col(ColumnDef::new(PayrollPeriod::StartDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(PayrollPeriod::EndDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(PayrollPeriod::ProcessedAt)
                    .timestamp_with_time_zone())
                .col(ColumnDef::new(PayrollPeriod::ProcessedBy)
                    .uuid())
                .take()
            ).await.unwrap();
        setup_employee_table_fk!(manager, PayrollPeriod::Table);

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(PayrollPeriod::Table, PayrollPeriod::ProcessedBy)
            .to(Employee::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_employee_table_statement()
                .table(Attendance::Table)
                .col(ColumnDef::new(Attendance::StartTime)
                    .timestamp_with_time_zone()
                    .not_null())
                .col(ColumnDef::new(Attendance::EndTime)
                    .timestamp_with_time_zone()
                    .not_null())
                .take()
        ).await.unwrap();
        setup_employee_table_fk!(manager, Attendance::Table);

        manager
            .create_table(default_employee_table_statement()
                .table(Overtime::Table)
                .col(ColumnDef::new(Overtime::Date)
                    .date()
                    .not_null())
                .col(ColumnDef::new(Overtime::TotalHours)
                    .small_integer()
                    .not_null())
                .take()
        ).await.unwrap();
        setup_employee_table_fk!(manager, Overtime::Table);

        manager
            .create_table(default_employee_table_statement()
                .table(Reimbursement::Table)
                .col(ColumnDef::new(Reimbursement::Amount)
                    .big_integer()
                    .not_null())
                .col(ColumnDef::new(Reimbursement::Description)
                    .text()
                    .not_null())
                .take()
        ).await.unwrap();
        setup_employee_table_fk!(manager, Reimbursement::Table);

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(
            TableDropStatement::new()
                .table(Reimbursement::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(Overtime::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(Attendance::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(PayrollPeriod::Table)
                .take()
        ).await.unwrap();

        manager
            .drop_table(
                TableDropStatement::new()
                    .table(Employee::Table)
                    .take()
            ).await.unwrap();

        manager
            .drop_type(
                TypeDropStatement::new()
                    .name(RoleType::name())
                    .to_owned()
            ).await.unwrap();

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum Employee {
    Table,
    Username,
    Password,
    Role,
    Salary,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role_type")]
enum RoleType {
    #[sea_orm(string_value = "employee")]
    Employee,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Iden)]
enum PayrollPeriod {
    Table,
    StartDate,
    EndDate,
    ProcessedAt,
    ProcessedBy,
}

#[derive(Iden)]
enum Attendance {
    Table,
    StartTime,
    EndTime,
}

#[derive(Iden)]
enum Overtime {
    Table,
    Date,
    TotalHours,
}

#[derive(Iden)]
enum Reimbursement {
    Table,
    Amount,
    Description,
}
