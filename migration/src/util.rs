use sea_orm_migration::prelude::*;

pub(crate) fn default_table_statement() -> TableCreateStatement {
    TableCreateStatement::new()
        .if_not_exists()
        .col(ColumnDef::new(DefaultColumn::Id)
            .uuid()
            .primary_key()
            .default(Expr::cust("GEN_RANDOM_UUID()"))
            .take())
        .col(ColumnDef::new(DefaultColumn::CreatedAt)
            .timestamp_with_time_zone()
            .not_null()
            .take())
        .col(ColumnDef::new(DefaultColumn::UpdatedAt)
            .timestamp_with_time_zone()
            .not_null()
            .take())
        .take()
}

#[derive(DeriveIden)]
pub(crate) enum DefaultColumn {
    Id,
    CreatedAt,
    UpdatedAt,
}

/// Must run the `setup_employee_table_fk` macro on the table afterwards
///
/// # Example
///
/// ```rs
/// manager
///     .create_table(default_employee_table_statement()
///         .table(PayrollPeriod::Table)
///         .col(ColumnDef::new(PayrollPeriod::StartDate)
///             .date()
///             .not_null())
///         .col(ColumnDef::new(PayrollPeriod::EndDate)
///             .date()
///             .not_null())
///         .take()
///     ).await.unwrap();
/// setup_employee_table_fk!(manager, PayrollPeriod::Table);
/// ```
pub(crate) fn default_employee_table_statement() -> TableCreateStatement {
    default_table_statement()
        .col(ColumnDef::new(DefaultEmployeeColumn::CreatedBy)
            .uuid())
        .col(ColumnDef::new(DefaultEmployeeColumn::UpdatedBy)
            .uuid())
        .take()
}

#[macro_export]
macro_rules! setup_employee_table_fk {
    ($m:expr,$t:expr) => {{
        use crate::util::*;
        use crate::m20250701_084512_init::Employee;

        $m.create_foreign_key(ForeignKeyCreateStatement::new()
                .from($t, DefaultEmployeeColumn::CreatedBy)
                .to(Employee::Table, DefaultColumn::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .on_update(ForeignKeyAction::Cascade)
                .take()
        ).await.unwrap();

        $m.create_foreign_key(ForeignKeyCreateStatement::new()
                .from($t, DefaultEmployeeColumn::UpdatedBy)
                .to(Employee::Table, DefaultColumn::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .on_update(ForeignKeyAction::Cascade)
                .take()
        ).await.unwrap();
    }};
}

#[derive(DeriveIden)]
pub(crate) enum DefaultEmployeeColumn {
    CreatedBy,
    UpdatedBy,
}
