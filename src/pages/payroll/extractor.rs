use std::ops::Deref;

use super::*;

impl FromRequest for payroll_period::Model {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let period_id = req.match_info().get("period_id").expect("This extractor must be used under `period_id` path");
            let Ok(period_id) = Uuid::from_str(period_id) else {
                return Err(PayrollError::InvalidPeriodId.into())
            };

            let db = req.app_data::<web::Data<DatabaseConnection>>().expect("DatabaseConnection must be attached");

            let Some(period) = PayrollPeriod::find_by_id(period_id)
                .one(db.as_ref()).await
                .map_err(PayrollError::from)?
            else {
                return Err(PayrollError::PeriodNotFound.into())
            };

            Ok(period)
        })
    }
}

/// A period still open for record submission and processing.
pub(super) struct UnprocessedPeriod(pub(super) payroll_period::Model);

impl Deref for UnprocessedPeriod {
    type Target = payroll_period::Model;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for UnprocessedPeriod {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let period = payroll_period::Model::from_request(&req, &mut dev::Payload::None).await?;

            if period.processed_at.is_some() {
                return Err(PayrollError::AlreadyProcessed.into());
            }

            Ok(Self(period))
        })
    }
}

/// A period whose payroll has been run; the only state payslips exist in.
pub(super) struct ProcessedPeriod(pub(super) payroll_period::Model);

impl Deref for ProcessedPeriod {
    type Target = payroll_period::Model;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for ProcessedPeriod {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let period = payroll_period::Model::from_request(&req, &mut dev::Payload::None).await?;

            if period.processed_at.is_none() {
                return Err(PayrollError::PeriodNotProcessed.into());
            }

            Ok(Self(period))
        })
    }
}
