use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, household::entities::HouseholdProfile,
};

/// Read access to the household preference records owned by the persistence layer.
#[cfg_attr(test, mockall::automock)]
pub trait HouseholdRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<HouseholdProfile>, CoreError>> + Send;
}
