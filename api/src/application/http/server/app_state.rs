use std::sync::Arc;

use mealguard_core::application::MealguardService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<MealguardService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealguardService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
