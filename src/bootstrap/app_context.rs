use std::sync::Arc;

use crate::application::ports::customer_repository::CustomerRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    customer_repo: Arc<dyn CustomerRepository>,
}

impl AppServices {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn customer_repo(&self) -> Arc<dyn CustomerRepository> {
        self.services.customer_repo.clone()
    }
}
