use std::sync::Arc;

use crate::{config::Config, repositories::PersonRepository};

#[derive(Clone)]
pub struct AppState {
    people: Arc<dyn PersonRepository>,
    pub config: Config,
}

impl AppState {
    pub fn new(people: Arc<dyn PersonRepository>, config: Config) -> Self {
        Self { people, config }
    }

    pub fn people(&self) -> &dyn PersonRepository {
        self.people.as_ref()
    }
}
