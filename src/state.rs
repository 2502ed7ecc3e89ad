use crate::{config::ConnectionPool, di::DependenciesInject};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            di_container: DependenciesInject::new(pool),
        }
    }
}
