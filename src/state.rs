//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo se construye una vez al arrancar.

use sqlx::SqlitePool;
use crate::config::environment::EnvironmentConfig;
use crate::controllers::VehicleController;
use crate::repositories::VehicleRepository;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub vehicles: VehicleController,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        let vehicles = VehicleController::new(VehicleRepository::new(pool.clone()));
        Self {
            pool,
            config,
            vehicles,
        }
    }
}
