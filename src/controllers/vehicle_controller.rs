use crate::dto::vehicle_dto::{CreatedResponse, MessageResponse, VehiclePayload, VehicleResponse};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{vehicle_not_found, AppError};
use tracing::{debug, info};

#[derive(Clone)]
pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(repository: VehicleRepository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, payload: VehiclePayload) -> Result<CreatedResponse, AppError> {
        let input = payload.into_create_input()?;

        let id = self
            .repository
            .create(&input.model, &input.owner, &input.registration_number, input.is_active)
            .await?;

        info!("🚗 Vehículo {} creado: {} / {}", id, input.model, input.registration_number);
        Ok(CreatedResponse { id })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(vehicle_not_found)?;

        debug!("🔍 Encontrado {}", vehicle);
        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(&self, id: i64, payload: VehiclePayload) -> Result<MessageResponse, AppError> {
        let input = payload.into_update_input()?;

        self.repository
            .update(id, &input.model, &input.owner, &input.registration_number, input.is_active)
            .await?;

        info!("✏️ Vehículo {} actualizado", id);
        Ok(MessageResponse::new("Vehicle updated"))
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.repository.delete(id).await?;
        info!("🗑️ Vehículo {} eliminado", id);
        Ok(MessageResponse::new("Vehicle deleted"))
    }
}
