use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::vehicle::Vehicle;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_not_blank;

// Body de POST y PUT. Todo es opcional para poder reportar
// los campos que faltan como error de validación.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct VehiclePayload {
    #[validate(required, length(max = 120), custom = "validate_not_blank")]
    pub model: Option<String>,

    #[validate(required, length(max = 120), custom = "validate_not_blank")]
    pub owner: Option<String>,

    #[validate(required, length(max = 50), custom = "validate_not_blank")]
    pub registration_number: Option<String>,

    pub is_active: Option<bool>,
}

// Datos ya validados que llegan al repositorio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleInput {
    pub model: String,
    pub owner: String,
    pub registration_number: String,
    pub is_active: bool,
}

impl VehiclePayload {
    /// Validar para crear: `is_active` es opcional y por defecto `true`
    pub fn into_create_input(self) -> AppResult<VehicleInput> {
        self.into_input(false)
    }

    /// Validar para reemplazar: los cuatro campos son obligatorios
    pub fn into_update_input(self) -> AppResult<VehicleInput> {
        self.into_input(true)
    }

    fn into_input(self, require_is_active: bool) -> AppResult<VehicleInput> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        if require_is_active && self.is_active.is_none() {
            errors.add("is_active", ValidationError::new("required"));
        }
        if !errors.errors().is_empty() {
            return Err(AppError::Validation(errors));
        }

        match (self.model, self.owner, self.registration_number) {
            (Some(model), Some(owner), Some(registration_number)) => Ok(VehicleInput {
                model,
                owner,
                registration_number,
                is_active: self.is_active.unwrap_or(true),
            }),
            _ => Err(AppError::Internal("validated payload is missing a field".to_string())),
        }
    }
}

// Response de vehículo
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleResponse {
    pub id: i64,
    pub model: String,
    pub owner: String,
    pub registration_number: String,
    pub is_active: bool,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            model: vehicle.model,
            owner: vehicle.owner,
            registration_number: vehicle.registration_number,
            is_active: vehicle.is_active,
        }
    }
}

// Response de POST
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

// Response de PUT y DELETE
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
