//! Objetos de transferencia de la API

pub mod vehicle_dto;
