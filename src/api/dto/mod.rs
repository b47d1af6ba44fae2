//! Data Transfer Objects for REST request/response serialization.

pub mod content_dto;
pub mod directory_dto;

pub use content_dto::*;
pub use directory_dto::*;
