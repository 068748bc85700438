//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod in_memory_appointment_repository;
pub mod json_appointment_repository;
