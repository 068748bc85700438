//! # Data Transfer Objects
//!
//! ユースケースの入力値

pub mod create_appointment_request;
