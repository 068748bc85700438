//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **CreateAppointmentUseCase**: 重なりを確認して予約を作成
//! - **ListAppointmentsUseCase**: 予約の一覧

pub mod create_appointment;
pub mod list_appointments;
