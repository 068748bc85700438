//! # List Appointments Use Case
//!
//! 予約一覧ユースケース

use std::sync::Arc;
use anyhow::Result;

use crate::domain::entities::appointment::Appointment;
use crate::domain::repositories::appointment_repository::AppointmentRepository;
use crate::domain::services::overlap::OverlapService;

/// 予約一覧ユースケース
///
/// 永続化されている予約を開始時刻順に返す
pub struct ListAppointmentsUseCase<R: AppointmentRepository> {
    appointment_repository: Arc<R>,
}

impl<R: AppointmentRepository> ListAppointmentsUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(appointment_repository: Arc<R>) -> Self {
        Self {
            appointment_repository,
        }
    }

    /// 予約の一覧を取得する
    ///
    /// # Errors
    ///
    /// リポジトリの読み取りに失敗した場合にエラーを返す
    pub async fn execute(&self) -> Result<Vec<Appointment>> {
        let mut appointments = self.appointment_repository.list().await?;
        OverlapService::sort_by_start(&mut appointments);
        Ok(appointments)
    }
}
