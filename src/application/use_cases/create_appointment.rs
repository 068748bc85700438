//! # Create Appointment Use Case
//!
//! 予約作成ユースケース

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::application::dto::create_appointment_request::CreateAppointmentRequest;
use crate::domain::entities::appointment::Appointment;
use crate::domain::repositories::appointment_repository::AppointmentRepository;
use crate::domain::services::overlap::OverlapService;

/// 予約作成時のエラー
#[derive(Debug, Error)]
pub enum CreateAppointmentError {
    /// 既存の予約と時間帯が重なっている
    #[error("Another appointment overlaps this appointment date")]
    OverlapConflict {
        /// 重なっている既存の予約
        existing: Appointment,
    },

    /// 開始時刻が終了時刻以降になっている（検証が有効な場合のみ）
    #[error("Appointment must start before it ends (starts_at: {starts_at}, ends_at: {ends_at})")]
    InvalidTimeRange {
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    },

    /// リポジトリのエラー（そのまま伝播）
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

/// 予約作成ユースケース
///
/// 既存の予約と重ならないことを確認してから新しい予約を永続化する。
/// 確認と作成の間に排他制御はないため、同時に実行された重なる予約が
/// 両方とも作成されうる。
pub struct CreateAppointmentUseCase<R: AppointmentRepository> {
    appointment_repository: Arc<R>,
    validate_time_range: bool,
}

impl<R: AppointmentRepository> CreateAppointmentUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// 時間帯の順序検証は無効の状態で作成される
    ///
    /// # Arguments
    ///
    /// * `appointment_repository` - 予約リポジトリ
    pub fn new(appointment_repository: Arc<R>) -> Self {
        Self {
            appointment_repository,
            validate_time_range: false,
        }
    }

    /// `starts_at < ends_at` の検証を有効／無効にする
    pub fn with_time_range_validation(mut self, enabled: bool) -> Self {
        self.validate_time_range = enabled;
        self
    }

    /// 予約を作成する
    ///
    /// # Arguments
    ///
    /// * `request` - 予約作成リクエスト
    ///
    /// # Returns
    ///
    /// 作成された予約（リポジトリに渡したものと同一）
    ///
    /// # Errors
    ///
    /// - 重なる予約が存在する場合に `OverlapConflict` を返す
    /// - 検証が有効で時間帯が逆転している場合に `InvalidTimeRange` を返す
    /// - リポジトリの検索または作成に失敗した場合に `Repository` を返す
    pub async fn execute(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, CreateAppointmentError> {
        let CreateAppointmentRequest {
            customer,
            starts_at,
            ends_at,
        } = request;

        if self.validate_time_range && !OverlapService::is_valid_range(starts_at, ends_at) {
            return Err(CreateAppointmentError::InvalidTimeRange { starts_at, ends_at });
        }

        if let Some(existing) = self
            .appointment_repository
            .find_overlapping_appointment(starts_at, ends_at)
            .await?
        {
            return Err(CreateAppointmentError::OverlapConflict { existing });
        }

        let appointment = Appointment::new(customer, starts_at, ends_at);

        self.appointment_repository.create(&appointment).await?;

        Ok(appointment)
    }
}
