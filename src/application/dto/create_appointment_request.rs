//! # Create Appointment Request DTO
//!
//! 予約作成リクエストのData Transfer Object

use chrono::{DateTime, Utc};

/// 予約作成リクエスト
///
/// 永続化されない一時的な入力値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAppointmentRequest {
    /// 顧客の識別子
    pub customer: String,
    /// 開始時刻
    pub starts_at: DateTime<Utc>,
    /// 終了時刻
    pub ends_at: DateTime<Utc>,
}

impl CreateAppointmentRequest {
    /// 新しいリクエストを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use appointly::application::dto::create_appointment_request::CreateAppointmentRequest;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let request = CreateAppointmentRequest::new(
    ///     "alice".to_string(),
    ///     Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 12, 25, 11, 0, 0).unwrap(),
    /// );
    ///
    /// assert_eq!(request.customer, "alice");
    /// ```
    pub fn new(customer: String, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self {
            customer,
            starts_at,
            ends_at,
        }
    }
}
