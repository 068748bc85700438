//! # Appointment Repository Trait
//!
//! 予約の検索と永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::appointment::Appointment;

/// 予約リポジトリ
///
/// 予約の検索と永続化を担当するリポジトリ。
/// 「重なり」の境界の扱いは実装側が定義する。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// 指定された時間帯と重なる予約を検索する
    ///
    /// # Arguments
    ///
    /// * `starts_at` - 開始時刻
    /// * `ends_at` - 終了時刻
    ///
    /// # Returns
    ///
    /// 重なる予約が存在すればそのうちの1件、なければ `None`
    ///
    /// # Errors
    ///
    /// ストレージの読み取りに失敗した場合にエラーを返す
    async fn find_overlapping_appointment(
        &self,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<Option<Appointment>>;

    /// 予約を永続化する
    ///
    /// # Errors
    ///
    /// ストレージへの書き込みに失敗した場合にエラーを返す
    async fn create(&self, appointment: &Appointment) -> Result<()>;

    /// 永続化されている全ての予約を返す
    async fn list(&self) -> Result<Vec<Appointment>>;
}
