//! # Overlap Service
//!
//! 予約の重なり判定サービス

use chrono::{DateTime, Utc};

use crate::domain::entities::appointment::Appointment;

/// 重なり判定サービス
///
/// 半開区間 `[starts_at, ends_at)` で予約の重なりを判定するビジネスロジック
pub struct OverlapService;

impl OverlapService {
    /// 指定された時間帯と重なる最初の予約を返す
    ///
    /// # Arguments
    ///
    /// * `appointments` - 検索対象の予約
    /// * `starts_at` - 開始時刻
    /// * `ends_at` - 終了時刻
    ///
    /// # Returns
    ///
    /// 重なる予約があればその参照、なければ `None`
    pub fn find_overlapping(
        appointments: &[Appointment],
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Option<&Appointment> {
        appointments
            .iter()
            .find(|appointment| appointment.overlaps(starts_at, ends_at))
    }

    /// 時間帯が正しい順序（開始 < 終了）かどうかを返す
    pub fn is_valid_range(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> bool {
        starts_at < ends_at
    }

    /// 開始時刻順に並べ替える（同時刻の場合は作成順）
    pub fn sort_by_start(appointments: &mut [Appointment]) {
        appointments.sort_by(|a, b| {
            a.starts_at()
                .cmp(&b.starts_at())
                .then_with(|| a.created_at().cmp(&b.created_at()))
        });
    }
}
