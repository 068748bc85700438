//! # Appointment Entity
//!
//! 予約のドメインエンティティ

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 予約のドメインエンティティ
///
/// 顧客と時間帯の組を表すビジネスエンティティ。
/// `id` と `created_at` は生成時に内部で割り当てられる。
///
/// `starts_at < ends_at` はこの型では検証しない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    id: Uuid,
    customer: String,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl Appointment {
    /// 新しい予約を作成
    ///
    /// # Arguments
    ///
    /// * `customer` - 顧客の識別子
    /// * `starts_at` - 開始時刻
    /// * `ends_at` - 終了時刻
    pub fn new(customer: String, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer,
            starts_at,
            ends_at,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 予約の長さを返す
    ///
    /// 時間帯が逆転している場合は負の値になる
    pub fn duration(&self) -> Duration {
        self.ends_at - self.starts_at
    }

    /// 指定された時間帯と重なるかどうかを返す
    ///
    /// 半開区間 `[starts_at, ends_at)` として比較するため、
    /// 終了時刻と開始時刻が一致するだけの隣接した予約は重ならない。
    ///
    /// # 例
    ///
    /// ```
    /// use appointly::domain::entities::appointment::Appointment;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let at = |h| Utc.with_ymd_and_hms(2024, 12, 25, h, 0, 0).unwrap();
    /// let alice = Appointment::new("alice".to_string(), at(10), at(11));
    ///
    /// assert!(alice.overlaps(at(10), at(12)));
    /// // 境界が接しているだけなら重ならない
    /// assert!(!alice.overlaps(at(11), at(12)));
    /// assert!(!alice.overlaps(at(9), at(10)));
    /// ```
    pub fn overlaps(&self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> bool {
        self.starts_at < ends_at && starts_at < self.ends_at
    }
}
