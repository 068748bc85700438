//! # Domain Entities
//!
//! ビジネスエンティティを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Appointment**: 顧客の予約（時間帯）

pub mod appointment;
