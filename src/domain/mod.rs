//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - フレームワークに依存しない
//! - ストレージについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Appointment）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（重なり判定）

pub mod entities;
pub mod repositories;
pub mod services;
