//! # Appointly
//!
//! 時間帯が重ならないように予約を作成するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 予約エンティティ、リポジトリtrait、重なり判定
//! - **Application層**: 予約作成・一覧のユースケース
//! - **Adapter層**: メモリ内およびJSONファイルのリポジトリ実装、設定
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
