//! JSON Appointment Repository Implementation
//!
//! AppointmentRepositoryのJSON実装（予約をJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use crate::domain::entities::appointment::Appointment;
use crate::domain::repositories::appointment_repository::AppointmentRepository;
use crate::domain::services::overlap::OverlapService;

/// JSONファイルベースの予約リポジトリ
///
/// ファイル全体を読み込み、追記して書き戻す。
/// 書き戻しは同じディレクトリの一時ファイルを経由したrenameで行うため、
/// 読み取り側が書きかけのファイルを見ることはない。
/// 同一インスタンス内の書き込みは直列化されるが、
/// 重なり確認と作成の間の排他は行わない。
pub struct JsonAppointmentRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonAppointmentRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `path` - 予約を保存するJSONファイルのパス
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// ファイルから予約を読み込む（同期処理）
    fn load_sync(path: &Path) -> Result<Vec<Appointment>> {
        if !path.exists() {
            debug!("No appointment store at {}, starting empty", path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).context("Failed to read appointment store")?;

        let appointments: Vec<Appointment> =
            serde_json::from_str(&content).context("Failed to parse appointment store JSON")?;

        debug!(
            "Loaded {} appointments from {}",
            appointments.len(),
            path.display()
        );

        Ok(appointments)
    }

    /// ファイルに予約を保存する（同期処理）
    fn save_sync(path: &Path, appointments: &[Appointment]) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).context("Failed to create store directory")?;

        let json = serde_json::to_string_pretty(appointments)
            .context("Failed to serialize appointments")?;

        let mut temp_file =
            NamedTempFile::new_in(parent).context("Failed to create temporary store file")?;
        temp_file
            .write_all(json.as_bytes())
            .context("Failed to write appointment store")?;
        temp_file
            .as_file()
            .sync_all()
            .context("Failed to flush appointment store")?;
        temp_file
            .persist(path)
            .context("Failed to replace appointment store")?;

        info!(
            "Saved appointment store: {} appointments in {}",
            appointments.len(),
            path.display()
        );

        Ok(())
    }

    async fn load(&self) -> Result<Vec<Appointment>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn save(&self, appointments: Vec<Appointment>) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &appointments))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

#[async_trait]
impl AppointmentRepository for JsonAppointmentRepository {
    async fn find_overlapping_appointment(
        &self,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<Option<Appointment>> {
        let appointments = self.load().await?;
        Ok(OverlapService::find_overlapping(&appointments, starts_at, ends_at).cloned())
    }

    async fn create(&self, appointment: &Appointment) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut appointments = self.load().await?;
        appointments.push(appointment.clone());
        self.save(appointments).await
    }

    async fn list(&self) -> Result<Vec<Appointment>> {
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 25, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result =
            JsonAppointmentRepository::load_sync(Path::new("/nonexistent/path/appointments.json"));

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_load_valid_store() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"[
            {
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "customer": "alice",
                "starts_at": "2024-12-25T10:00:00Z",
                "ends_at": "2024-12-25T11:00:00Z",
                "created_at": "2024-12-24T09:00:00Z"
            }
        ]"#;
        file.write_all(json.as_bytes()).unwrap();

        let appointments = JsonAppointmentRepository::load_sync(file.path()).unwrap();

        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].customer(), "alice");
        assert_eq!(appointments[0].starts_at(), at(10));
        assert_eq!(appointments[0].ends_at(), at(11));
        assert_eq!(
            appointments[0].id().to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_load_corrupt_store() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not an array").unwrap();

        assert!(JsonAppointmentRepository::load_sync(file.path()).is_err());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("nested/dir/appointments.json");
        let appointments = vec![Appointment::new("alice".to_string(), at(10), at(11))];

        JsonAppointmentRepository::save_sync(&store_path, &appointments).unwrap();

        let loaded = JsonAppointmentRepository::load_sync(&store_path).unwrap();
        assert_eq!(loaded, appointments);
    }

    #[tokio::test]
    async fn test_create_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("appointments.json");

        let alice = Appointment::new("alice".to_string(), at(10), at(11));
        JsonAppointmentRepository::new(&store_path)
            .create(&alice)
            .await
            .unwrap();

        let reopened = JsonAppointmentRepository::new(&store_path);
        assert_eq!(reopened.list().await.unwrap(), vec![alice.clone()]);

        let conflict = reopened
            .find_overlapping_appointment(at(10), at(12))
            .await
            .unwrap();
        assert_eq!(conflict, Some(alice));
    }

    #[tokio::test]
    async fn test_find_overlapping_boundary_is_clear() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonAppointmentRepository::new(temp_dir.path().join("appointments.json"));

        repo.create(&Appointment::new("alice".to_string(), at(10), at(11)))
            .await
            .unwrap();

        let found = repo.find_overlapping_appointment(at(11), at(12)).await.unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_save_replaces_existing_store() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("appointments.json");

        let first = vec![Appointment::new("alice".to_string(), at(10), at(11))];
        JsonAppointmentRepository::save_sync(&store_path, &first).unwrap();

        let second = vec![
            first[0].clone(),
            Appointment::new("carol".to_string(), at(11), at(12)),
        ];
        JsonAppointmentRepository::save_sync(&store_path, &second).unwrap();

        assert_eq!(
            JsonAppointmentRepository::load_sync(&store_path).unwrap(),
            second
        );

        // 一時ファイルが残っていないこと
        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reads_during_concurrent_creates_never_fail() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Arc::new(JsonAppointmentRepository::new(
            temp_dir.path().join("appointments.json"),
        ));
        let done = Arc::new(AtomicBool::new(false));

        let writer = {
            let repo = repo.clone();
            let done = done.clone();
            tokio::spawn(async move {
                for i in 0..100 {
                    let starts_at = at(0) + Duration::minutes(i);
                    let appointment = Appointment::new(
                        format!("customer-{}", i),
                        starts_at,
                        starts_at + Duration::minutes(1),
                    );
                    repo.create(&appointment).await.unwrap();
                }
                done.store(true, Ordering::SeqCst);
            })
        };

        // 作成中の予約とは重ならない時間帯を繰り返し検索する
        let far_future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let mut errors = 0;
        let mut reads = 0;
        while !done.load(Ordering::SeqCst) {
            match repo
                .find_overlapping_appointment(far_future, far_future + Duration::hours(1))
                .await
            {
                Ok(found) => assert!(found.is_none()),
                Err(_) => errors += 1,
            }
            reads += 1;
        }

        writer.await.unwrap();

        assert_eq!(errors, 0, "{} of {} reads failed", errors, reads);
        assert_eq!(repo.list().await.unwrap().len(), 100);
    }
}
