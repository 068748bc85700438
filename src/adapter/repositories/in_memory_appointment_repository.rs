//! In-Memory Appointment Repository Implementation
//!
//! AppointmentRepositoryのメモリ内実装

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use std::sync::Mutex;

use crate::domain::entities::appointment::Appointment;
use crate::domain::repositories::appointment_repository::AppointmentRepository;
use crate::domain::services::overlap::OverlapService;

/// メモリ内の予約リポジトリ
///
/// 重なりは半開区間で判定する
pub struct InMemoryAppointmentRepository {
    appointments: Mutex<Vec<Appointment>>,
}

impl InMemoryAppointmentRepository {
    /// 空のリポジトリを作成
    pub fn new() -> Self {
        Self::with_appointments(Vec::new())
    }

    /// 既存の予約を持つリポジトリを作成
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: Mutex::new(appointments),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Appointment>>> {
        self.appointments
            .lock()
            .map_err(|e| anyhow::anyhow!("Appointment store lock poisoned: {}", e))
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn find_overlapping_appointment(
        &self,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<Option<Appointment>> {
        let appointments = self.lock()?;
        Ok(OverlapService::find_overlapping(&appointments, starts_at, ends_at).cloned())
    }

    async fn create(&self, appointment: &Appointment) -> Result<()> {
        let mut appointments = self.lock()?;
        appointments.push(appointment.clone());
        debug!(
            "Stored appointment {} ({} total)",
            appointment.id(),
            appointments.len()
        );
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Appointment>> {
        Ok(self.lock()?.clone())
    }
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self::new()
    }
}
