//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_appointment_repository::JsonAppointmentRepository;
use crate::application::dto::create_appointment_request::CreateAppointmentRequest;
use crate::application::use_cases::create_appointment::{
    CreateAppointmentError, CreateAppointmentUseCase,
};
use crate::application::use_cases::list_appointments::ListAppointmentsUseCase;
use crate::domain::entities::appointment::Appointment;

use super::cli::Command;

/// Format an appointment as a single status line
pub fn format_appointment(appointment: &Appointment) -> String {
    format!(
        "{} | {} | {} - {} ({} min)",
        appointment.id(),
        appointment.customer(),
        appointment.starts_at().to_rfc3339(),
        appointment.ends_at().to_rfc3339(),
        appointment.duration().num_minutes()
    )
}

/// Appointment Workflow
pub struct AppointmentWorkflow {
    config: Config,
    create_use_case: CreateAppointmentUseCase<JsonAppointmentRepository>,
    list_use_case: ListAppointmentsUseCase<JsonAppointmentRepository>,
}

impl AppointmentWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let appointment_repo = Arc::new(JsonAppointmentRepository::new(
            config.expanded_store_path(),
        ));

        let create_use_case = CreateAppointmentUseCase::new(appointment_repo.clone())
            .with_time_range_validation(config.validate_time_range);
        let list_use_case = ListAppointmentsUseCase::new(appointment_repo);

        Self {
            config,
            create_use_case,
            list_use_case,
        }
    }

    /// Store file path actually used by the repository (`~` expanded)
    pub fn store_path(&self) -> String {
        self.config.expanded_store_path()
    }

    /// Create a single appointment
    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, CreateAppointmentError> {
        self.create_use_case.execute(request).await
    }

    /// List stored appointments ordered by start time
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        self.list_use_case.execute().await
    }

    /// Execute a CLI command
    pub async fn execute(&self, command: Command) -> Result<()> {
        info!("Using appointment store: {}", self.store_path());

        match command {
            Command::Create {
                customer,
                starts_at,
                ends_at,
            } => {
                let request = CreateAppointmentRequest::new(customer, starts_at, ends_at);

                match self.create_appointment(request).await {
                    Ok(appointment) => {
                        println!("✓ Created appointment:");
                        println!("  {}", format_appointment(&appointment));
                        Ok(())
                    }
                    Err(CreateAppointmentError::OverlapConflict { existing }) => {
                        println!("✗ Time slot is not available, conflicts with:");
                        println!("  {}", format_appointment(&existing));
                        Err(CreateAppointmentError::OverlapConflict { existing }.into())
                    }
                    Err(e) => Err(e.into()),
                }
            }
            Command::List => {
                let appointments = self.list_appointments().await?;
                println!("✓ Found {} appointments", appointments.len());
                for appointment in &appointments {
                    println!("  - {}", format_appointment(appointment));
                }
                Ok(())
            }
        }
    }
}
