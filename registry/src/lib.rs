use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    mail::{GmailMailer, LogMailer},
    repository::{
        booking::BookingRepositoryImpl, health::HealthCheckRepositoryImpl,
        hostel::HostelRepositoryImpl, payment::PaymentRepositoryImpl,
        request::RequestRepositoryImpl, room::RoomRepositoryImpl,
        service_log::ServiceLogRepositoryImpl,
    },
};
use kernel::{
    clock::{Clock, SystemClock},
    mail::Mailer,
    repository::{
        booking::BookingRepository, health::HealthCheckRepository, request::RequestRepository,
    },
    scheduler::{InvoiceScheduler, ServiceCycleScheduler},
};
use shared::{
    config::{AppConfig, CronConfig},
    error::AppResult,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    request_repository: Arc<dyn RequestRepository>,
    service_cycle_scheduler: Arc<ServiceCycleScheduler>,
    invoice_scheduler: Arc<InvoiceScheduler>,
    clock: Arc<dyn Clock>,
    cron_config: CronConfig,
}

impl AppRegistry {
    pub async fn new(pool: ConnectionPool, app_config: AppConfig) -> AppResult<Self> {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let hostel_repository = Arc::new(HostelRepositoryImpl::new(pool.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let payment_repository = Arc::new(PaymentRepositoryImpl::new(pool.clone()));
        let service_log_repository = Arc::new(ServiceLogRepositoryImpl::new(pool.clone()));
        let request_repository = Arc::new(RequestRepositoryImpl::new(pool.clone()));

        let mailer: Arc<dyn Mailer> = match app_config.mail {
            Some(mail) => Arc::new(GmailMailer::connect(mail).await?),
            None => Arc::new(LogMailer),
        };

        let service_cycle_scheduler = Arc::new(ServiceCycleScheduler::new(
            hostel_repository,
            room_repository,
            booking_repository.clone(),
            service_log_repository,
        ));
        let invoice_scheduler = Arc::new(InvoiceScheduler::new(
            booking_repository.clone(),
            payment_repository,
            mailer,
        ));

        Ok(Self {
            health_check_repository,
            booking_repository,
            request_repository,
            service_cycle_scheduler,
            invoice_scheduler,
            clock: Arc::new(SystemClock),
            cron_config: app_config.cron,
        })
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn request_repository(&self) -> Arc<dyn RequestRepository> {
        self.request_repository.clone()
    }

    pub fn service_cycle_scheduler(&self) -> Arc<ServiceCycleScheduler> {
        self.service_cycle_scheduler.clone()
    }

    pub fn invoice_scheduler(&self) -> Arc<InvoiceScheduler> {
        self.invoice_scheduler.clone()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    pub fn cron_config(&self) -> &CronConfig {
        &self.cron_config
    }
}
