use crate::{
    model::{
        hostel::Hostel,
        room::Room,
        schedule::{check_due, IntervalPolicy, ServiceDue},
        service_log::{RecordService, ServiceKind},
    },
    repository::{
        booking::BookingRepository, hostel::HostelRepository, room::RoomRepository,
        service_log::ServiceLogRepository,
    },
    scheduler::SweepError,
};
use chrono::{DateTime, Utc};
use derive_new::new;
use shared::error::AppResult;
use std::sync::Arc;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceCycleReport {
    pub cleaning_logs_created: usize,
    pub laundry_logs_created: usize,
    pub rooms_processed: usize,
    pub hostels_processed: usize,
    pub errors: Vec<SweepError>,
}

impl ServiceCycleReport {
    fn count(&mut self, kind: ServiceKind) {
        match kind {
            ServiceKind::Cleaning => self.cleaning_logs_created += 1,
            ServiceKind::Laundry => self.laundry_logs_created += 1,
        }
    }
}

#[derive(new)]
pub struct ServiceCycleScheduler {
    hostel_repository: Arc<dyn HostelRepository>,
    room_repository: Arc<dyn RoomRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    service_log_repository: Arc<dyn ServiceLogRepository>,
}

impl ServiceCycleScheduler {
    /// すべての寮のすべての部屋について清掃・ランドリーの要否を判定し、
    /// 必要なものはログを作成する。
    pub async fn run(&self, now: DateTime<Utc>) -> AppResult<ServiceCycleReport> {
        let hostels = self.hostel_repository.find_all().await?;
        let mut report = ServiceCycleReport::default();

        for hostel in &hostels {
            let rooms = match self.room_repository.find_by_hostel_id(hostel.hostel_id).await {
                Ok(rooms) => rooms,
                Err(e) => {
                    tracing::warn!(hostel_id = %hostel.hostel_id, error = %e, "failed to load rooms");
                    report
                        .errors
                        .push(SweepError::new(hostel.hostel_id.to_string(), e.to_string()));
                    continue;
                }
            };

            for mut room in rooms {
                if let Err(e) = self.service_room(hostel, &mut room, now, &mut report).await {
                    tracing::warn!(room_id = %room.room_id, error = %e, "service cycle failed for room");
                    report
                        .errors
                        .push(SweepError::new(room.room_id.to_string(), e.to_string()));
                }
                report.rooms_processed += 1;
            }
            report.hostels_processed += 1;
        }

        tracing::info!(
            cleaning = report.cleaning_logs_created,
            laundry = report.laundry_logs_created,
            rooms = report.rooms_processed,
            hostels = report.hostels_processed,
            errors = report.errors.len(),
            "service cycle finished"
        );
        Ok(report)
    }

    async fn service_room(
        &self,
        hostel: &Hostel,
        room: &mut Room,
        now: DateTime<Utc>,
        report: &mut ServiceCycleReport,
    ) -> AppResult<()> {
        let policy = IntervalPolicy::resolve(room, hostel);

        // 清掃は空室でも対象
        let cleaning = check_due(room, ServiceKind::Cleaning, policy.cleaning_hours, now, false);
        self.record_if_due(hostel, room, ServiceKind::Cleaning, policy, cleaning, now, report)
            .await?;

        let occupied = self.booking_repository.has_active_in_room(room.room_id).await?;
        let laundry = check_due(room, ServiceKind::Laundry, policy.laundry_hours, now, occupied);
        self.record_if_due(hostel, room, ServiceKind::Laundry, policy, laundry, now, report)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn record_if_due(
        &self,
        hostel: &Hostel,
        room: &mut Room,
        kind: ServiceKind,
        policy: IntervalPolicy,
        due: ServiceDue,
        now: DateTime<Utc>,
        report: &mut ServiceCycleReport,
    ) -> AppResult<()> {
        let ServiceDue::Due {
            elapsed_hours,
            overdue_hours,
        } = due
        else {
            return Ok(());
        };

        let notes = format!(
            "Auto-generated by service cycle: {} every {}h, {}h since last {}",
            kind.label(),
            policy.hours(kind),
            elapsed_hours,
            kind.label(),
        );
        let log = self
            .service_log_repository
            .record(RecordService::new(
                kind,
                room.room_id,
                hostel.hostel_id,
                now,
                notes,
            ))
            .await?;
        room.mark_serviced(kind, now);
        report.count(kind);

        tracing::debug!(
            service_log_id = %log.service_log_id,
            room_id = %room.room_id,
            room_number = %room.room_number,
            kind = %kind,
            overdue_hours,
            "service log created"
        );
        Ok(())
    }
}
