use super::*;
use crate::{
    mail::{Email, Mailer},
    model::{
        booking::{BillableBooking, BillingRoom, Booking, BookingStatus},
        hostel::Hostel,
        id::{BookingId, HostelId, PaymentId, RoomId, ServiceLogId, UserId},
        payment::{event::CreatePayment, Payment, PaymentStatus, PaymentType},
        room::{event::TransferRoom, Room, RoomStatus},
        schedule::BillingPeriod,
        service_log::{RecordService, ServiceKind, ServiceLog, ServiceLogStatus},
        user::Resident,
    },
    repository::{
        booking::BookingRepository, hostel::HostelRepository, payment::PaymentRepository,
        room::RoomRepository, service_log::ServiceLogRepository,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

#[derive(Default)]
struct State {
    hostels: Vec<Hostel>,
    rooms: Vec<Room>,
    bookings: Vec<BillableBooking>,
    logs: Vec<(ServiceKind, RoomId, DateTime<Utc>)>,
    payments: Vec<Payment>,
    failing_rooms: HashSet<RoomId>,
}

#[derive(Default, Clone)]
struct InMemoryStore(Arc<Mutex<State>>);

impl InMemoryStore {
    fn with<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        f(&mut self.0.lock().unwrap())
    }

    fn add_hostel(&self, cleaning: Option<i32>, laundry: Option<i32>) -> Hostel {
        let hostel = Hostel {
            hostel_id: HostelId::new(),
            name: "Riverside".into(),
            cleaning_interval_hours: cleaning,
            laundry_interval_hours: laundry,
        };
        self.with(|s| s.hostels.push(hostel.clone()));
        hostel
    }

    fn add_room(&self, hostel: &Hostel, number: &str, created_at: DateTime<Utc>) -> Room {
        let room = Room {
            room_id: RoomId::new(),
            hostel_id: hostel.hostel_id,
            room_number: number.into(),
            monthly_rent: Decimal::new(45000, 2),
            status: RoomStatus::Available,
            cleaning_interval_hours: None,
            laundry_interval_hours: None,
            last_cleaning_at: None,
            last_laundry_at: None,
            created_at,
        };
        self.with(|s| s.rooms.push(room.clone()));
        room
    }

    fn add_booking(&self, room: Option<&Room>, status: BookingStatus) -> BillableBooking {
        let user_id = UserId::new();
        let booking = BillableBooking {
            booking_id: BookingId::new(),
            status,
            resident: Resident {
                user_id,
                user_name: "Aiko".into(),
                email: format!("{user_id}@example.com"),
            },
            room: room.map(|r| BillingRoom {
                room_id: r.room_id,
                room_number: r.room_number.clone(),
                hostel_name: "Riverside".into(),
                monthly_rent: r.monthly_rent,
            }),
        };
        self.with(|s| s.bookings.push(booking.clone()));
        booking
    }

    fn add_payment(
        &self,
        booking: &BillableBooking,
        payment_type: PaymentType,
        status: PaymentStatus,
        amount: Decimal,
        created_at: DateTime<Utc>,
    ) {
        self.with(|s| {
            s.payments.push(Payment {
                payment_id: PaymentId::new(),
                user_id: booking.resident.user_id,
                booking_id: Some(booking.booking_id),
                amount,
                payment_type,
                status,
                due_date: None,
                notes: None,
                created_at,
            })
        });
    }

    fn rent_count(&self, booking_id: BookingId) -> usize {
        self.with(|s| {
            s.payments
                .iter()
                .filter(|p| p.booking_id == Some(booking_id) && p.payment_type == PaymentType::Rent)
                .count()
        })
    }
}

#[async_trait]
impl HostelRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Hostel>> {
        Ok(self.with(|s| s.hostels.clone()))
    }
}

#[async_trait]
impl RoomRepository for InMemoryStore {
    async fn find_by_hostel_id(&self, hostel_id: HostelId) -> AppResult<Vec<Room>> {
        Ok(self.with(|s| {
            s.rooms
                .iter()
                .filter(|r| r.hostel_id == hostel_id)
                .cloned()
                .collect()
        }))
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        Ok(self.with(|s| s.rooms.iter().find(|r| r.room_id == room_id).cloned()))
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self.with(|s| {
            s.bookings
                .iter()
                .find(|b| b.booking_id == booking_id)
                .map(|b| Booking {
                    booking_id: b.booking_id,
                    room_id: b.room.as_ref().map(|r| r.room_id),
                    user_id: b.resident.user_id,
                    status: b.status,
                })
        }))
    }

    async fn find_active_billable(&self) -> AppResult<Vec<BillableBooking>> {
        Ok(self.with(|s| {
            s.bookings
                .iter()
                .filter(|b| b.status.is_active())
                .cloned()
                .collect()
        }))
    }

    async fn has_active_in_room(&self, room_id: RoomId) -> AppResult<bool> {
        Ok(self.with(|s| {
            s.bookings.iter().any(|b| {
                b.status.is_active() && b.room.as_ref().is_some_and(|r| r.room_id == room_id)
            })
        }))
    }

    async fn transfer_room(&self, _event: TransferRoom) -> AppResult<()> {
        Err(AppError::UnprocessableEntity("not supported in memory".into()))
    }
}

#[async_trait]
impl ServiceLogRepository for InMemoryStore {
    async fn record(&self, event: RecordService) -> AppResult<ServiceLog> {
        self.with(|s| {
            if s.failing_rooms.contains(&event.room_id) {
                return Err(AppError::NoRowsAffectedError("room is locked".into()));
            }
            s.logs.push((event.kind, event.room_id, event.performed_at));
            if let Some(room) = s.rooms.iter_mut().find(|r| r.room_id == event.room_id) {
                room.mark_serviced(event.kind, event.performed_at);
            }
            Ok(ServiceLog {
                service_log_id: ServiceLogId::new(),
                kind: event.kind,
                room_id: event.room_id,
                hostel_id: event.hostel_id,
                status: ServiceLogStatus::Pending,
                performed_at: event.performed_at,
                notes: event.notes,
            })
        })
    }
}

#[async_trait]
impl PaymentRepository for InMemoryStore {
    async fn create(&self, event: CreatePayment) -> AppResult<Payment> {
        let payment = Payment {
            payment_id: PaymentId::new(),
            user_id: event.user_id,
            booking_id: event.booking_id,
            amount: event.amount,
            payment_type: event.payment_type,
            status: event.status,
            due_date: event.due_date,
            notes: event.notes,
            created_at: event.created_at,
        };
        self.with(|s| s.payments.push(payment.clone()));
        Ok(payment)
    }

    async fn rent_exists_in_period(
        &self,
        booking_id: BookingId,
        period: &BillingPeriod,
    ) -> AppResult<bool> {
        Ok(self.with(|s| {
            s.payments.iter().any(|p| {
                p.booking_id == Some(booking_id)
                    && p.payment_type == PaymentType::Rent
                    && period.contains(p.created_at)
            })
        }))
    }

    async fn outstanding_total(&self, user_id: UserId) -> AppResult<Decimal> {
        Ok(self.with(|s| {
            s.payments
                .iter()
                .filter(|p| p.user_id == user_id && p.status.is_outstanding())
                .map(|p| p.amount)
                .sum()
        }))
    }
}

#[derive(Default)]
struct RecordingMailer {
    fail: bool,
    // 送信手段が未設定のトランスポートと同様に Ok(None) を返す
    unconfigured: bool,
    sent: Mutex<Vec<Email>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: Email) -> AppResult<Option<String>> {
        if self.fail {
            return Err(AppError::ExternalServiceError("smtp down".into()));
        }
        if self.unconfigured {
            return Ok(None);
        }
        self.sent.lock().unwrap().push(email);
        Ok(Some("msg-1".into()))
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
}

fn service_cycle(store: &InMemoryStore) -> ServiceCycleScheduler {
    let store = Arc::new(store.clone());
    ServiceCycleScheduler::new(store.clone(), store.clone(), store.clone(), store)
}

fn invoices(store: &InMemoryStore, mailer: Arc<RecordingMailer>) -> InvoiceScheduler {
    let store = Arc::new(store.clone());
    InvoiceScheduler::new(store.clone(), store, mailer)
}

#[tokio::test]
async fn service_cycle_logs_due_rooms() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(Some(24), Some(48));
    let occupied = store.add_room(&hostel, "101", t0());
    let vacant = store.add_room(&hostel, "102", t0());
    store.add_booking(Some(&occupied), BookingStatus::CheckedIn);

    let report = service_cycle(&store).run(t0() + Duration::hours(49)).await?;

    assert_eq!(report.cleaning_logs_created, 2);
    assert_eq!(report.laundry_logs_created, 1);
    assert_eq!(report.rooms_processed, 2);
    assert_eq!(report.hostels_processed, 1);
    assert!(report.errors.is_empty());

    let laundry_rooms: Vec<RoomId> = store.with(|s| {
        s.logs
            .iter()
            .filter(|(kind, _, _)| *kind == ServiceKind::Laundry)
            .map(|(_, room_id, _)| *room_id)
            .collect()
    });
    assert_eq!(laundry_rooms, vec![occupied.room_id]);
    assert_ne!(laundry_rooms[0], vacant.room_id);
    Ok(())
}

#[tokio::test]
async fn service_cycle_is_idempotent_for_the_same_instant() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let room = store.add_room(&hostel, "201", t0());
    store.add_booking(Some(&room), BookingStatus::Confirmed);
    let scheduler = service_cycle(&store);
    let now = t0() + Duration::hours(72);

    let first = scheduler.run(now).await?;
    assert_eq!(first.cleaning_logs_created, 1);
    assert_eq!(first.laundry_logs_created, 1);

    let second = scheduler.run(now).await?;
    assert_eq!(second.cleaning_logs_created, 0);
    assert_eq!(second.laundry_logs_created, 0);
    assert_eq!(second.rooms_processed, 1);

    let stored = store.with(|s| s.rooms[0].clone());
    assert_eq!(stored.last_cleaning_at, Some(now));
    assert_eq!(stored.last_laundry_at, Some(now));
    Ok(())
}

#[tokio::test]
async fn service_cycle_respects_room_override() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, Some(48));
    let room = store.add_room(&hostel, "301", t0() - Duration::days(10));
    store.with(|s| {
        s.rooms[0].laundry_interval_hours = Some(12);
        s.rooms[0].last_laundry_at = Some(t0());
        s.rooms[0].last_cleaning_at = Some(t0());
    });
    store.add_booking(Some(&room), BookingStatus::CheckedIn);

    let report = service_cycle(&store).run(t0() + Duration::hours(11)).await?;
    assert_eq!(report.laundry_logs_created, 0);
    assert_eq!(report.cleaning_logs_created, 0);

    let report = service_cycle(&store).run(t0() + Duration::hours(12)).await?;
    assert_eq!(report.laundry_logs_created, 1);
    Ok(())
}

#[tokio::test]
async fn service_cycle_isolates_failing_rooms() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let broken = store.add_room(&hostel, "401", t0());
    store.add_room(&hostel, "402", t0());
    store.with(|s| s.failing_rooms.insert(broken.room_id));

    let report = service_cycle(&store).run(t0() + Duration::hours(30)).await?;

    assert_eq!(report.rooms_processed, 2);
    assert_eq!(report.cleaning_logs_created, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].id, broken.room_id.to_string());
    Ok(())
}

#[tokio::test]
async fn invoices_are_created_once_per_month() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let room_a = store.add_room(&hostel, "101", t0());
    let room_b = store.add_room(&hostel, "102", t0());
    let a = store.add_booking(Some(&room_a), BookingStatus::CheckedIn);
    let b = store.add_booking(Some(&room_b), BookingStatus::Confirmed);
    store.add_booking(Some(&room_b), BookingStatus::CheckedOut);
    let mailer = Arc::new(RecordingMailer::default());
    let scheduler = invoices(&store, mailer.clone());

    let first = scheduler.run(t0()).await?;
    assert_eq!(first.processed, 2);
    assert_eq!(first.created, 2);
    assert_eq!(first.emails_sent, 2);
    assert!(first.errors.is_empty());

    let later = scheduler.run(t0() + Duration::days(27)).await?;
    assert_eq!(later.processed, 2);
    assert_eq!(later.created, 0);
    assert_eq!(later.emails_sent, 0);

    assert_eq!(store.rent_count(a.booking_id), 1);
    assert_eq!(store.rent_count(b.booking_id), 1);
    assert_eq!(mailer.sent.lock().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn existing_rent_earlier_in_month_is_not_duplicated() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let room = store.add_room(&hostel, "101", t0());
    let booking = store.add_booking(Some(&room), BookingStatus::CheckedIn);
    let third = Utc.with_ymd_and_hms(2024, 3, 3, 10, 0, 0).unwrap();
    store.add_payment(
        &booking,
        PaymentType::Rent,
        PaymentStatus::Pending,
        room.monthly_rent,
        third,
    );

    let twentieth = Utc.with_ymd_and_hms(2024, 3, 20, 10, 0, 0).unwrap();
    let report = invoices(&store, Arc::default()).run(twentieth).await?;

    assert_eq!(report.processed, 1);
    assert_eq!(report.created, 0);
    assert_eq!(store.rent_count(booking.booking_id), 1);
    Ok(())
}

#[tokio::test]
async fn previous_month_rent_does_not_block_new_invoice() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let room = store.add_room(&hostel, "101", t0());
    let booking = store.add_booking(Some(&room), BookingStatus::CheckedIn);
    let end_of_feb = Utc.with_ymd_and_hms(2024, 2, 29, 23, 0, 0).unwrap();
    store.add_payment(
        &booking,
        PaymentType::Rent,
        PaymentStatus::Completed,
        room.monthly_rent,
        end_of_feb,
    );
    // 家賃以外の請求は重複判定に影響しない
    store.add_payment(
        &booking,
        PaymentType::Fee,
        PaymentStatus::Pending,
        Decimal::new(20, 0),
        t0(),
    );

    let report = invoices(&store, Arc::default()).run(t0()).await?;

    assert_eq!(report.created, 1);
    assert_eq!(store.rent_count(booking.booking_id), 2);
    Ok(())
}

#[tokio::test]
async fn dangling_room_is_reported_and_sweep_continues() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let room = store.add_room(&hostel, "101", t0());
    let orphan = store.add_booking(None, BookingStatus::Confirmed);
    let healthy = store.add_booking(Some(&room), BookingStatus::CheckedIn);

    let report = invoices(&store, Arc::default()).run(t0()).await?;

    assert_eq!(report.processed, 2);
    assert_eq!(report.created, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].id, orphan.booking_id.to_string());
    assert_eq!(store.rent_count(healthy.booking_id), 1);
    assert_eq!(store.rent_count(orphan.booking_id), 0);
    Ok(())
}

#[tokio::test]
async fn outstanding_balance_includes_new_invoice() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let room = store.add_room(&hostel, "101", t0());
    let booking = store.add_booking(Some(&room), BookingStatus::CheckedIn);
    let earlier = t0() - Duration::days(40);
    store.add_payment(&booking, PaymentType::Rent, PaymentStatus::Pending, Decimal::new(100, 0), earlier);
    store.add_payment(&booking, PaymentType::Fine, PaymentStatus::Partial, Decimal::new(50, 0), earlier);
    store.add_payment(&booking, PaymentType::Rent, PaymentStatus::Completed, Decimal::new(999, 0), earlier);
    let mailer = Arc::new(RecordingMailer::default());
    let period = BillingPeriod::containing(t0()).unwrap();

    let invoice = invoices(&store, mailer.clone())
        .generate(&booking, &period, t0())
        .await?;

    assert_eq!(invoice.payment.amount, Decimal::new(45000, 2));
    assert_eq!(invoice.payment.payment_type, PaymentType::Rent);
    assert_eq!(invoice.payment.status, PaymentStatus::Pending);
    assert_eq!(invoice.payment.due_date, Some(period.due_date));
    assert_eq!(invoice.outstanding, Decimal::new(600, 0));
    assert!(invoice.email_sent);

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent[0].to, booking.resident.email);
    assert!(sent[0].subject.contains("March 2024"));
    assert!(sent[0].body.contains("Room 101, Riverside"));
    assert!(sent[0].body.contains("2024-03-10"));
    assert!(sent[0].body.contains("600.00"));
    Ok(())
}

#[tokio::test]
async fn mail_failure_keeps_the_invoice() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let room = store.add_room(&hostel, "101", t0());
    let booking = store.add_booking(Some(&room), BookingStatus::CheckedIn);
    let mailer = Arc::new(RecordingMailer {
        fail: true,
        ..Default::default()
    });

    let report = invoices(&store, mailer).run(t0()).await?;

    assert_eq!(report.created, 1);
    assert_eq!(report.emails_sent, 0);
    assert!(report.errors.is_empty());
    assert_eq!(store.rent_count(booking.booking_id), 1);
    Ok(())
}

#[tokio::test]
async fn unconfigured_transport_is_not_counted_as_sent() -> anyhow::Result<()> {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let room = store.add_room(&hostel, "101", t0());
    let booking = store.add_booking(Some(&room), BookingStatus::CheckedIn);
    let mailer = Arc::new(RecordingMailer {
        unconfigured: true,
        ..Default::default()
    });

    let report = invoices(&store, mailer.clone()).run(t0()).await?;

    assert_eq!(report.created, 1);
    assert_eq!(report.emails_sent, 0);
    assert!(report.errors.is_empty());
    assert_eq!(store.rent_count(booking.booking_id), 1);

    let period = BillingPeriod::containing(t0() + Duration::days(31)).unwrap();
    let invoice = invoices(&store, mailer)
        .generate(&booking, &period, t0() + Duration::days(31))
        .await?;
    assert!(!invoice.email_sent);
    Ok(())
}

#[tokio::test]
async fn inactive_booking_cannot_be_invoiced_directly() {
    let store = InMemoryStore::default();
    let hostel = store.add_hostel(None, None);
    let room = store.add_room(&hostel, "101", t0());
    let booking = store.add_booking(Some(&room), BookingStatus::Cancelled);
    let period = BillingPeriod::containing(t0()).unwrap();

    let res = invoices(&store, Arc::default())
        .generate(&booking, &period, t0())
        .await;

    assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    assert_eq!(store.rent_count(booking.booking_id), 0);
}
