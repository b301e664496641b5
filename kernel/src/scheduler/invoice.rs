use crate::{
    mail::{Email, Mailer},
    model::{
        booking::{BillableBooking, BillingRoom},
        payment::{event::CreatePayment, Payment, PaymentStatus, PaymentType},
        schedule::BillingPeriod,
        user::Resident,
    },
    repository::{booking::BookingRepository, payment::PaymentRepository},
    scheduler::SweepError,
};
use chrono::{DateTime, Utc};
use derive_new::new;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvoiceReport {
    pub processed: usize,
    pub created: usize,
    pub emails_sent: usize,
    pub errors: Vec<SweepError>,
}

#[derive(Debug)]
pub struct GeneratedInvoice {
    pub payment: Payment,
    pub outstanding: Decimal,
    pub email_sent: bool,
}

#[derive(new)]
pub struct InvoiceScheduler {
    booking_repository: Arc<dyn BookingRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
    mailer: Arc<dyn Mailer>,
}

impl InvoiceScheduler {
    /// 有効な予約それぞれに今月分の家賃請求を作成する。
    /// すでに今月の請求がある予約はスキップする。
    pub async fn run(&self, now: DateTime<Utc>) -> AppResult<InvoiceReport> {
        let period = BillingPeriod::containing(now).ok_or_else(|| {
            AppError::UnprocessableEntity(format!("no billing period for {now}"))
        })?;
        let bookings = self.booking_repository.find_active_billable().await?;
        let mut report = InvoiceReport::default();

        for booking in &bookings {
            report.processed += 1;
            match self.bill(booking, &period, now).await {
                Ok(Some(invoice)) => {
                    report.created += 1;
                    if invoice.email_sent {
                        report.emails_sent += 1;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(booking_id = %booking.booking_id, error = %e, "invoice generation failed");
                    report
                        .errors
                        .push(SweepError::new(booking.booking_id.to_string(), e.to_string()));
                }
            }
        }

        tracing::info!(
            period = %period.label(),
            processed = report.processed,
            created = report.created,
            emails_sent = report.emails_sent,
            errors = report.errors.len(),
            "monthly invoices finished"
        );
        Ok(report)
    }

    async fn bill(
        &self,
        booking: &BillableBooking,
        period: &BillingPeriod,
        now: DateTime<Utc>,
    ) -> AppResult<Option<GeneratedInvoice>> {
        if self
            .payment_repository
            .rent_exists_in_period(booking.booking_id, period)
            .await?
        {
            tracing::debug!(booking_id = %booking.booking_id, "rent already invoiced this month");
            return Ok(None);
        }
        self.generate(booking, period, now).await.map(Some)
    }

    /// 家賃の請求を作成し、入居者の未払い残高を再計算して通知する。
    /// 通知の失敗は請求の作成を取り消さない。
    pub async fn generate(
        &self,
        booking: &BillableBooking,
        period: &BillingPeriod,
        now: DateTime<Utc>,
    ) -> AppResult<GeneratedInvoice> {
        if !booking.status.is_active() {
            return Err(AppError::UnprocessableEntity(format!(
                "予約（{}）は有効ではありません（{}）",
                booking.booking_id, booking.status
            )));
        }
        let room = booking.room.as_ref().ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "予約（{}）の部屋が見つかりませんでした。",
                booking.booking_id
            ))
        })?;
        let user_id = booking.resident.user_id;

        let payment = self
            .payment_repository
            .create(CreatePayment::new(
                user_id,
                Some(booking.booking_id),
                room.monthly_rent,
                PaymentType::Rent,
                PaymentStatus::Pending,
                Some(period.due_date),
                Some(format!("Monthly rent for {}", period.label())),
                now,
            ))
            .await?;
        let outstanding = self.payment_repository.outstanding_total(user_id).await?;

        let email = invoice_email(&booking.resident, room, &payment, period, outstanding);
        let email_sent = match self.mailer.send(email).await {
            Ok(Some(message_id)) => {
                tracing::debug!(booking_id = %booking.booking_id, %message_id, "invoice email sent");
                true
            }
            Ok(None) => {
                tracing::debug!(booking_id = %booking.booking_id, "invoice email not sent; no transport");
                false
            }
            Err(e) => {
                tracing::warn!(booking_id = %booking.booking_id, error = %e, "failed to send invoice email");
                false
            }
        };

        Ok(GeneratedInvoice {
            payment,
            outstanding,
            email_sent,
        })
    }
}

fn invoice_email(
    resident: &Resident,
    room: &BillingRoom,
    payment: &Payment,
    period: &BillingPeriod,
    outstanding: Decimal,
) -> Email {
    let subject = format!("Rent invoice for {}", period.label());
    let body = format!(
        "Hello {},\n\n\
         Your rent for {} has been issued.\n\
         Unit: {}\n\
         Amount this month: {:.2}\n\
         Due date: {}\n\
         Total outstanding: {:.2}\n",
        resident.user_name,
        period.label(),
        room.unit_label(),
        payment.amount,
        period.due_date.format("%Y-%m-%d"),
        outstanding,
    );
    Email::new(resident.email.clone(), subject, body)
}
