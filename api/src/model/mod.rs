pub mod booking;
pub mod cron;
pub mod request;
