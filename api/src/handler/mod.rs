pub mod booking;
pub mod cron;
pub mod health;
pub mod request;
