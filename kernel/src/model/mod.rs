pub mod booking;
pub mod hostel;
pub mod id;
pub mod payment;
pub mod request;
pub mod room;
pub mod schedule;
pub mod service_log;
pub mod user;
