pub mod booking;
pub mod health;
pub mod hostel;
pub mod payment;
pub mod request;
pub mod room;
pub mod service_log;
