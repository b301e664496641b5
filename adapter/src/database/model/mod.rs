pub mod booking;
pub mod hostel;
pub mod payment;
pub mod request;
pub mod room;
