pub mod clock;
pub mod mail;
pub mod model;
pub mod repository;
pub mod scheduler;
