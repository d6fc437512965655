pub mod appointment;
pub mod mood_log;
pub mod suggestion;
