pub mod appointments;
pub mod health;
pub mod mood;
