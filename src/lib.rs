pub mod errors;
pub mod health;
pub mod middleware;
pub mod telemetry;
pub mod views;
