pub mod config;
pub mod error;
pub mod pipeline;
pub mod telemetry;
pub mod upstream;
