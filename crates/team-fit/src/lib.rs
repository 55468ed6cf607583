pub mod config;
pub mod error;
pub mod roster;
pub mod scoring;
pub mod telemetry;

#[cfg(test)]
mod test_support;
