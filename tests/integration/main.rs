//! Integration tests

mod config_test;
mod engine_test;
mod lifecycle_test;
mod prediction_test;
