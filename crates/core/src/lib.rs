//! # Hospital Core
//!
//! Aggregation logic over the upstream hospital-records API.
//!
//! This crate contains:
//! - Startup configuration (`config`)
//! - The upstream fetch primitive (`upstream`)
//! - Pure reshaping of fetched collections (`reshape`)
//! - `HospitalService`, which ties the two together per route
//!
//! **No API concerns**: status codes, routing and documentation belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod reshape;
pub mod service;
pub mod upstream;

pub use config::{core_config_from_env_value, CoreConfig};
pub use constants::{DEFAULT_REST_ADDR, DEFAULT_UPSTREAM_BASE_URL};
pub use error::{CoreError, CoreResult};
pub use service::HospitalService;
pub use upstream::UpstreamClient;
