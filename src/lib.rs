#[macro_use(debug)]
extern crate tracing;

pub mod device;
pub mod error;

pub use device::{
    compute_capability, device_count, device_summary, list_devices, ComputeCapability,
    DeviceSummary,
};
pub use error::{Error, Result};
