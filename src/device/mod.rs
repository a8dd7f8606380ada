// Copyright 2024 OKX Group
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use rustacuda::device::{Device, DeviceAttribute};
use rustacuda::CudaFlags;

use crate::error::{Error, Result};

/// A device's compute capability generation, e.g. `8.6`.
///
/// Ordered by (major, minor) so callers can gate on a minimum
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ComputeCapability {
    pub major: i32,
    pub minor: i32,
}

impl ComputeCapability {
    /// CUDA cores per streaming multiprocessor for this generation, or
    /// `None` for generations this build does not know about.
    pub fn cores_per_multiprocessor(&self) -> Option<u32> {
        let cores = match (self.major, self.minor) {
            (3, _) => 192,
            (5, _) => 128,
            (6, 0) => 64,
            (6, 1) | (6, 2) => 128,
            (7, 0) | (7, 2) | (7, 5) => 64,
            (8, 0) => 64,
            (8, 6) | (8, 7) | (8, 9) => 128,
            (9, 0) => 128,
            _ => return None,
        };
        Some(cores)
    }
}

impl fmt::Display for ComputeCapability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ComputeCapability {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| format!("expected <major>.<minor>, got {:?}", s))?;
        let major = major
            .parse::<u32>()
            .map_err(|e| format!("bad major version {:?}: {}", major, e))?;
        let minor = minor
            .parse::<u32>()
            .map_err(|e| format!("bad minor version {:?}: {}", minor, e))?;
        Ok(ComputeCapability {
            major: major as i32,
            minor: minor as i32,
        })
    }
}

/// Static properties of one visible device.
#[derive(Debug, Clone)]
pub struct DeviceSummary {
    pub ordinal: u32,
    pub name: String,
    pub capability: ComputeCapability,
    pub multiprocessor_count: i32,
    pub cuda_cores: Option<u32>,
    pub total_memory: usize,
}

impl fmt::Display for DeviceSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Device {} - {}  capability {}  SMs {}",
            self.ordinal, self.name, self.capability, self.multiprocessor_count
        )?;
        match self.cuda_cores {
            Some(cores) => write!(f, "  CUDA cores {}", cores)?,
            None => write!(f, "  CUDA cores unknown")?,
        }
        write!(f, "  memory {}", self.total_memory)
    }
}

pub fn device_count() -> Result<u32> {
    init()?;
    Ok(Device::num_devices()?)
}

/// Query the compute capability of the device at `ordinal`.
///
/// Initializes the driver, resolves the device handle and reads the
/// major/minor capability attributes. No context is created; attribute
/// reads only need the handle.
pub fn compute_capability(ordinal: u32) -> Result<ComputeCapability> {
    let device = device_handle(ordinal)?;
    let capability = capability_of(device)?;
    debug!(
        ordinal,
        major = capability.major,
        minor = capability.minor,
        "queried compute capability"
    );
    Ok(capability)
}

pub fn device_summary(ordinal: u32) -> Result<DeviceSummary> {
    let device = device_handle(ordinal)?;
    let capability = capability_of(device)?;
    let multiprocessor_count = device.get_attribute(DeviceAttribute::MultiprocessorCount)?;
    Ok(DeviceSummary {
        ordinal,
        name: device.name()?,
        capability,
        multiprocessor_count,
        cuda_cores: capability
            .cores_per_multiprocessor()
            .map(|cores| cores * multiprocessor_count as u32),
        total_memory: device.total_memory()?,
    })
}

/// One summary per visible device, in ordinal order.
pub fn list_devices() -> Result<Vec<DeviceSummary>> {
    (0..device_count()?).map(device_summary).collect()
}

// cuInit is idempotent, so every entry point pays the call rather than
// asking callers to manage driver state.
fn init() -> Result<()> {
    rustacuda::init(CudaFlags::empty())?;
    Ok(())
}

fn device_handle(ordinal: u32) -> Result<Device> {
    init()?;
    let count = Device::num_devices()?;
    if ordinal >= count {
        return Err(Error::DeviceOutOfRange { ordinal, count });
    }
    Ok(Device::get_device(ordinal)?)
}

fn capability_of(device: Device) -> Result<ComputeCapability> {
    let major = device.get_attribute(DeviceAttribute::ComputeCapabilityMajor)?;
    let minor = device.get_attribute(DeviceAttribute::ComputeCapabilityMinor)?;
    Ok(ComputeCapability { major, minor })
}
