use std::fmt;

use rustacuda::error::CudaError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The driver binding reported a failure (initialization, handle
    /// resolution, attribute read).
    Driver(CudaError),
    /// The requested device ordinal is not visible to the driver.
    DeviceOutOfRange { ordinal: u32, count: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<CudaError> for Error {
    fn from(err: CudaError) -> Self {
        Error::Driver(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Driver(err) => write!(f, "CUDA driver error: {}", err),
            Error::DeviceOutOfRange { ordinal, count } => write!(
                f,
                "device ordinal {} out of range, {} device(s) visible",
                ordinal, count
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Driver(err) => Some(err),
            Error::DeviceOutOfRange { .. } => None,
        }
    }
}
