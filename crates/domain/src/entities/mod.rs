//! Domain entities - Objects with identity and lifecycle

mod device;

pub use device::{Device, DeviceAction, ShellCommand, WebRequest};
