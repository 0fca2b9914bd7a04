// libpn532/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod link;

pub use builder::DeviceBuilder;
pub use handle::{Device, Initialized, Uninitialized};
pub use link::DataLink;
