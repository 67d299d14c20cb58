// Shared utils

pub mod constants;
pub mod dates;
pub mod format;
pub mod leaflet_ffi;
pub mod storage;

pub use constants::*;
pub use dates::*;
pub use format::*;
pub use storage::*;
