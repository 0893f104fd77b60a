#![allow(dead_code)]
mod contour_properties;
mod debug;

pub use contour_properties::*;
pub use debug::*;

/// Route `log` output of the library through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
