// SPDX-License-Identifier: MPL-2.0
//! Platforms without a native backend run on the headless one.

use crate::error::WindowError;
use crate::headless::HeadlessBackend;

pub type PlatformBackend = HeadlessBackend;

pub fn platform_backend() -> Result<PlatformBackend, WindowError> {
    logwise::warn_sync!("No native backend for this platform; running headless");
    Ok(HeadlessBackend::new())
}

pub fn report_fatal(message: &str) {
    logwise::error_sync!("{message}", message = logwise::privacy::LogIt(message));
    eprintln!("Error: {message}");
}

pub fn arguments() -> Vec<String> {
    std::env::args().collect()
}
