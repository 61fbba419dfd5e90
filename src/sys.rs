// SPDX-License-Identifier: MPL-2.0
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub use windows::*;

#[cfg(not(target_os = "windows"))]
mod portable;

#[cfg(not(target_os = "windows"))]
pub use portable::*;
