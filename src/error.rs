// SPDX-License-Identifier: MPL-2.0
use crate::window::WindowId;

/// Errors reported by window management.
///
/// Most native failures are degraded rather than reported (see [`crate::system::System::create_window`]);
/// these are the cases a caller can act on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Every slot of the window table has been allocated.
    #[error("window table is full ({capacity} windows)")]
    TooManyWindows { capacity: usize },
    /// The id was never allocated, or its window has been destroyed.
    #[error("no live window with id {0}")]
    NoSuchWindow(WindowId),
    /// The platform refused the operation.
    #[error("native window operation failed: {0}")]
    Native(String),
}
