// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Server**: Appliance address and request timeout
//! - **Filters**: Filter table pagination

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Default address of the appliance's web interface.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Filter Table Defaults
// ==========================================================================

/// Default number of rows per page in the filter table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Minimum rows per page.
pub const MIN_PAGE_SIZE: usize = 5;

/// Maximum rows per page.
pub const MAX_PAGE_SIZE: usize = 100;

/// Rows always reserved in the table so an empty or short page keeps its height.
pub const MIN_VISIBLE_ROWS: usize = 4;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TIMEOUT_SECS > 0);
    assert!(MAX_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);

    assert!(MIN_PAGE_SIZE > 0);
    assert!(MAX_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    assert!(MIN_VISIBLE_ROWS <= MIN_PAGE_SIZE);
};
