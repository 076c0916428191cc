// SPDX-License-Identifier: MPL-2.0
//! Appliance control API.
//!
//! [`execute`] is the only entry point the UI needs: it maps an
//! [`Intent`](crate::filtering::Intent) onto the matching endpoint and
//! returns the [`Outcome`](crate::filtering::Outcome).

mod client;
mod wire;

pub use client::{execute, Client};
