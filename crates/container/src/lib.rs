// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Component container for relay dispatchers
//!
//! Binds component names to factories or shared instances so that
//! `"Component@method"` listeners and named subscribers can be resolved
//! lazily at dispatch time.

pub mod container;
pub mod traced;

pub use container::{BindError, Container};
pub use traced::TracedResolver;
