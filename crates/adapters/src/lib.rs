// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for external I/O: line classification, file tailing, and
//! incident delivery over HTTP.

pub mod classifier;
pub mod delivery;
pub mod tailer;

pub use classifier::{is_error_line, is_trace_continuation, is_trace_start};
pub use delivery::{DeliveryClient, DeliveryError, DeliveryTransport, HttpDeliveryTransport};
pub use tailer::{TailError, Tailer};

#[cfg(any(test, feature = "test-support"))]
pub use delivery::{DeliveryCall, FakeDeliveryTransport};
