// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Runtime capability detection for adaptive rendering quality
//!
//! The probe turns raw signals (platform string, graphics context, frame
//! clock, pixel ratio) into a [`CapabilitySnapshot`]. The heuristics are
//! coarse on purpose: a wrong guess lowers or raises quality, it never fails.

pub mod detector;
pub mod frame;
pub mod probe;
pub mod snapshot;
pub mod source;

pub use detector::*;
pub use frame::*;
pub use probe::*;
pub use snapshot::*;
pub use source::*;
