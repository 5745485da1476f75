// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Rendering itself never fails; only [`ChartOptions::validate`](crate::ChartOptions::validate)
//! reports errors.

use thiserror::Error;

/// Result alias for fallible chart construction.
pub type ChartResult<T> = Result<T, ChartError>;

/// Invalid chart configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ChartError {
    /// The container must have a finite, positive size.
    #[error("invalid container size: width={width}, height={height}")]
    InvalidContainer {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// Axes need at least two ticks to have a step.
    #[error("tick count must be at least 2, got {0}")]
    TickCount(usize),

    /// A size-like option is negative, zero where it must be positive, or not finite.
    #[error("invalid {field}: {value}")]
    InvalidDimension {
        /// Option name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}
