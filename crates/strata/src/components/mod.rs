// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Component value types.
//!
//! Generated from the schema definition; each component declares its
//! wire-stable type name and its columnar encoding.

mod scalar;
mod tensor;
mod text;
mod vectors;
mod visual;

pub use scalar::Scalar;
pub use tensor::TensorData;
pub use text::{Text, TextLogLevel};
pub use vectors::{HalfSize3D, Position3D, Vector3D};
pub use visual::{ClassId, Color, Radius};
