// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Archetype record types.
//!
//! Generated from the schema definition (latest generation only). Each
//! archetype declares its fields in wire order and serializes them through
//! the shared machinery in [`crate::archetype`].

mod arrows3d;
mod boxes3d;
mod points3d;
mod scalars;
mod tensor;
mod text_log;

pub use arrows3d::Arrows3D;
pub use boxes3d::Boxes3D;
pub use points3d::Points3D;
pub use scalars::Scalars;
pub use tensor::Tensor;
pub use text_log::TextLog;
