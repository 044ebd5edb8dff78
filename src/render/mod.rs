// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape renderer: figure geometry and Vello painting

pub mod figure;
pub mod paint;

pub use figure::Figure;
pub use paint::{paint_background, paint_figure};
