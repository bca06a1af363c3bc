// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! HTTP middleware.

mod gate;

pub use gate::{GateLayer, GateMiddleware, RequestId};
