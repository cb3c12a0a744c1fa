// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod badge;
pub mod config;
pub mod featured;
pub mod pay;
pub mod why;
