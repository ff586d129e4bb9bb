// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of resource listings as tables or structured output.

pub mod printer;
pub mod table;

pub use printer::{print_object, OutputFormat, VersionedList};
pub use table::{format_age, write_table};
