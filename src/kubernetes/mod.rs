// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes access layer: namespace validation and generic list/delete helpers.

pub mod namespaces;
pub mod resources;

pub use namespaces::validate_namespace;
pub use resources::{delete_by_name, list_all};
