// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::output::OutputFormat;

pub const DEFAULT_NAMESPACE: &str = "default";

/// Flags resolved by the dispatcher, handed to each command handler
#[derive(Debug, Clone, Default)]
pub struct CommandConfig {
    /// Namespace scoping commands on namespaced resource kinds
    pub namespace: Option<String>,
    /// Structured output format requested with -o, None for plain tables
    pub output: Option<OutputFormat>,
    /// Skip the confirmation prompt on deletes
    pub force: bool,
}

impl CommandConfig {
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}
