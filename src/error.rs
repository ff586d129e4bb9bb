// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TknError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("namespace \"{0}\" not found")]
    NamespaceNotFound(String),

    #[error("failed to list {plural} from {namespace} namespace")]
    ListFailed { plural: String, namespace: String },

    #[error("Failed to delete {kind} \"{name}\": {reason}")]
    DeleteFailed {
        kind: String,
        name: String,
        reason: String,
    },

    #[error("Canceled deleting {kind} \"{name}\"")]
    Canceled { kind: String, name: String },

    #[error("invalid output format \"{0}\", expected json or yaml")]
    InvalidOutput(String),

    #[error("failed to serialize output: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TknError>;
