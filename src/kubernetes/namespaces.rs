// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace validation against the cluster.

use crate::error::{Result, TknError};
use k8s_openapi::api::core::v1::Namespace;
use kube::{Api, Client};
use tracing::{debug, instrument};

/// Check that the given namespace exists before running a namespaced command
#[instrument(skip(client))]
pub async fn validate_namespace(client: &Client, namespace: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.get(namespace).await {
        Ok(_) => {
            debug!("Namespace {} exists", namespace);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            Err(TknError::NamespaceNotFound(namespace.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
