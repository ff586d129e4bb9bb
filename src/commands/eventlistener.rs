// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! EventListener commands. EventListeners are namespaced, so every command
//! validates the target namespace first.

use crate::config::CommandConfig;
use crate::error::{Result, TknError};
use crate::kubernetes;
use crate::streams::IoStreams;
use crate::types::EventListener;
use chrono::{DateTime, Utc};
use kube::{Api, Client};

pub async fn list(
    client: Client,
    cfg: &CommandConfig,
    streams: &mut IoStreams<'_>,
    now: DateTime<Utc>,
) -> Result<()> {
    let namespace = cfg.namespace();
    kubernetes::validate_namespace(&client, namespace).await?;

    let api: Api<EventListener> = Api::namespaced(client, namespace);
    let listeners = kubernetes::list_all(&api)
        .await
        .map_err(|_| TknError::ListFailed {
            plural: "eventlisteners".to_string(),
            namespace: namespace.to_string(),
        })?;

    super::print_list(listeners, cfg.output, streams, now)
}

pub async fn delete(
    client: Client,
    name: &str,
    cfg: &CommandConfig,
    streams: &mut IoStreams<'_>,
) -> Result<()> {
    let namespace = cfg.namespace();
    kubernetes::validate_namespace(&client, namespace).await?;

    let api: Api<EventListener> = Api::namespaced(client, namespace);
    super::delete_resource(&api, name, cfg.force, streams).await
}
