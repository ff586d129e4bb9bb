// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ClusterTask commands. ClusterTasks are cluster-scoped, so the namespace
//! flag is ignored here.

use crate::config::CommandConfig;
use crate::error::Result;
use crate::kubernetes;
use crate::streams::IoStreams;
use crate::types::ClusterTask;
use chrono::{DateTime, Utc};
use kube::{Api, Client};

pub async fn list(
    client: Client,
    cfg: &CommandConfig,
    streams: &mut IoStreams<'_>,
    now: DateTime<Utc>,
) -> Result<()> {
    let api: Api<ClusterTask> = Api::all(client);
    let tasks = kubernetes::list_all(&api).await?;
    super::print_list(tasks, cfg.output, streams, now)
}

pub async fn delete(
    client: Client,
    name: &str,
    cfg: &CommandConfig,
    streams: &mut IoStreams<'_>,
) -> Result<()> {
    let api: Api<ClusterTask> = Api::all(client);
    super::delete_resource(&api, name, cfg.force, streams).await
}
