// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command implementations for each resource kind.

pub mod clustertask;
pub mod eventlistener;

use crate::error::{Result, TknError};
use crate::kubernetes;
use crate::output::{format_age, print_object, write_table, OutputFormat, VersionedList};
use crate::prompt::confirm_deletion;
use crate::streams::IoStreams;
use chrono::{DateTime, Utc};
use kube::core::ObjectList;
use kube::{Api, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::io::Write;

/// Render a list the way the output flags ask for: structured output when a
/// format is set, otherwise a NAME/AGE table. An empty list is reported on
/// the error stream and is not a failure.
pub(crate) fn print_list<K>(
    list: ObjectList<K>,
    output: Option<OutputFormat>,
    streams: &mut IoStreams<'_>,
    now: DateTime<Utc>,
) -> Result<()>
where
    K: Resource<DynamicType = ()> + Clone + Serialize,
{
    if let Some(format) = output {
        return print_object(streams.out, &VersionedList::from_list(list), format);
    }

    if list.items.is_empty() {
        writeln!(streams.err, "No {} found", K::plural(&()))?;
        return Ok(());
    }

    let rows: Vec<[String; 2]> = list
        .items
        .iter()
        .map(|item| {
            [
                item.name_any(),
                format_age(item.meta().creation_timestamp.as_ref(), now),
            ]
        })
        .collect();

    write_table(streams.out, ["NAME", "AGE"], &rows)?;
    Ok(())
}

/// Delete a resource, prompting for confirmation unless forced. A refused or
/// closed prompt cancels the command before any API call is made.
pub(crate) async fn delete_resource<K>(
    api: &Api<K>,
    name: &str,
    force: bool,
    streams: &mut IoStreams<'_>,
) -> Result<()>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug,
{
    let kind = K::kind(&()).to_lowercase();

    if !force && !confirm_deletion(&kind, name, streams)? {
        return Err(TknError::Canceled {
            kind,
            name: name.to_string(),
        });
    }

    kubernetes::delete_by_name(api, name).await?;
    writeln!(streams.out, "{} deleted: {}", K::kind(&()), name)?;
    Ok(())
}
