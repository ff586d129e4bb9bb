// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic list and delete operations over Tekton resource kinds.

use crate::error::{Result, TknError};
use kube::api::{DeleteParams, ListParams};
use kube::core::ObjectList;
use kube::{Api, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, instrument};

/// List every resource visible through the given API handle, preserving the
/// order of the API response.
#[instrument(skip(api))]
pub async fn list_all<K>(api: &Api<K>) -> Result<ObjectList<K>>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug,
{
    let list = api.list(&ListParams::default()).await?;
    debug!("Listed {} {}", list.items.len(), K::plural(&()));
    Ok(list)
}

/// Delete the named resource. The call is attempted exactly once; a missing
/// target surfaces the server's not-found message with the kind and name.
#[instrument(skip(api))]
pub async fn delete_by_name<K>(api: &Api<K>, name: &str) -> Result<()>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug,
{
    let kind = K::kind(&()).to_lowercase();

    match api.delete(name, &DeleteParams::default()).await {
        Ok(_) => {
            debug!("Deleted {} {}", kind, name);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => Err(TknError::DeleteFailed {
            kind,
            name: name.to_string(),
            reason: err.message,
        }),
        Err(e) => Err(TknError::DeleteFailed {
            kind,
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}
