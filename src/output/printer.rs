// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Structured output of resource lists as JSON or YAML.

use crate::error::{Result, TknError};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::core::ObjectList;
use kube::Resource;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = TknError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(TknError::InvalidOutput(other.to_string())),
        }
    }
}

/// A resource list ready for the structured printer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionedList<K> {
    api_version: String,
    kind: String,
    metadata: ListMeta,
    items: Vec<K>,
}

impl<K> VersionedList<K>
where
    K: Resource<DynamicType = ()> + Clone,
{
    /// Wrap a list response, filling in the group/version/kind metadata that
    /// list responses do not reliably carry.
    pub fn from_list(list: ObjectList<K>) -> Self {
        VersionedList {
            api_version: K::api_version(&()).into_owned(),
            kind: format!("{}List", K::kind(&())),
            metadata: list.metadata,
            items: list.items,
        }
    }
}

/// Serialize any object to the writer in the requested format.
pub fn print_object<T: Serialize>(
    out: &mut dyn Write,
    object: &T,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, object)
                .map_err(|e| TknError::Serialization(e.to_string()))?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, object)
                .map_err(|e| TknError::Serialization(e.to_string()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClusterTask;

    fn make_list() -> ObjectList<ClusterTask> {
        serde_json::from_value(serde_json::json!({
            "apiVersion": "tekton.dev/v1alpha1",
            "kind": "ClusterTaskList",
            "metadata": { "resourceVersion": "" },
            "items": [
                {
                    "apiVersion": "tekton.dev/v1alpha1",
                    "kind": "ClusterTask",
                    "metadata": { "name": "tomatoes" },
                    "spec": {}
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_from_list_populates_type_metadata() {
        let value = serde_json::to_value(VersionedList::from_list(make_list())).unwrap();

        assert_eq!(value["apiVersion"], "tekton.dev/v1alpha1");
        assert_eq!(value["kind"], "ClusterTaskList");
        assert_eq!(value["items"][0]["metadata"]["name"], "tomatoes");
    }

    #[test]
    fn test_print_object_json() {
        let mut out = Vec::new();

        print_object(
            &mut out,
            &VersionedList::from_list(make_list()),
            OutputFormat::Json,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "ClusterTaskList");
    }

    #[test]
    fn test_print_object_yaml() {
        let mut out = Vec::new();

        print_object(
            &mut out,
            &VersionedList::from_list(make_list()),
            OutputFormat::Yaml,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("kind: ClusterTaskList"));
        assert!(text.contains("name: tomatoes"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);

        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid output format \"xml\", expected json or yaml"
        );
    }
}
