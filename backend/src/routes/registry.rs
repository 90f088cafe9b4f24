//! Tool-discovery manifest for external agent frameworks.
//!
//! The manifest follows the function-registry layout (version `1.0`): each
//! operation is a function with a JSON-schema `parameters` object and an
//! `x-opal-http` binding naming the HTTP method and URL.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::kpis::{COMPARE_SITE_KPIS, COMPARE_SITE_KPIS_PATH, GET_SITE_KPIS, GET_SITE_KPIS_PATH};
use super::sites::{LIST_SITES, LIST_SITES_PATH};

pub const TOOL_REGISTRY_PATH: &str = "/opal-tool-registry";

/// Version of the manifest contract served by this API.
pub const MANIFEST_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolManifest {
    pub version: String,
    pub functions: Vec<ToolFunction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFunction {
    pub name: String,
    pub description: String,
    pub parameters: ParameterSchema,
    #[serde(rename = "x-opal-http")]
    pub http: HttpBinding,
}

/// JSON schema of a function's arguments. Always an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: BTreeMap<String, PropertySchema>,
    pub required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub description: String,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpBinding {
    pub method: String,
    pub url: String,
}

impl ParameterSchema {
    fn object(properties: Vec<(&str, PropertySchema)>, required: &[&str]) -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PropertySchema {
    fn string(description: &str) -> Self {
        Self {
            schema_type: "string".to_string(),
            description: description.to_string(),
            allowed: None,
        }
    }

    fn period(description: &str) -> Self {
        Self {
            allowed: Some(
                crate::models::Period::ALL
                    .iter()
                    .map(|p| p.as_str().to_string())
                    .collect(),
            ),
            ..Self::string(description)
        }
    }
}

/// Join the public base URL with a route path.
///
/// Without a base URL the bare relative path is used.
fn endpoint_url(base_url: Option<&str>, path: &str) -> String {
    match base_url {
        Some(base) if !base.is_empty() => format!("{}{}", base.trim_end_matches('/'), path),
        _ => path.to_string(),
    }
}

fn function(
    name: &str,
    description: &str,
    parameters: ParameterSchema,
    method: &str,
    url: String,
) -> ToolFunction {
    ToolFunction {
        name: name.to_string(),
        description: description.to_string(),
        parameters,
        http: HttpBinding {
            method: method.to_string(),
            url,
        },
    }
}

/// Build the manifest for the three public operations.
pub fn build_manifest(base_url: Option<&str>) -> ToolManifest {
    let site_id = || PropertySchema::string("ID of the site (e.g. helsinki-hq).");

    let functions = vec![
        function(
            LIST_SITES,
            "Return all available sites.",
            ParameterSchema::object(vec![], &[]),
            "GET",
            endpoint_url(base_url, LIST_SITES_PATH),
        ),
        function(
            GET_SITE_KPIS,
            "Return sustainability KPIs for the given site and period.",
            ParameterSchema::object(
                vec![
                    ("site_id", site_id()),
                    (
                        "period",
                        PropertySchema::period(
                            "Time period (current, previous, last_month, last_quarter).",
                        ),
                    ),
                ],
                &["site_id", "period"],
            ),
            "POST",
            endpoint_url(base_url, GET_SITE_KPIS_PATH),
        ),
        function(
            COMPARE_SITE_KPIS,
            "Compare sustainability KPIs between two periods for a site.",
            ParameterSchema::object(
                vec![
                    ("site_id", site_id()),
                    (
                        "current_period",
                        PropertySchema::period("Current period (e.g. current)."),
                    ),
                    (
                        "previous_period",
                        PropertySchema::period("Previous period (e.g. previous)."),
                    ),
                ],
                &["site_id", "current_period", "previous_period"],
            ),
            "POST",
            endpoint_url(base_url, COMPARE_SITE_KPIS_PATH),
        ),
    ];

    ToolManifest {
        version: MANIFEST_VERSION.to_string(),
        functions,
    }
}
