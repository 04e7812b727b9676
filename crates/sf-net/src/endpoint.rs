//! Endpoint table: every facade operation maps to one fixed path template.

use crate::version::ApiVersion;

/// Root of the REST API on every instance.
pub const DATA_ROOT: &str = "/services/data";

/// A facade endpoint with its path parameters.
///
/// Parameters must already be validated (object types, field names, ids)
/// or percent-encoded (external id values); rendering does no escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Versions,
    Resources,
    DescribeGlobal,
    Describe { object_type: &'a str },
    Metadata { object_type: &'a str },
    DescribeLayout { object_type: &'a str, record_type_id: &'a str },
    SObject { object_type: &'a str },
    Record { object_type: &'a str, id: &'a str },
    ExternalId { object_type: &'a str, field: &'a str, value: &'a str },
    Query,
    Search,
    /// A named entry of the resources map, e.g. `connect`.
    Resource { name: &'a str },
}

impl Endpoint<'_> {
    /// Operation name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Versions => "versions",
            Endpoint::Resources => "resources",
            Endpoint::DescribeGlobal => "describeGlobal",
            Endpoint::Describe { .. } => "describe",
            Endpoint::Metadata { .. } => "metadata",
            Endpoint::DescribeLayout { .. } => "describeLayout",
            Endpoint::SObject { .. } => "sobject",
            Endpoint::Record { .. } => "record",
            Endpoint::ExternalId { .. } => "upsert",
            Endpoint::Query => "query",
            Endpoint::Search => "search",
            Endpoint::Resource { .. } => "resource",
        }
    }

    /// The path template for this endpoint.
    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::Versions => "/services/data/",
            Endpoint::Resources => "/services/data/{version}/",
            Endpoint::DescribeGlobal => "/services/data/{version}/sobjects/",
            Endpoint::Describe { .. } => "/services/data/{version}/sobjects/{objectType}/describe/",
            Endpoint::Metadata { .. } => "/services/data/{version}/sobjects/{objectType}/",
            Endpoint::DescribeLayout { .. } => {
                "/services/data/{version}/sobjects/{objectType}/describe/layouts/{recordTypeId}"
            }
            Endpoint::SObject { .. } => "/services/data/{version}/sobjects/{objectType}/",
            Endpoint::Record { .. } => "/services/data/{version}/sobjects/{objectType}/{id}",
            Endpoint::ExternalId { .. } => {
                "/services/data/{version}/sobjects/{objectType}/{field}/{value}"
            }
            Endpoint::Query => "/services/data/{version}/query",
            Endpoint::Search => "/services/data/{version}/search",
            Endpoint::Resource { .. } => "/services/data/{version}/{resource}",
        }
    }

    /// Render the template for the given version.
    pub fn path(&self, version: &ApiVersion) -> String {
        let mut path = self.template().replace("{version}", version.as_str());
        let params: Vec<(&str, &str)> = match *self {
            Endpoint::Describe { object_type }
            | Endpoint::Metadata { object_type }
            | Endpoint::SObject { object_type } => vec![("{objectType}", object_type)],
            Endpoint::DescribeLayout {
                object_type,
                record_type_id,
            } => vec![("{objectType}", object_type), ("{recordTypeId}", record_type_id)],
            Endpoint::Record { object_type, id } => {
                vec![("{objectType}", object_type), ("{id}", id)]
            }
            Endpoint::ExternalId {
                object_type,
                field,
                value,
            } => vec![
                ("{objectType}", object_type),
                ("{field}", field),
                ("{value}", value),
            ],
            Endpoint::Resource { name } => vec![("{resource}", name)],
            Endpoint::Versions | Endpoint::Resources | Endpoint::DescribeGlobal => Vec::new(),
            Endpoint::Query | Endpoint::Search => Vec::new(),
        };
        for (placeholder, value) in params {
            path = path.replace(placeholder, value);
        }
        path
    }
}
