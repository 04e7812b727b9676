//! Describe response types.
//!
//! These model the parts of the describe payloads the facade promises;
//! everything else the server sends is ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Describe Global
// ============================================================================

/// Result of `describe_global`.
///
/// `sobjects` is required: a payload where it is missing or `null` fails to
/// decode. An empty array is a valid result.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DescribeGlobalResult {
    /// Character encoding (e.g., "UTF-8").
    pub encoding: Option<String>,

    #[serde(rename = "maxBatchSize")]
    pub max_batch_size: Option<u32>,

    pub sobjects: Vec<SObjectBasicInfo>,
}

/// Basic information about an object type from `describe_global`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SObjectBasicInfo {
    pub name: String,
    pub label: String,
    #[serde(rename = "labelPlural")]
    pub label_plural: Option<String>,
    #[serde(rename = "keyPrefix")]
    pub key_prefix: Option<String>,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub queryable: bool,
    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default)]
    pub deletable: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub urls: HashMap<String, String>,
}

// ============================================================================
// Describe SObject
// ============================================================================

/// Full describe of one object type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DescribeSObjectResult {
    pub name: String,
    pub label: String,
    #[serde(rename = "labelPlural")]
    pub label_plural: Option<String>,
    #[serde(rename = "keyPrefix")]
    pub key_prefix: Option<String>,
    pub custom: bool,

    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub deletable: bool,
    #[serde(default)]
    pub queryable: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub updateable: bool,

    pub fields: Vec<FieldDescribe>,

    #[serde(rename = "childRelationships", default)]
    pub child_relationships: Vec<ChildRelationship>,
    #[serde(rename = "recordTypeInfos", default)]
    pub record_type_infos: Vec<RecordTypeInfo>,

    #[serde(default)]
    pub urls: HashMap<String, String>,
}

impl DescribeSObjectResult {
    /// Look up a field by API name, case-insensitively.
    pub fn field(&self, name: &str) -> Option<&FieldDescribe> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChildRelationship {
    #[serde(rename = "childSObject")]
    pub child_sobject: String,
    pub field: String,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,
    #[serde(rename = "cascadeDelete", default)]
    pub cascade_delete: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordTypeInfo {
    pub name: String,
    #[serde(rename = "recordTypeId")]
    pub record_type_id: Option<String>,
    #[serde(rename = "developerName")]
    pub developer_name: Option<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(rename = "defaultRecordTypeMapping", default)]
    pub default_record_type_mapping: bool,
    #[serde(default)]
    pub master: bool,
}

/// Describe of a single field.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldDescribe {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub custom: bool,
    pub length: Option<i32>,
    pub precision: Option<i32>,
    pub scale: Option<i32>,

    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default)]
    pub nillable: bool,
    #[serde(default)]
    pub filterable: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(rename = "externalId", default)]
    pub external_id: bool,
    #[serde(rename = "idLookup", default)]
    pub id_lookup: bool,

    #[serde(rename = "referenceTo", default)]
    pub reference_to: Vec<String>,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,
    #[serde(rename = "picklistValues", default)]
    pub picklist_values: Vec<PicklistValue>,
}

/// Picklist value for picklist fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PicklistValue {
    pub value: String,
    pub label: Option<String>,
    pub active: bool,
    #[serde(rename = "defaultValue", default)]
    pub default_value: bool,
}

// ============================================================================
// Basic object metadata
// ============================================================================

/// Result of `metadata`: the basic info block plus the user's recently
/// viewed records of that type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SObjectMetadata {
    #[serde(rename = "objectDescribe")]
    pub object_describe: SObjectBasicInfo,
    #[serde(rename = "recentItems")]
    pub recent_items: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_global_result_deser() {
        let json = r#"{
            "encoding": "UTF-8",
            "maxBatchSize": 200,
            "sobjects": [{
                "name": "Account",
                "label": "Account",
                "labelPlural": "Accounts",
                "keyPrefix": "001",
                "custom": false,
                "queryable": true,
                "urls": {"sobject": "/services/data/v42.0/sobjects/Account"}
            }]
        }"#;

        let result: DescribeGlobalResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.encoding.as_deref(), Some("UTF-8"));
        assert_eq!(result.max_batch_size, Some(200));
        assert_eq!(result.sobjects.len(), 1);
        assert_eq!(result.sobjects[0].name, "Account");
        assert!(result.sobjects[0].queryable);
        assert!(!result.sobjects[0].createable);
    }

    #[test]
    fn test_describe_global_rejects_null_sobjects() {
        assert!(serde_json::from_str::<DescribeGlobalResult>(r#"{"sobjects": null}"#).is_err());
        assert!(serde_json::from_str::<DescribeGlobalResult>(r#"{"encoding": "UTF-8"}"#).is_err());

        let empty: DescribeGlobalResult = serde_json::from_str(r#"{"sobjects": []}"#).unwrap();
        assert!(empty.sobjects.is_empty());
    }

    #[test]
    fn test_describe_sobject_deser() {
        let json = r#"{
            "name": "Account",
            "label": "Account",
            "custom": false,
            "fields": [
                {"name": "Id", "label": "Account ID", "type": "id", "idLookup": true},
                {"name": "Rating", "label": "Rating", "type": "picklist", "nillable": true,
                 "picklistValues": [{"value": "Hot", "label": "Hot", "active": true}]}
            ],
            "recordTypeInfos": [{"name": "Master", "master": true, "available": true}]
        }"#;

        let describe: DescribeSObjectResult = serde_json::from_str(json).unwrap();
        assert!(!describe.custom);
        assert_eq!(describe.fields.len(), 2);
        assert!(describe.field("id").unwrap().id_lookup);
        let rating = describe.field("Rating").unwrap();
        assert_eq!(rating.field_type, "picklist");
        assert_eq!(rating.picklist_values[0].value, "Hot");
        assert!(!rating.picklist_values[0].default_value);
        assert!(describe.record_type_infos[0].master);
        assert!(describe.child_relationships.is_empty());
    }

    #[test]
    fn test_describe_requires_fields() {
        let json = r#"{"name": "Account", "label": "Account", "custom": false}"#;
        assert!(serde_json::from_str::<DescribeSObjectResult>(json).is_err());
    }

    #[test]
    fn test_metadata_deser() {
        let json = r#"{
            "objectDescribe": {"name": "Account", "label": "Account", "custom": false},
            "recentItems": [{"Id": "001000000000001AAA", "Name": "Acme"}]
        }"#;

        let metadata: SObjectMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.object_describe.name, "Account");
        assert_eq!(metadata.recent_items.len(), 1);
        assert_eq!(metadata.recent_items[0]["Name"], "Acme");
    }
}
