//! Key-value table descriptor

use crate::resource::RemovalPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Number,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl KeyAttribute {
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute_type: AttributeType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalIndex {
    pub index_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingMode {
    PayPerRequest,
    Provisioned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableEncryption {
    ProviderManaged,
    CustomerManaged,
}

/// Change stream view type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamView {
    KeysOnly,
    NewImage,
    OldImage,
    NewAndOldImages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
    pub global_indexes: Vec<GlobalIndex>,
    pub billing: BillingMode,
    pub point_in_time_recovery: bool,
    pub encryption: TableEncryption,
    pub stream: Option<StreamView>,
    pub removal: RemovalPolicy,
}

impl TableSpec {
    /// Single-table layout: PK/SK plus two overloaded secondary indexes
    pub fn single_table(table_name: impl Into<String>) -> Self {
        let index = |n: u8| GlobalIndex {
            index_name: format!("GSI{n}"),
            partition_key: KeyAttribute::string(format!("GSI{n}PK")),
            sort_key: KeyAttribute::string(format!("GSI{n}SK")),
        };

        Self {
            table_name: table_name.into(),
            partition_key: KeyAttribute::string("PK"),
            sort_key: KeyAttribute::string("SK"),
            global_indexes: vec![index(1), index(2)],
            billing: BillingMode::PayPerRequest,
            point_in_time_recovery: true,
            encryption: TableEncryption::ProviderManaged,
            stream: Some(StreamView::NewAndOldImages),
            removal: RemovalPolicy::Destroy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_table_layout() {
        let table = TableSpec::single_table("cf-user-dev-app-user");
        assert_eq!(table.partition_key.name, "PK");
        assert_eq!(table.sort_key.name, "SK");

        let names: Vec<_> = table
            .global_indexes
            .iter()
            .map(|i| (i.index_name.as_str(), i.partition_key.name.as_str(), i.sort_key.name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("GSI1", "GSI1PK", "GSI1SK"), ("GSI2", "GSI2PK", "GSI2SK")]
        );
        assert!(table.point_in_time_recovery);
        assert_eq!(table.stream, Some(StreamView::NewAndOldImages));
    }
}
