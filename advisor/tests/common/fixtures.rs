//! Test fixtures and data for advisor tests
//!
//! This module provides consistent cluster layouts used across all test suites.
#![allow(dead_code)]

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Host names
    pub const NODE_1: &'static str = "node1.metron.local";
    pub const NODE_2: &'static str = "node2.metron.local";
    pub const NODE_3: &'static str = "node3.metron.local";

    /// Classpath Metron wants in storm-site
    pub const DESIRED_CLASSPATH: &'static str = "/etc/hbase/conf:/etc/hadoop/conf";

    pub const UI_PORT: &'static str = "8744";
    pub const FIVE_SLOTS: &'static str = "6700,6701,6702,6703,6704";
    pub const FOUR_SLOTS: &'static str = "6700,6701,6702,6703";

    /// (service, component) pairs of a full Metron single node install
    pub fn single_node_components() -> Vec<(&'static str, &'static str)> {
        vec![
            ("METRON", "METRON_PARSERS"),
            ("METRON", "METRON_ENRICHMENT_MASTER"),
            ("METRON", "METRON_INDEXING"),
            ("METRON", "METRON_ENRICHMENT_MYSQL_SERVER"),
            ("KAFKA", "KAFKA_BROKER"),
            ("STORM", "SUPERVISOR"),
            ("STORM", "STORM_UI_SERVER"),
            ("ZOOKEEPER", "ZOOKEEPER_CLIENT"),
            ("HDFS", "HDFS_CLIENT"),
            ("HBASE", "HBASE_CLIENT"),
        ]
    }

    pub fn hosts_json() -> String {
        format!(
            r#"{{ "items": [
                {{ "Hosts": {{ "host_name": "{}" }} }},
                {{ "Hosts": {{ "host_name": "{}" }} }},
                {{ "Hosts": {{ "host_name": "{}" }} }}
            ] }}"#,
            Self::NODE_1,
            Self::NODE_2,
            Self::NODE_3
        )
    }
}
