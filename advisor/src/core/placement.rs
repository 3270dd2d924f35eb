//! Component co-location rules
//!
//! Metron's parsers, enrichment master, indexing and MySQL server all live on
//! one host, which must also carry a Kafka broker, a Storm supervisor and the
//! ZooKeeper, HDFS and HBase clients.

use shared::{ComponentPlacement, Severity, ValidationItem};

use crate::error::{AdvisorError, AdvisorResult};

pub const METRON_PARSERS: &str = "METRON_PARSERS";
pub const METRON_ENRICHMENT_MASTER: &str = "METRON_ENRICHMENT_MASTER";
pub const METRON_INDEXING: &str = "METRON_INDEXING";
pub const METRON_ENRICHMENT_MYSQL_SERVER: &str = "METRON_ENRICHMENT_MYSQL_SERVER";

pub const KAFKA_BROKER: &str = "KAFKA_BROKER";
pub const SUPERVISOR: &str = "SUPERVISOR";
pub const STORM_UI_SERVER: &str = "STORM_UI_SERVER";
pub const ZOOKEEPER_CLIENT: &str = "ZOOKEEPER_CLIENT";
pub const HDFS_CLIENT: &str = "HDFS_CLIENT";
pub const HBASE_CLIENT: &str = "HBASE_CLIENT";

/// Every component the layout rules look at
pub const LAYOUT_COMPONENTS: [&str; 9] = [
    METRON_PARSERS,
    METRON_ENRICHMENT_MASTER,
    METRON_INDEXING,
    METRON_ENRICHMENT_MYSQL_SERVER,
    HBASE_CLIENT,
    HDFS_CLIENT,
    ZOOKEEPER_CLIENT,
    KAFKA_BROKER,
    SUPERVISOR,
];

/// First host of a component that must be deployed somewhere
pub fn required_first_host<'a>(placement: &'a ComponentPlacement, component: &str) -> AdvisorResult<&'a str> {
    placement
        .first_host(component)
        .ok_or_else(|| AdvisorError::missing_component(component))
}

/// Check the Metron co-location rules, in rule order
pub fn check_placement(placement: &ComponentPlacement) -> AdvisorResult<Vec<ValidationItem>> {
    let parsers = required_first_host(placement, METRON_PARSERS)?;
    let enrichment = required_first_host(placement, METRON_ENRICHMENT_MASTER)?;
    let indexing = required_first_host(placement, METRON_INDEXING)?;
    let mysql = required_first_host(placement, METRON_ENRICHMENT_MYSQL_SERVER)?;

    let mut items = Vec::new();

    if !placement.runs_on(KAFKA_BROKER, parsers) {
        items.push(ValidationItem::host_component(
            Severity::Error,
            "Metron must be colocated with an instance of KAFKA BROKER",
            METRON_PARSERS,
            parsers,
        ));
    }

    if !placement.runs_on(SUPERVISOR, parsers) {
        items.push(ValidationItem::host_component(
            Severity::Warn,
            "Metron must be colocated with an instance of STORM SUPERVISOR",
            METRON_PARSERS,
            parsers,
        ));
    }

    if enrichment != parsers {
        items.push(ValidationItem::host_component(
            Severity::Error,
            format!("Metron Enrichment Master must be co-located with Metron Parsers on {parsers}"),
            METRON_ENRICHMENT_MASTER,
            enrichment,
        ));
    }

    if indexing != parsers {
        items.push(ValidationItem::host_component(
            Severity::Error,
            format!("Metron Indexing must be co-located with Metron Parsers on {parsers}"),
            METRON_INDEXING,
            indexing,
        ));
    }

    if mysql != parsers {
        items.push(ValidationItem::host_component(
            Severity::Error,
            format!("Metron MySQL Server must be co-located with Metron Parsers on {parsers}"),
            METRON_ENRICHMENT_MYSQL_SERVER,
            mysql,
        ));
    }

    // Enrichment master gets its ZooKeeper and HDFS clients through the parsers host
    if !placement.runs_on(ZOOKEEPER_CLIENT, parsers) {
        items.push(ValidationItem::host_component(
            Severity::Warn,
            "Metron must be co-located with an instance of Zookeeper Client",
            METRON_PARSERS,
            parsers,
        ));
    }

    if !placement.runs_on(HDFS_CLIENT, parsers) {
        items.push(ValidationItem::host_component(
            Severity::Warn,
            "Metron must be co-located with an instance of HDFS Client",
            METRON_PARSERS,
            parsers,
        ));
    }

    if !placement.runs_on(HBASE_CLIENT, enrichment) {
        items.push(ValidationItem::host_component(
            Severity::Warn,
            "Metron Enrichment Master must be co-located with an instance of HBase Client",
            METRON_ENRICHMENT_MASTER,
            enrichment,
        ));
    }

    Ok(items)
}
