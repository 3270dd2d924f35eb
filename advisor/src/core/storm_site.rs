//! storm-site requirements: classpath entries and worker slot capacity

use shared::PropertyValue;

use crate::config::DEFAULT_MIN_STORM_SLOTS;

pub const STORM_SITE: &str = "storm-site";
pub const METRON_ENV: &str = "metron-env";

pub const TOPOLOGY_CLASSPATH: &str = "topology.classpath";
pub const SUPERVISOR_SLOTS_PORTS: &str = "supervisor.slots.ports";
pub const UI_PORT: &str = "ui.port";

pub const MYSQL_HOST: &str = "mysql_host";
pub const STORM_REST_ADDR: &str = "storm_rest_addr";

/// Values Metron needs in storm-site
///
/// Colon separated values are path lists: the current value only has to
/// contain every path, not match exactly.
pub const STORM_SITE_DESIRED_VALUES: &[(&str, &str)] =
    &[(TOPOLOGY_CLASSPATH, "/etc/hbase/conf:/etc/hadoop/conf")];

/// Paths of `desired` that do not occur anywhere in `current`
pub fn missing_path_segments<'a>(desired: &'a str, current: &str) -> Vec<&'a str> {
    desired
        .split(':')
        .filter(|path| !path.is_empty() && !current.contains(path))
        .collect()
}

/// Append the paths of `desired` that `current` lacks
///
/// Running the merge on its own output changes nothing.
pub fn merge_classpath(current: &str, desired: &str) -> String {
    let mut merged = current.to_string();
    for path in desired.split(':').filter(|path| !path.is_empty()) {
        if merged.contains(path) {
            continue;
        }
        if !merged.is_empty() {
            merged.push(':');
        }
        merged.push_str(path);
    }
    merged
}

/// Number of worker slots one supervisor offers according to `supervisor.slots.ports`
///
/// A string counts its non-empty comma separated ports, a list counts its
/// entries, any other scalar is one port. Unset means no slots.
pub fn slots_per_supervisor(value: Option<&PropertyValue>) -> usize {
    match value {
        Some(PropertyValue::Text(ports)) => ports
            .trim_matches(|c| c == '[' || c == ']')
            .split(',')
            .filter(|port| !port.trim().is_empty())
            .count(),
        Some(PropertyValue::List(ports)) => ports.len(),
        Some(PropertyValue::Integer(_) | PropertyValue::Other(_)) => 1,
        None => 0,
    }
}

/// Cluster wide Storm worker capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCapacity {
    pub slots_per_supervisor: usize,
    pub supervisors: usize,
}

impl SlotCapacity {
    pub fn new(slots_per_supervisor: usize, supervisors: usize) -> Self {
        Self {
            slots_per_supervisor,
            supervisors,
        }
    }

    pub fn total(&self) -> usize {
        self.slots_per_supervisor.saturating_mul(self.supervisors)
    }

    pub fn is_sufficient(&self, minimum: usize) -> bool {
        self.total() >= minimum
    }

    /// Explanation shown when the cluster provisions too few slots
    ///
    /// The per-topology breakdown only adds up for the default minimum.
    pub fn shortfall_message(&self, minimum: usize) -> String {
        let requirement = if minimum == DEFAULT_MIN_STORM_SLOTS {
            format!(
                "A default install of Metron requires {minimum} Storm slots \
                 (3 parsers, 1 enricher/threat-intel, and 1 indexer/persistence topology)."
            )
        } else {
            format!("This cluster is configured to require {minimum} Storm slots for Metron.")
        };
        format!(
            "{requirement} \
             Additional Metron features, such as Profiling, require additional Storm slots. This property currently specifies only {} \
             slots per supervisor, which, times {} supervisors, provisions {} total slots. Please extend this property so at least {minimum} total slots are provisioned, \
             and be aware if some topologies are not running it may be due to lack of slots to assign them.  Topology slot assignments can be checked at runtime \
             in the Storm UI.",
            self.slots_per_supervisor,
            self.supervisors,
            self.total(),
        )
    }
}
