//! Broker rendering

use std::io::{self, Write};

use kube::ResourceExt;

use crate::models::{ClusterServiceBroker, ServiceCondition};

use super::status::{status_full, status_short};
use super::table::{DetailsTable, ListTable};
use super::OutputOptions;

fn conditions(broker: &ClusterServiceBroker) -> &[ServiceCondition] {
    broker
        .status
        .as_ref()
        .map(|s| s.conditions.as_slice())
        .unwrap_or(&[])
}

/// Print brokers as list rows.
pub fn write_broker_list(
    out: &mut dyn Write,
    brokers: &[ClusterServiceBroker],
    opts: &OutputOptions,
) -> io::Result<()> {
    let mut table = ListTable::new(&["NAME", "URL", "STATUS"]);
    for broker in brokers {
        table.add_row(vec![
            broker.name_any(),
            broker.spec.url.clone(),
            status_short(conditions(broker)),
        ]);
    }
    table.render(out, opts.no_headers)
}

/// Print details for a single broker.
pub fn write_broker_details(out: &mut dyn Write, broker: &ClusterServiceBroker) -> io::Result<()> {
    let mut table = DetailsTable::new();
    table.add("Name", broker.name_any());
    table.add("URL", broker.spec.url.clone());

    let status = status_full(conditions(broker));
    table.add(
        "Status",
        if status.is_empty() {
            "<none>".to_string()
        } else {
            status
        },
    );
    table.render(out)
}
