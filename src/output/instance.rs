//! Instance rendering

use std::io::{self, Write};

use kube::ResourceExt;

use crate::models::ServiceInstance;

use super::status::status_short;
use super::table::ListTable;
use super::OutputOptions;

/// Print instances as list rows.
pub fn write_instance_list(
    out: &mut dyn Write,
    instances: &[ServiceInstance],
    opts: &OutputOptions,
) -> io::Result<()> {
    let mut table = ListTable::new(&["NAME", "NAMESPACE", "CLASS", "PLAN", "STATUS"]);
    for instance in instances {
        let conditions = instance
            .status
            .as_ref()
            .map(|s| s.conditions.as_slice())
            .unwrap_or(&[]);
        table.add_row(vec![
            instance.name_any(),
            instance.namespace().unwrap_or_default(),
            instance
                .spec
                .class_address()
                .map(|a| a.name().to_string())
                .unwrap_or_default(),
            instance
                .spec
                .plan_address()
                .map(|a| a.name().to_string())
                .unwrap_or_default(),
            status_short(conditions),
        ]);
    }
    table.render(out, opts.no_headers)
}
