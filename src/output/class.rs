//! Service class rendering

use std::io::{self, Write};

use kube::ResourceExt;

use crate::models::ClusterServiceClass;

use super::table::ListTable;
use super::OutputOptions;

/// Print service classes as list rows.
pub fn write_class_list(
    out: &mut dyn Write,
    classes: &[ClusterServiceClass],
    opts: &OutputOptions,
) -> io::Result<()> {
    let mut table = ListTable::new(&["NAME", "EXTERNAL NAME", "BROKER", "DESCRIPTION"]);
    for class in classes {
        table.add_row(vec![
            class.name_any(),
            class.spec.external_name.clone(),
            class.spec.cluster_service_broker_name.clone(),
            class.spec.description.clone().unwrap_or_default(),
        ]);
    }
    table.render(out, opts.no_headers)
}
