//! Service plan rendering

use std::io::{self, Write};

use kube::ResourceExt;

use crate::models::ClusterServicePlan;

use super::table::ListTable;
use super::OutputOptions;

/// Print service plans as list rows.
pub fn write_plan_list(
    out: &mut dyn Write,
    plans: &[ClusterServicePlan],
    opts: &OutputOptions,
) -> io::Result<()> {
    let mut table = ListTable::new(&["NAME", "EXTERNAL NAME", "CLASS", "FREE"]);
    for plan in plans {
        table.add_row(vec![
            plan.name_any(),
            plan.spec.external_name.clone(),
            plan.spec
                .cluster_service_class_ref
                .as_ref()
                .map(|r| r.name.clone())
                .unwrap_or_default(),
            plan.spec.free.map(|free| free.to_string()).unwrap_or_default(),
        ]);
    }
    table.render(out, opts.no_headers)
}
