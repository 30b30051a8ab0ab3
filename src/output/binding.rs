//! Binding rendering

use std::io::{self, Write};

use kube::ResourceExt;

use crate::models::ServiceBinding;

use super::status::{status_full, status_short};
use super::table::{DetailsTable, ListTable};
use super::OutputOptions;

fn conditions(binding: &ServiceBinding) -> &[crate::models::ServiceCondition] {
    binding
        .status
        .as_ref()
        .map(|s| s.conditions.as_slice())
        .unwrap_or(&[])
}

fn instance_name(binding: &ServiceBinding) -> String {
    binding
        .spec
        .instance_ref
        .as_ref()
        .map(|r| r.name.clone())
        .unwrap_or_default()
}

/// Print bindings as list rows.
pub fn write_binding_list(
    out: &mut dyn Write,
    bindings: &[ServiceBinding],
    opts: &OutputOptions,
) -> io::Result<()> {
    let mut table = ListTable::new(&["NAME", "NAMESPACE", "INSTANCE", "STATUS"]);
    for binding in bindings {
        table.add_row(vec![
            binding.name_any(),
            binding.namespace().unwrap_or_default(),
            instance_name(binding),
            status_short(conditions(binding)),
        ]);
    }
    table.render(out, opts.no_headers)
}

/// Print details for a single binding.
pub fn write_binding_details(out: &mut dyn Write, binding: &ServiceBinding) -> io::Result<()> {
    let mut table = DetailsTable::new();
    table.add("Name", binding.name_any());
    table.add("Namespace", binding.namespace().unwrap_or_default());

    let instance = instance_name(binding);
    table.add(
        "Instance",
        if instance.is_empty() {
            "<none>".to_string()
        } else {
            instance
        },
    );
    table.add(
        "Secret",
        binding
            .spec
            .secret_name
            .clone()
            .unwrap_or_else(|| "<none>".to_string()),
    );

    let status = status_full(conditions(binding));
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
