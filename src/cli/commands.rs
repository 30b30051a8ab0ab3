//! CLI command handlers

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::output::{self, OutputOptions};
use crate::store::CatalogStore;
use crate::traverse;

/// Handle `describe binding`: render the binding's details, then
/// optionally walk the provenance chain behind it, rendering each stage as
/// it resolves. A traversal failure is surfaced after the stages that did
/// resolve have been rendered.
pub async fn describe_binding(
    store: &dyn CatalogStore,
    out: &mut dyn Write,
    opts: &OutputOptions,
    namespace: &str,
    name: &str,
    traverse_chain: bool,
) -> Result<()> {
    let binding = traverse::fetch_binding(store, namespace, name).await?;
    output::write_binding_details(out, &binding)?;

    if !traverse_chain {
        return Ok(());
    }

    debug!(namespace, name, "traversing binding provenance chain");
    let walk = traverse::traverse_binding(store, &binding).await;
    for stage in &walk.stages {
        output::write_stage(out, stage, opts)?;
    }
    if let Some(err) = walk.error {
        return Err(err.into());
    }
    Ok(())
}

/// Handle `binding get`: a plain lookup rendered as a one-row list table.
pub async fn get_binding(
    store: &dyn CatalogStore,
    out: &mut dyn Write,
    opts: &OutputOptions,
    namespace: &str,
    name: &str,
) -> Result<()> {
    let binding = traverse::fetch_binding(store, namespace, name).await?;
    output::write_binding_list(out, std::slice::from_ref(&binding), opts)?;
    Ok(())
}
