//! `kiln persist`

use anyhow::Result;
use clap::Args;
use kiln_composition::catalog::Catalog;
use kiln_core::MainRecord;

#[derive(Args, Debug)]
pub struct PersistArgs {
    /// Storage family; defaults to the configured one
    #[arg(long)]
    pub family: Option<String>,
    /// Record id
    pub id: String,
    /// Customer name
    pub customer: String,
}

pub fn run(args: PersistArgs, catalog: &Catalog) -> Result<String> {
    let family = args.family.as_deref().unwrap_or(&catalog.family);
    let daos = catalog.families.open(family)?;
    let receipt = daos.main().save(&MainRecord::new(args.id, args.customer))?;
    Ok(format!("[{}] {}", receipt.backend, receipt.rendered))
}
