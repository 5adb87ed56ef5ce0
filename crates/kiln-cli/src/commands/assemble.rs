//! `kiln assemble`

use anyhow::Result;
use clap::{Args, ValueEnum};
use kiln_composition::Director;
use kiln_products::{DigitAssembler, ManifestAssembler, SumAssembler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AssemblerKind {
    /// Concatenate step ordinals
    Digits,
    /// Add step ordinals
    Sum,
    /// Structured record of every step
    Manifest,
}

#[derive(Args, Debug)]
pub struct AssembleArgs {
    /// Assembler to drive
    #[arg(value_enum)]
    pub kind: AssemblerKind,
}

pub fn run(args: AssembleArgs) -> Result<String> {
    let director = Director::new();
    let output = match args.kind {
        AssemblerKind::Digits => director.build(DigitAssembler::default())?,
        AssemblerKind::Sum => director.build(SumAssembler::default())?.to_string(),
        AssemblerKind::Manifest => {
            let manifest = director.build(ManifestAssembler::default())?;
            serde_json::to_string_pretty(&manifest)?
        }
    };
    Ok(output)
}
