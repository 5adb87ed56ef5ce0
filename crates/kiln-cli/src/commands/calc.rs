//! `kiln calc`

use anyhow::Result;
use clap::Args;
use kiln_composition::catalog::Catalog;
use kiln_core::Factory;

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Operation discriminator (plus, minus, multiply)
    pub op: String,
    /// First operand
    #[arg(allow_hyphen_values = true)]
    pub a: f64,
    /// Second operand
    #[arg(allow_hyphen_values = true)]
    pub b: f64,
}

pub fn run(args: CalcArgs, catalog: &Catalog) -> Result<String> {
    let pool = catalog.pooled_operator(&args.op)?;
    let mut op = pool.create()?;
    op.set_operand_a(args.a);
    op.set_operand_b(args.b);
    let line = format!("{} {} {} = {}", args.a, op.kind(), args.b, op.result());
    pool.release(op);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::KilnConfig;

    fn args(op: &str, a: f64, b: f64) -> CalcArgs {
        CalcArgs {
            op: op.into(),
            a,
            b,
        }
    }

    #[test]
    fn test_calc() {
        let catalog = Catalog::from_config(&KilnConfig::default()).unwrap();
        assert_eq!(run(args("plus", 5.0, 3.0), &catalog).unwrap(), "5 plus 3 = 8");
        assert_eq!(run(args("multiply", 5.0, 3.0), &catalog).unwrap(), "5 multiply 3 = 15");
    }

    #[test]
    fn test_calc_through_smallest_pool() {
        let mut config = KilnConfig::default();
        config.pool.max_idle = 1;
        let catalog = Catalog::from_config(&config).unwrap();
        assert_eq!(run(args("minus", 5.0, 3.0), &catalog).unwrap(), "5 minus 3 = 2");
        assert_eq!(run(args("minus", -1.0, 1.0), &catalog).unwrap(), "-1 minus 1 = -2");
    }

    #[test]
    fn test_operator_not_configured() {
        let mut config = KilnConfig::default();
        config.registry.operators = vec!["plus".into(), "minus".into()];
        let catalog = Catalog::from_config(&config).unwrap();
        let err = run(args("multiply", 5.0, 3.0), &catalog).unwrap_err();
        assert_eq!(err.to_string(), "Unknown variant 'multiply'");
    }
}
