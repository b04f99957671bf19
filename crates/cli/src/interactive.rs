//! Line-oriented position form.
//!
//! Commands:
//! - `set <field> <value>` edits one field (`set minPrice 1000`)
//! - `scenario <below|above>` switches the exit scenario
//! - `show` prints the current result, `help` lists commands
//! - `quit` / `exit` leaves the loop (so does end of input)
//!
//! The result is re-rendered after every successful edit.

use anyhow::{Context, Result};
use clmm_exit_domain::prelude::*;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  set <field> <value>      e.g. set token0Amount 2991.84266
  scenario <below|above>   switch exit scenario
  show                     print the current result
  help                     show this message
  quit                     leave";

/// Runs the loop until `quit` or end of input, returning the final form.
pub fn run<R: BufRead, W: Write>(
    mut form: PositionForm,
    input: R,
    mut output: W,
) -> Result<PositionForm> {
    render(&form, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((line, ""));
        debug!(command, rest, "Interactive command");

        match command {
            "set" => {
                let (name, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(name, value)| (name, value.trim()))
                    .unwrap_or((rest, ""));
                let updated = form.set_field_by_name(name, value).map(|_| ());
                match updated {
                    Ok(()) => render(&form, &mut output)?,
                    Err(err) => report_error(&mut output, &err.to_string())?,
                }
            }
            "scenario" => match rest.parse::<Scenario>() {
                Ok(scenario) => {
                    form.set_scenario(scenario);
                    render(&form, &mut output)?;
                }
                Err(err) => report_error(&mut output, &err.to_string())?,
            },
            "show" => render(&form, &mut output)?,
            "help" => writeln!(output, "{}", HELP)?,
            "quit" | "exit" => break,
            other => report_error(&mut output, &format!("unknown command '{}'", other))?,
        }
    }

    Ok(form)
}

fn render<W: Write>(form: &PositionForm, output: &mut W) -> Result<()> {
    let report = ValuationReport::new(form.scenario(), form.result(), form.snapshot());
    writeln!(output, "{}\n", report)?;
    Ok(())
}

fn report_error<W: Write>(output: &mut W, message: &str) -> Result<()> {
    warn!("{}", message);
    writeln!(output, "error: {}", message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (PositionForm, String) {
        let mut output = Vec::new();
        let form = run(PositionForm::default(), Cursor::new(script), &mut output).unwrap();
        (form, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_edits_recompute() {
        let script = "\
set token0Amount 1000
set token1Amount 0.5
set minPrice 1000
set maxPrice 3000
set currentPrice 2000
set uncollectedToken0 10
set uncollectedToken1 0.05
";
        let (form, output) = run_script(script);

        assert_eq!(form.revision(), 7);
        assert!((form.result().total_value_usd - 3110.0).abs() < 1e-9);
        assert!(output.contains("Total WETH: 1.55000000 WETH"));
        assert!(output.contains("Estimated Total Value: $3110.00 USD"));
    }

    #[test]
    fn test_scenario_switch_and_quit() {
        let script = "set token1Amount 0.5\nset max_price 3000\nscenario above\nquit\nset token0Amount 5\n";
        let (form, output) = run_script(script);

        assert_eq!(form.scenario(), Scenario::Above);
        assert_eq!(form.result().total_token0, 1500.0);
        // Nothing after quit is applied.
        assert_eq!(form.snapshot().token0_amount, 0.0);
        assert!(output.contains("Scenario: Price Above Range"));
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let script = "set liquidity 5\nscenario sideways\nfrobnicate\nset token1Symbol SOL\n";
        let (form, output) = run_script(script);

        assert!(output.contains("error: unknown field 'liquidity'"));
        assert!(output.contains("error: unknown scenario 'sideways'"));
        assert!(output.contains("error: unknown command 'frobnicate'"));
        assert_eq!(form.result().token1_symbol, "SOL");
        assert_eq!(form.revision(), 1);
    }

    #[test]
    fn test_lenient_numeric_input() {
        let (form, _) = run_script("set token0Amount 12.5abc\nset minPrice\n");

        assert_eq!(form.snapshot().token0_amount, 12.5);
        assert_eq!(form.snapshot().min_price, 0.0);
    }

    #[test]
    fn test_blank_lines_and_help() {
        let (form, output) = run_script("\n   \nhelp\nshow\n");

        assert_eq!(form.revision(), 0);
        assert!(output.contains("scenario <below|above>"));
        // Initial render plus `show`.
        assert_eq!(output.matches("Scenario: Price Below Range").count(), 2);
    }
}
