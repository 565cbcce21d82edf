use clap::Args;
use rust_decimal::Decimal;
use std::str::FromStr;

use pixell_mortgage_core::Mortgage;

use crate::input;

/// Printed before the first record and after every record's output.
const DELIMITER: &str = "**************************************************";

#[derive(Args)]
pub struct ProcessArgs {
    /// Records file (comma-separated: amount,rate,amortization,frequency);
    /// reads piped stdin when omitted
    pub file: Option<String>,
}

/// Batch-validate a records file, printing each mortgage's statement or
/// the error the record caused. Per-record failures are reported and
/// skipped; only a missing source aborts the batch.
pub fn run_process(args: ProcessArgs) -> Result<(), Box<dyn std::error::Error>> {
    let lines = if let Some(ref path) = args.file {
        input::records::read_file(path)?
    } else if let Some(lines) = input::records::read_stdin()? {
        lines
    } else {
        return Err("FILE argument or piped stdin required to process records".into());
    };

    println!("{DELIMITER}");

    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        match parse_record(line) {
            Ok(mortgage) => println!("{mortgage}"),
            Err(reason) => println!("Data: {} caused Exception: {}", line.trim(), reason),
        }
        println!("{DELIMITER}");
    }

    Ok(())
}

/// Split one raw record, convert its numeric fields and construct the
/// mortgage. Conversion failures and domain validation errors both come
/// back as the message to report alongside the record.
fn parse_record(line: &str) -> Result<Mortgage, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(format!("expected 4 fields, found {}", fields.len()));
    }

    let amount = Decimal::from_str(fields[0])
        .map_err(|e| format!("invalid loan amount '{}': {e}", fields[0]))?;
    let amortization: u32 = fields[2]
        .parse()
        .map_err(|e| format!("invalid amortization '{}': {e}", fields[2]))?;

    Mortgage::new(amount, fields[1], fields[3], amortization).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_valid_record() {
        let mortgage = parse_record("682912.43, FIXED_5, 30, MONTHLY").unwrap();
        assert_eq!(mortgage.loan_amount(), dec!(682912.43));
        assert_eq!(mortgage.amortization(), 30);
    }

    #[test]
    fn test_parse_short_record() {
        let err = parse_record("682912.43, FIXED_5, 30").unwrap_err();
        assert_eq!(err, "expected 4 fields, found 3");
    }

    #[test]
    fn test_parse_malformed_amount() {
        let err = parse_record("abc, FIXED_5, 30, MONTHLY").unwrap_err();
        assert!(err.starts_with("invalid loan amount 'abc'"));
    }

    #[test]
    fn test_parse_malformed_amortization() {
        let err = parse_record("100000, FIXED_5, ten, MONTHLY").unwrap_err();
        assert!(err.starts_with("invalid amortization 'ten'"));
    }

    #[test]
    fn test_domain_error_message_passes_through() {
        let err = parse_record("100000, FIXED_9, 30, MONTHLY").unwrap_err();
        assert_eq!(err, "Rate provided is invalid.");
    }
}
