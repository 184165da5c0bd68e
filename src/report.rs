//! Report rendering for a tallied distribution.
//!
//! The layout follows the original console tool line for line:
//!
//! ```text
//! Results for CDR1:
//! Total records: 3
//! Length 2: 3 (100.0000%) records
//!   Position 1: A(100.0000%)
//!   Position 2: C(66.6667%) D(33.3333%)
//! ```
//!
//! Lengths ascending with nonzero counts only, positions 1-indexed,
//! amino acids in alphabet order with their share of the records at
//! that length, percentages to four decimal places. A position's
//! percentages sum below 100% when bytes outside the alphabet occurred
//! there. Each report ends with a blank line.

use crate::alphabet::{AMINO_ACID_LIST, AMINO_ACIDS};
use crate::distribution::{SeqDistribution, MAX_LENGTH};
use std::io::{self, Write};

/// Write the report for one input to `writer`.
///
/// # Arguments
///
/// * `writer` - Destination, e.g. stdout or an in-memory buffer
/// * `label` - Display name of the input (e.g. "CDR1"); the report is
///   agnostic to where the label came from
/// * `dist` - The completed tally for that input
pub fn write_report<W: Write>(
    writer: &mut W,
    label: &str,
    dist: &SeqDistribution,
) -> io::Result<()>
{
    writeln!(writer, "Results for {}:", label)?;
    let total_records = dist.total_records();
    writeln!(writer, "Total records: {}", total_records)?;

    for len in 1..=MAX_LENGTH
    {
        let length_count = dist.length_count(len);
        if length_count == 0
        {
            continue;
        }
        writeln!(
            writer,
            "Length {}: {} ({:.4}%) records",
            len,
            length_count,
            100.0 * length_count as f64 / total_records as f64
        )?;
        for pos in 0..len
        {
            write!(writer, "  Position {}: ", pos + 1)?;
            let counts = dist.position_counts(len, pos);
            for aa in 0..AMINO_ACIDS
            {
                if counts[aa] > 0
                {
                    write!(
                        writer,
                        "{}({:.4}%) ",
                        AMINO_ACID_LIST[aa] as char,
                        100.0 * counts[aa] as f64 / length_count as f64
                    )?;
                }
            }
            writeln!(writer)?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn render(label: &str, data: &[u8]) -> String
    {
        let dist = SeqDistribution::from_bytes(data);
        let mut out = Vec::new();
        write_report(&mut out, label, &dist).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exact_report()
    {
        let expected = "Results for CDR1:\n\
                        Total records: 3\n\
                        Length 2: 3 (100.0000%) records\n\
                        \x20 Position 1: A(100.0000%) \n\
                        \x20 Position 2: C(66.6667%) D(33.3333%) \n\
                        \n";
        assert_eq!(render("CDR1", b"AC\nAC\nAD\n"), expected);
    }

    #[test]
    fn test_empty_input_reports_zero_records()
    {
        assert_eq!(render("CDR2", b""), "Results for CDR2:\nTotal records: 0\n\n");
    }

    #[test]
    fn test_empty_lines_do_not_appear()
    {
        // same report as test_exact_report despite the blank lines
        let with_blanks = render("CDR1", b"\nAC\n\nAC\nAD\n\n");
        let without = render("CDR1", b"AC\nAC\nAD\n");
        assert_eq!(with_blanks, without);
        assert!(with_blanks.contains("Total records: 3\n"));
    }

    #[test]
    fn test_lengths_ascending_with_percent_of_total()
    {
        let out = render("CDR3", b"ACD\nAC\nACD\nACDE\n");
        let len2 = out.find("Length 2: 1 (25.0000%) records").unwrap();
        let len3 = out.find("Length 3: 2 (50.0000%) records").unwrap();
        let len4 = out.find("Length 4: 1 (25.0000%) records").unwrap();
        assert!(len2 < len3 && len3 < len4);
    }

    #[test]
    fn test_unknown_byte_position_sums_below_full()
    {
        let out = render("CDR1", b"A*\nAC\n");
        assert!(out.contains("  Position 1: A(100.0000%) \n"));
        // '*' is not bucketed, so only C's half shows at position 2
        assert!(out.contains("  Position 2: C(50.0000%) \n"));
    }

    #[test]
    fn test_amino_acids_in_alphabet_order()
    {
        // Y comes before X in the fixed order, unlike in ASCII
        let out = render("CDR1", b"Y\nX\nA\n");
        let pos_line = out
            .lines()
            .find(|line| line.starts_with("  Position 1:"))
            .unwrap();
        assert_eq!(
            pos_line,
            "  Position 1: A(33.3333%) Y(33.3333%) X(33.3333%) "
        );
    }

    #[test]
    fn test_idempotent_rendering()
    {
        let data = b"ACDY\nGHIK\nWAY*\nAC\n";
        assert_eq!(render("CDR4", data), render("CDR4", data));
    }
}
