//! AADist computes positional amino acid distributions of sequence
//! files such as antibody CDR loops.
//!
//! Input is plain text with one sequence per line. For each file the
//! tally records how many sequences have each length and, per
//! (length, position), how often each amino acid occurs; the report
//! prints those counts with their percentages. Files are processed one
//! at a time, each with fresh counters.
//!
//! # Example
//!
//! ```
//! use aadist::report::write_report;
//! use aadist::SeqDistribution;
//!
//! let dist = SeqDistribution::from_bytes(b"AC\nAC\nAD\n");
//! let mut out = Vec::new();
//! write_report(&mut out, "CDR1", &dist).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Total records: 3"));
//! ```

pub mod alphabet;
pub mod distribution;
pub mod input;
pub mod report;

pub use distribution::SeqDistribution;

#[cfg(test)]
mod tests
{
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use std::path::Path;

    fn report_for(dist: &SeqDistribution) -> String
    {
        let mut out = Vec::new();
        report::write_report(&mut out, "CDR1", dist).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_gzip_input_matches_plain_input()
    {
        let data = b"ACDY\nGHIK\nWAY*\n\nAC\n";

        let plain = Path::new("test_lib_plain.txt");
        std::fs::write(plain, data).unwrap();

        let gz = Path::new("test_lib_gzip.txt.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        std::fs::write(gz, encoder.finish().unwrap()).unwrap();

        let from_plain = SeqDistribution::from_path(plain).unwrap();
        let from_gz = SeqDistribution::from_path(gz).unwrap();
        assert_eq!(report_for(&from_plain), report_for(&from_gz));
        assert_eq!(from_gz.total_records(), 4);

        std::fs::remove_file(plain).unwrap();
        std::fs::remove_file(gz).unwrap();
    }
}
