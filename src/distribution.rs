//! Per-file sequence length and positional amino acid tallies.
//!
//! One `SeqDistribution` covers one input file: how many sequences have
//! each length, and for every (length, position) pair how often each
//! amino acid occurs there. Counters are fixed-capacity arrays sized to
//! [`MAX_LENGTH`] and the alphabet; the length is bounds-checked before
//! any indexing, so over-long lines are skipped whole instead of
//! overflowing a bucket.

use crate::alphabet::{aa_index, AMINO_ACIDS};
use std::io::{self, BufRead};
use std::path::Path;

/// Longest sequence that is tallied. Lines longer than this are
/// skipped entirely: not counted, not an error.
pub const MAX_LENGTH: usize = 70;

/// Expected upper bound on the raw line length, terminator included.
///
/// Used to pre-size the read buffer. Lines may exceed it; they are
/// read in full and then skipped by the [`MAX_LENGTH`] rule, never
/// split or truncated.
pub const MAX_LINE: usize = 128;

/// Distribution of sequence lengths and per-position amino acid counts
/// for a single input.
///
/// # Example
///
/// ```
/// use aadist::distribution::SeqDistribution;
///
/// let dist = SeqDistribution::from_bytes(b"AC\nAC\nAD\n");
/// assert_eq!(dist.total_records(), 3);
/// assert_eq!(dist.length_count(2), 3);
/// assert_eq!(dist.position_counts(2, 0)[0], 3); // 'A' at position 1
/// ```
pub struct SeqDistribution
{
    /// Sequences seen per length, index 0..=MAX_LENGTH.
    ///
    /// Index 0 is incremented by empty lines but excluded from
    /// `total_records` and from reports, matching the original tool.
    length_counts: [u64; MAX_LENGTH + 1],
    /// length -> position (0-based) -> alphabet index -> count.
    positions: Box<[[[u64; AMINO_ACIDS]; MAX_LENGTH]]>,
}

impl Default for SeqDistribution
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl SeqDistribution
{
    /// Create an empty distribution with all counters at zero.
    pub fn new() -> Self
    {
        Self {
            length_counts: [0; MAX_LENGTH + 1],
            positions: vec![[[0; AMINO_ACIDS]; MAX_LENGTH]; MAX_LENGTH + 1].into_boxed_slice(),
        }
    }

    /// Tally one sequence, already stripped of line terminators.
    ///
    /// A sequence longer than [`MAX_LENGTH`] is ignored completely. An
    /// empty sequence increments the length-0 bucket and nothing else.
    /// Bytes outside the alphabet count toward the sequence length but
    /// not toward any positional bucket.
    pub fn add_sequence(&mut self, seq: &[u8])
    {
        let length = seq.len();
        if length > MAX_LENGTH
        {
            return;
        }

        self.length_counts[length] += 1;
        for (pos, &byte) in seq.iter().enumerate()
        {
            if let Some(idx) = aa_index(byte)
            {
                self.positions[length][pos][idx] += 1;
            }
        }
    }

    /// Build a distribution from line-delimited sequence text.
    ///
    /// Lines end with `\n` or `\r\n`; terminators are stripped before
    /// tallying. A final line without a terminator still counts.
    ///
    /// # Arguments
    ///
    /// * `reader` - A buffered reader over the sequence text
    ///
    /// # Returns
    ///
    /// * `Ok(SeqDistribution)` - The completed tally
    /// * `Err(io::Error)` - If the reader fails mid-stream
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self>
    {
        let mut dist = Self::new();
        let mut line: Vec<u8> = Vec::with_capacity(MAX_LINE);
        loop
        {
            line.clear();
            match reader.read_until(b'\n', &mut line)
            {
                Err(e) => return Err(e),
                Ok(0) => return Ok(dist),
                Ok(_some) => dist.add_sequence(rstrip_terminator(&line)),
            }
        }
    }

    /// Build a distribution from an in-memory buffer of sequence text.
    pub fn from_bytes(data: &[u8]) -> Self
    {
        let mut dist = Self::new();
        let mut line_start = 0;
        memchr::memchr_iter(b'\n', data).for_each(|line_end| {
            dist.add_sequence(rstrip_terminator(&data[line_start..line_end]));
            line_start = line_end + 1; // skip '\n'
        });
        if line_start < data.len()
        {
            dist.add_sequence(rstrip_terminator(&data[line_start..]));
        }
        dist
    }

    /// Build a distribution from a file path.
    ///
    /// Plain text, gzip-compressed and (with the `url` feature) remote
    /// sources are all accepted; see [`crate::input::reader_from_path`].
    pub fn from_path(path: &Path) -> io::Result<Self>
    {
        Self::from_reader(crate::input::reader_from_path(path)?)
    }

    /// Number of tallied sequences, summed over lengths 1..=MAX_LENGTH.
    ///
    /// Empty lines (length 0) are not part of this total.
    pub fn total_records(&self) -> u64
    {
        self.length_counts[1..].iter().sum()
    }

    /// Count of sequences with the given length.
    ///
    /// # Panics
    ///
    /// Panics if `length > MAX_LENGTH`.
    pub fn length_count(&self, length: usize) -> u64
    {
        self.length_counts[length]
    }

    /// Per-amino-acid counts at a position (0-based) of sequences with
    /// the given length, in alphabet order.
    ///
    /// # Panics
    ///
    /// Panics if `length > MAX_LENGTH` or `position >= MAX_LENGTH`.
    pub fn position_counts(&self, length: usize, position: usize) -> &[u64; AMINO_ACIDS]
    {
        &self.positions[length][position]
    }
}

/// Strip a trailing `\n` or `\r\n` from a line.
fn rstrip_terminator(line: &[u8]) -> &[u8]
{
    let line = match line.last()
    {
        Some(b'\n') => &line[..line.len() - 1],
        _ => line,
    };
    match line.last()
    {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}
