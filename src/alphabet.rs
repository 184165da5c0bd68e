//! The amino acid alphabet and its byte-to-index lookup.
//!
//! Twenty standard amino acids plus the wildcard 'X', in a fixed order.
//! Every recognized symbol has a stable index into that order; all other
//! bytes have none and are ignored by the tally.

/// Number of recognized amino acid symbols (20 standard + 'X').
pub const AMINO_ACIDS: usize = 21;

/// Amino acid symbols in their fixed reporting order.
pub const AMINO_ACID_LIST: [u8; AMINO_ACIDS] = [
    b'A', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'K', b'L',
    b'M', b'N', b'P', b'Q', b'R', b'S', b'T', b'V', b'W', b'Y', b'X',
];

/// Sentinel for bytes outside the alphabet.
const INVALID: u8 = u8::MAX;

/// Byte value to alphabet index, built once at compile time.
const AA_INDEX: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < AMINO_ACIDS
    {
        table[AMINO_ACID_LIST[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Look up the alphabet index of a byte.
///
/// Matching is case-sensitive and exact. Bytes outside the alphabet
/// return `None` so callers can skip them without error.
///
/// # Example
///
/// ```
/// use aadist::alphabet::aa_index;
///
/// assert_eq!(aa_index(b'A'), Some(0));
/// assert_eq!(aa_index(b'X'), Some(20));
/// assert_eq!(aa_index(b'*'), None);
/// ```
#[inline]
pub fn aa_index(byte: u8) -> Option<usize>
{
    match AA_INDEX[byte as usize]
    {
        INVALID => None,
        idx => Some(idx as usize),
    }
}
