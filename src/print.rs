//! Rendering of integer arrays as a single line of text.
//!
//! Items are written in decimal and separated by `", "`.
//! There is no separator after the last item.

use itertools::Itertools;
use std::io::{self, Write};

/// Returns the rendering of an array without a line terminator.
///
/// ```
/// # use lomuto::print::format_array;
/// assert_eq!(format_array(&[64, -34, 25]), "64, -34, 25");
/// assert_eq!(format_array(&[]), "");
/// ```
pub fn format_array(arr: &[i32]) -> String {
    arr.iter().join(", ")
}

/// Writes the rendering of an array followed by a line terminator.
pub fn write_array<W: Write>(out: &mut W, arr: &[i32]) -> io::Result<()> {
    writeln!(out, "{}", format_array(arr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_array_single() {
        assert_eq!(format_array(&[7]), "7");
    }

    #[test]
    fn test_format_array_extremes() {
        assert_eq!(
            format_array(&[i32::MIN, 0, i32::MAX]),
            "-2147483648, 0, 2147483647"
        );
    }

    #[test]
    fn test_write_array() {
        let mut out = Vec::new();
        write_array(&mut out, &[11, 12, 22]).unwrap();
        assert_eq!(out, b"11, 12, 22\n");
    }

    #[test]
    fn test_write_array_empty() {
        let mut out = Vec::new();
        write_array(&mut out, &[]).unwrap();
        assert_eq!(out, b"\n");
    }
}
