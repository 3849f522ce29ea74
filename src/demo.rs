//! The report printed by the `lomuto` binary.
//!
//! ```
//! # use lomuto::ctx::Context;
//! # use lomuto::demo::run;
//! let mut out = Vec::new();
//! run(&mut out, &Context::default()).unwrap();
//! assert!(out.ends_with(b"\nSorting completed successfully!\n"));
//! ```

use crate::ctx::Context;
use crate::data::DEMO_DATA;
use crate::print::write_array;
use crate::sort::sort;
use std::io::{self, Write};

/// Sorts [`DEMO_DATA`] and writes the report to `out`.
///
/// The report consists of a header, the array before and after sorting, and a completion message.
/// It is the same for every strategy of `ctx`.
pub fn run<W: Write>(out: &mut W, ctx: &Context) -> io::Result<()> {
    let mut data = DEMO_DATA;

    writeln!(out, "ARM Cross-Compilation Sorting Demo")?;
    writeln!(out, "Algorithm: Quicksort")?;
    writeln!(out, "Array size: {}", data.len())?;
    writeln!(out)?;

    write!(out, "Original array: ")?;
    write_array(out, &data)?;

    log::info!("sorting {} items ...", data.len());
    sort(&mut data, ctx);

    write!(out, "Sorted array:   ")?;
    write_array(out, &data)?;

    writeln!(out)?;
    writeln!(out, "Sorting completed successfully!")?;

    Ok(())
}
