/// Documentation-text lookup and emission.
use std::io::{self, Write};

/// Fallback line printed when the program carries no documentation text.
pub const NO_HELP_TEXT: &str = "BUG: This program has no help text.";

/// The program's own documentation text, if it has one.
///
/// Sourced from the crate `description` at build time. Cargo defines
/// `CARGO_PKG_DESCRIPTION` as the empty string when the manifest omits a
/// description, which maps to `None` here.
#[must_use]
pub fn doc_text() -> Option<&'static str> {
    let doc = env!("CARGO_PKG_DESCRIPTION");
    if doc.is_empty() { None } else { Some(doc) }
}

/// Write `doc` verbatim, or the fallback line when absent, to `out`,
/// newline-terminated.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print(out: &mut impl Write, doc: Option<&str>) -> io::Result<()> {
    writeln!(out, "{}", doc.unwrap_or(NO_HELP_TEXT))
}
