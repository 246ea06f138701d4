//! Kernel symbol-table acquisition.
//!
//! The resolver itself never performs I/O; this module is the collaborator
//! that fetches the raw symbol listing. Failures here carry the offending
//! path and the underlying I/O error, and are never conflated with a
//! symbol that is simply absent from the table.

use std::fs;
use std::path::Path;

use crate::domain::ResolveError;

/// Well-known location of the kernel's exported symbol listing.
pub const KALLSYMS_PATH: &str = "/proc/kallsyms";

/// Read the live kernel symbol table.
///
/// # Errors
/// Returns [`ResolveError::SymbolTableUnreadable`] if `/proc/kallsyms`
/// cannot be read (procfs not mounted, restrictive mount options).
pub fn read() -> Result<String, ResolveError> {
    read_from(KALLSYMS_PATH)
}

/// Read symbol-table text from an alternate location, e.g. a captured
/// table or a test fixture.
///
/// # Errors
/// Returns [`ResolveError::SymbolTableUnreadable`] if the file cannot be
/// read.
pub fn read_from<P: AsRef<Path>>(path: P) -> Result<String, ResolveError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ResolveError::SymbolTableUnreadable {
        path: path.to_path_buf(),
        source,
    })
}
