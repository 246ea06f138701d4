//! Structured error types for syscallfn
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while resolving a syscall's kernel entry-point symbol.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Neither the architecture-qualified nor the legacy entry point exists
    /// in the supplied symbol table. Recoverable: the kernel simply does
    /// not export that syscall, and the caller may skip its probe.
    #[error("no kernel entry point found for syscall '{0}'")]
    SymbolNotFound(String),

    /// The symbol-table source itself could not be read. Never conflated
    /// with [`ResolveError::SymbolNotFound`]: here the table was
    /// unavailable, not the symbol.
    #[error("failed to read kernel symbol table from {path}")]
    SymbolTableUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The search pattern built from the syscall name failed to compile.
    /// Metacharacters are escaped before pattern construction, so this is
    /// only reachable for pathological names (e.g. long enough to exceed
    /// the compiled-pattern size limit).
    #[error("invalid search pattern for syscall '{name}'")]
    BadPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

impl ResolveError {
    /// True for the recoverable "this kernel does not export that syscall"
    /// case, as opposed to a failure to obtain or search the table.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::SymbolNotFound(_))
    }
}

/// Failure to establish the host architecture tag at startup.
///
/// Unrecoverable: without a tag there is no way to build qualified symbol
/// patterns, so callers should abort initialization rather than guess.
#[derive(Error, Debug)]
pub enum ArchError {
    #[error("uname() failed while detecting host architecture")]
    Uname(#[source] io::Error),
}
