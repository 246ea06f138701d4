//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

use crate::domain::ArchTag;
use crate::kallsyms;

#[derive(Parser)]
#[command(
    name = "syscallfn",
    about = "Resolve kernel entry-point symbols for syscalls",
    after_help = "\
EXAMPLES:
    syscallfn open                           Resolve one syscall
    syscallfn open execve clone              Resolve a batch
    syscallfn --json open execve             Machine-readable output
    syscallfn --arch ia32 --kallsyms dump open
                                             Resolve against a captured table"
)]
pub struct Args {
    /// Syscall names to resolve (bare names, e.g. "open")
    #[arg(value_name = "SYSCALL", required = true)]
    pub syscalls: Vec<String>,

    /// Read the symbol table from this file instead of the live kernel's
    #[arg(long, value_name = "FILE", default_value = kallsyms::KALLSYMS_PATH)]
    pub kallsyms: PathBuf,

    /// Override the detected architecture tag (x64 or ia32)
    #[arg(long, value_name = "TAG")]
    pub arch: Option<ArchTag>,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Suppress warnings for syscalls that fail to resolve
    #[arg(short, long)]
    pub quiet: bool,
}
