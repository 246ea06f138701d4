//! # syscallfn - Main Entry Point
//!
//! Resolves each requested syscall name against the kernel symbol table and
//! prints the qualified entry-point symbol, one per line. Names the kernel
//! does not export are reported as warnings and the process exits nonzero;
//! a symbol table that cannot be read at all aborts the run.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use syscallfn::arch;
use syscallfn::cli::Args;
use syscallfn::kallsyms;
use syscallfn::resolver;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

/// One requested syscall and its resolution outcome.
#[derive(Serialize)]
struct Resolution {
    syscall: String,
    symbol: Option<String>,
}

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_ERROR
        }
    });
}

fn run() -> Result<i32> {
    let args = Args::parse();

    let tag = match args.arch {
        Some(tag) => tag,
        None => arch::detect().context("cannot establish host architecture")?,
    };
    info!("using architecture tag '{tag}'");

    let syms = kallsyms::read_from(&args.kallsyms)
        .with_context(|| format!("cannot load symbol table from {}", args.kallsyms.display()))?;

    let mut failed = 0usize;
    let mut results = Vec::with_capacity(args.syscalls.len());
    for name in &args.syscalls {
        match resolver::resolve_in(name, &syms, tag) {
            Ok(symbol) => {
                results.push(Resolution { syscall: name.clone(), symbol: Some(symbol) });
            }
            Err(e) if e.is_not_found() => {
                if !args.quiet {
                    eprintln!("warning: {e}");
                }
                failed += 1;
                results.push(Resolution { syscall: name.clone(), symbol: None });
            }
            Err(e) => return Err(e).with_context(|| format!("failed to resolve '{name}'")),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for r in &results {
            if let Some(symbol) = &r.symbol {
                println!("{}\t{symbol}", r.syscall);
            }
        }
    }

    Ok(if failed == 0 { EXIT_SUCCESS } else { EXIT_ERROR })
}
