//! Conformance runner for the syscall shim.
//!
//! Each check chains real operations through `usyscall`/`ustd` and
//! verifies the actual outcome — descriptor round trips, byte-for-byte
//! read-back, wait statuses — against whatever kernel this binary runs on.
//! Output is bracketed with group banners so kernel-test harnesses can
//! scrape it.

mod checks;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use checks::all_checks;

#[derive(Parser)]
#[command(name = "conformance")]
#[command(about = "Syscall shim conformance checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run checks, optionally restricted to one category
    Run {
        /// Category to run (fs, process, time, mm)
        #[arg(long)]
        category: Option<String>,
    },
    /// List known checks
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Commands::List => {
            for check in all_checks() {
                println!("{:<10} {:<28} {}", check.category, check.name, check.ensures);
            }
            ExitCode::SUCCESS
        }
        Commands::Run { category } => run(category.as_deref()),
    }
}

fn run(category: Option<&str>) -> ExitCode {
    let checks: Vec<_> = all_checks()
        .into_iter()
        .filter(|c| category.is_none_or(|want| c.category == want))
        .collect();
    if checks.is_empty() {
        eprintln!("no checks match category {category:?}");
        return ExitCode::FAILURE;
    }

    let label = category.unwrap_or("all");
    println!("#### TEST GROUP START {label} ####");
    let mut failed = 0usize;
    for check in &checks {
        match (check.run)() {
            Ok(()) => println!("testcase {} {} success", check.category, check.name),
            Err(e) => {
                failed += 1;
                println!("testcase {} {} fail: {e:#}", check.category, check.name);
            }
        }
    }
    println!("#### TEST GROUP END {label} ####");
    println!("{} passed, {} failed", checks.len() - failed, failed);

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
