use std::sync::Arc;

use chrono::Utc;
use colored::Colorize;

use docledger_ledger::{
    AppendOutcome, ChainAuditor, InMemoryLedger, LedgerReader, LedgerWriter,
};
use docledger_server::{LedgerServer, ServerConfig};
use docledger_types::DocumentEntry;

use crate::cli::{Cli, Command, DemoArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind.parse()?,
    };
    let ledger = Arc::new(InMemoryLedger::new()?);
    let server = LedgerServer::new(config, ledger);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let ledger = InMemoryLedger::new()?;
    let today = Utc::now().format("%Y-%m-%d").to_string();

    for i in 1..=args.count {
        let entry = DocumentEntry::new(format!("D{i}"), format!("user-{i}"), today.clone());
        match ledger.append(entry)? {
            AppendOutcome::Appended(record) => {
                println!(
                    "{} registered {} at position {}",
                    "✓".green().bold(),
                    record.entry.document_id.yellow(),
                    record.position,
                );
            }
            AppendOutcome::Rejected(reason) => {
                println!("{} rejected: {reason}", "✗".red().bold());
            }
        }
    }

    println!();
    for record in ledger.snapshot()? {
        println!(
            "#{} {}  prev {}  {}",
            record.position,
            record.hash.short_hex().yellow(),
            record.predecessor.short_hex().dimmed(),
            if record.entry.is_genesis {
                "genesis".cyan().to_string()
            } else {
                record.entry.document_id.clone()
            },
        );
    }

    let report = ChainAuditor::audit(&ledger)?;
    println!();
    if report.is_valid() {
        println!(
            "{} chain intact: {} records audited",
            "✓".green().bold(),
            report.record_count,
        );
    } else {
        for violation in &report.violations {
            println!(
                "{} position {}: {}",
                "✗".red().bold(),
                violation.position,
                violation.description,
            );
        }
        anyhow::bail!("chain audit failed");
    }
    Ok(())
}
