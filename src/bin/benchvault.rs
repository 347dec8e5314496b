use std::io::Write;
use std::{env, fs, process};

use tracing_subscriber::EnvFilter;

use benchvault::{
    AcceptAllVerifier, BenchService, BenchVaultError, GateConfig, GateOutcome, RegressionGate,
    SqliteRunStore, cli::CommandLineConfig,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("benchvault=info".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = match open_store(&config) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let secret = env::var("BENCHVAULT_SECRET").unwrap_or_default();
    let service = BenchService::new(store, AcceptAllVerifier, secret);
    if let Err(err) = run_command(&service, &config) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn open_store(config: &CommandLineConfig) -> Result<SqliteRunStore, BenchVaultError> {
    if config.database == "memory" {
        SqliteRunStore::open_in_memory()
    } else {
        SqliteRunStore::open(&config.database)
    }
}

fn run_command(
    service: &BenchService<SqliteRunStore, AcceptAllVerifier>,
    config: &CommandLineConfig,
) -> Result<(), BenchVaultError> {
    match config.command.as_str() {
        "upload" => {
            let path = config
                .file
                .as_deref()
                .ok_or_else(|| BenchVaultError::invalid_input("upload requires --file"))?;
            let commit = config
                .commit
                .as_deref()
                .ok_or_else(|| BenchVaultError::invalid_input("upload requires --commit"))?;
            let content = fs::read_to_string(path)
                .map_err(|e| BenchVaultError::invalid_input(format!("read {path}: {e}")))?;
            let id = service.upload(&content, &config.signature, commit)?;
            println!("{id}");
            Ok(())
        }
        "show" => {
            let id = config
                .id
                .ok_or_else(|| BenchVaultError::invalid_input("show requires --id"))?;
            print!("{}", service.show(id)?);
            Ok(())
        }
        "list" => {
            let summaries = service.recent(config.limit)?;
            if config.json {
                let rendered = serde_json::to_string_pretty(&summaries)
                    .map_err(|e| BenchVaultError::query(e.to_string()))?;
                println!("{rendered}");
            } else {
                for summary in summaries {
                    println!(
                        "{}\t{}\t{}",
                        summary.id, summary.commit, summary.created_at
                    );
                }
            }
            Ok(())
        }
        "compare" => {
            let (before_id, after_id) = comparison_ids(config)?;
            if config.json {
                let report = service.compare_report(before_id, after_id)?;
                let rendered = serde_json::to_string_pretty(&report)
                    .map_err(|e| BenchVaultError::query(e.to_string()))?;
                println!("{rendered}");
            } else {
                let rendered = service.compare(before_id, after_id)?;
                std::io::stdout()
                    .write_all(&rendered)
                    .map_err(|e| BenchVaultError::query(e.to_string()))?;
            }
            Ok(())
        }
        "gate" => {
            let (before_id, after_id) = comparison_ids(config)?;
            let report = service.compare_report(before_id, after_id)?;
            let gate = RegressionGate::new(GateConfig {
                tolerance: config.tolerance,
                thresholds: Vec::new(),
            });
            match gate.evaluate(&report) {
                GateOutcome::Pass => {
                    println!("gate: pass");
                    Ok(())
                }
                GateOutcome::Fail(reasons) => {
                    for reason in &reasons {
                        println!("gate: {reason}");
                    }
                    process::exit(1);
                }
            }
        }
        other => Err(BenchVaultError::invalid_input(format!(
            "unknown command {other}"
        ))),
    }
}

fn comparison_ids(config: &CommandLineConfig) -> Result<(i64, i64), BenchVaultError> {
    match (config.before_id, config.after_id) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(BenchVaultError::invalid_input(
            "comparison requires --a and --b run ids",
        )),
    }
}
