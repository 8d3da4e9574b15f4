//! admin-rbac - inspect NomadPay admin role permissions
//!
//! Answers the same questions the admin panel asks before rendering a page
//! or enabling a button.

use anyhow::Context;
use clap::{Parser, Subcommand};
use nomadpay_admin::utils::logging::init_tracing;
use nomadpay_admin::{
    BUILD_TIME, Config, GIT_HASH, Navigation, PermissionChecker, Section, VERSION,
    role_summaries,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "admin-rbac", version = VERSION, about = "Inspect NomadPay admin role permissions")]
struct Cli {
    /// Path to admin.yaml; defaults and environment are used when omitted
    #[arg(short, long, global = true, env = "ADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a single permission, e.g. `users:edit`
    Check {
        #[arg(long)]
        role: String,
        #[arg(long)]
        permission: String,
    },
    /// Check an action on a resource, e.g. `--resource users --action delete`
    Action {
        #[arg(long)]
        role: String,
        #[arg(long)]
        resource: String,
        #[arg(long)]
        action: String,
    },
    /// List the sections a role can open
    Sections {
        #[arg(long)]
        role: String,
        /// Section the user asked for; prints the one that would be shown
        #[arg(long)]
        requested: Option<String>,
    },
    /// List roles and their permissions
    Roles,
}

#[derive(Serialize)]
struct SectionsReport<'a> {
    role: &'a str,
    available: &'a [Section],
    locked: &'a [Section],
    active: Section,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load admin configuration")?;
    init_tracing(config.logging()).context("failed to initialise logging")?;
    debug!(version = VERSION, git = GIT_HASH, built = BUILD_TIME, "admin-rbac starting");

    match cli.command {
        Command::Check { role, permission } => {
            let check = PermissionChecker::from_role_str(&role).check(&permission);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&check)?);
            } else {
                match &check.denial_reason {
                    None => println!("{}: {} granted", check.role, check.permission),
                    Some(reason) => println!("{}: denied ({})", check.role, reason),
                }
            }
        }
        Command::Action {
            role,
            resource,
            action,
        } => {
            let granted = PermissionChecker::from_role_str(&role).can_perform_action(&resource, &action);
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "role": role,
                        "resource": resource,
                        "action": action,
                        "granted": granted,
                    })
                );
            } else {
                let verdict = if granted { "granted" } else { "denied" };
                println!("{}: {}:{} {}", role, resource, action, verdict);
            }
        }
        Command::Sections { role, requested } => {
            let checker = PermissionChecker::from_role_str(&role);
            let nav = Navigation::for_checker(&checker);
            let requested = requested.unwrap_or_else(|| config.rbac().default_section.clone());
            let report = SectionsReport {
                role: &role,
                available: nav.available(),
                locked: nav.locked(),
                active: nav.resolve_active(&requested),
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for item in nav.menu() {
                    let marker = if item.enabled { " " } else { "x" };
                    println!("[{}] {:<13} {}", marker, item.label, item.section);
                }
                println!("active: {}", report.active);
            }
        }
        Command::Roles => {
            let summaries = role_summaries();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for summary in summaries {
                    println!("{} - {}", summary.role, summary.description);
                    for permission in summary.permissions {
                        println!("    {}", permission);
                    }
                }
            }
        }
    }

    Ok(())
}
