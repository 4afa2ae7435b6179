//! CLI entry point for approvalguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `approvalguard-app` crate.

use anyhow::Context;
use approvalguard_app::{
    ActionsLog, CheckInput, append_text, run_check, verdict_exit_code, write_report,
};
use approvalguard_github::event::{ActionsEnv, resolve_pull_request};
use approvalguard_github::{DEFAULT_API_URL, GitHubClient, GitHubClientConfig};
use approvalguard_render::render_markdown;
use approvalguard_settings::Overrides;
use approvalguard_types::PullRequestRef;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "APPROVALGUARD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "approvalguard",
    version,
    about = "Require pull request approvals when changed files match glob patterns"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate approval requirements for a pull request.
    Check(CheckArgs),

    /// Print the JSON Schema of approvalguard.toml.
    Schema,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Path to approvalguard config TOML (a missing file is allowed with --requirements).
    #[arg(long, default_value = "approvalguard.toml")]
    config: Utf8PathBuf,

    /// Inline requirements as a JSON array; replaces the config file's list.
    #[arg(long, env = "INPUT_REQUIREMENTS")]
    requirements: Option<String>,

    /// GitHub token used to read the pull request.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// HTTP request timeout in seconds.
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Repository owner (defaults to the Actions event).
    #[arg(long, requires_all = ["repo", "pr"])]
    owner: Option<String>,

    /// Repository name (defaults to the Actions event).
    #[arg(long, requires_all = ["owner", "pr"])]
    repo: Option<String>,

    /// Pull request number (defaults to the Actions event).
    #[arg(long, requires_all = ["owner", "repo"])]
    pr: Option<u64>,

    /// Where to write the JSON report (not written if omitted).
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Markdown summary file to append to.
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    markdown_out: Option<Utf8PathBuf>,

    /// Maximum number of file annotations to emit for unmet requirements.
    #[arg(long, default_value = "10")]
    max_annotations: usize,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check(args) => cmd_check(args),
        Commands::Schema => cmd_schema(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    match check(&args) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("approvalguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn check(args: &CheckArgs) -> anyhow::Result<i32> {
    let resolved = load_requirements(args)?;
    let pull_request = resolve_target(args)?;
    tracing::debug!(
        pr = %pull_request,
        requirements = resolved.requirements.len(),
        "starting check"
    );

    let token = args
        .token
        .clone()
        .filter(|t| !t.trim().is_empty())
        .context("missing GitHub token: pass --token or set GITHUB_TOKEN")?;

    let client = GitHubClient::new(GitHubClientConfig {
        api_url: args.api_url.clone(),
        token: Some(token),
        timeout_secs: args.timeout_secs,
    })
    .context("build GitHub client")?;

    let input = CheckInput {
        pull_request: &pull_request,
        requirements: &resolved.requirements,
        max_annotations: args.max_annotations,
    };
    let output = run_check(&client, input, &mut ActionsLog)?;

    if let Some(path) = &args.report_out {
        write_report(path, &output.report).context("write report json")?;
    }
    if let Some(path) = non_empty(args.markdown_out.as_deref()) {
        append_text(path, &render_markdown(&output.report)).context("write markdown")?;
    }

    Ok(verdict_exit_code(output.report.verdict))
}

fn load_requirements(args: &CheckArgs) -> anyhow::Result<approvalguard_settings::ResolvedConfig> {
    // Missing file is allowed (inline requirements may supply everything).
    let cfg_text = match std::fs::read_to_string(&args.config) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => {
            return Err(err).with_context(|| format!("read config: {}", args.config));
        }
    };

    let cfg = if cfg_text.trim().is_empty() {
        approvalguard_settings::ApprovalGuardConfigV1::default()
    } else {
        approvalguard_settings::parse_config_toml(&cfg_text)
            .with_context(|| format!("parse config: {}", args.config))?
    };

    // Actions exports unset inputs as empty strings.
    let inline = args
        .requirements
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(approvalguard_settings::parse_requirements_json)
        .transpose()
        .context("parse inline requirements")?;

    approvalguard_settings::resolve_config(
        cfg,
        Overrides {
            requirements: inline,
        },
    )
    .context("resolve config")
}

fn resolve_target(args: &CheckArgs) -> anyhow::Result<PullRequestRef> {
    if let (Some(owner), Some(repo), Some(number)) = (&args.owner, &args.repo, args.pr) {
        return Ok(PullRequestRef::new(owner.clone(), repo.clone(), number));
    }
    resolve_pull_request(&ActionsEnv::from_env()).context("resolve pull request from environment")
}

fn non_empty(path: Option<&Utf8Path>) -> Option<&Utf8Path> {
    path.filter(|p| !p.as_str().is_empty())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = approvalguard_settings::config_schema_json()?;
    println!("{schema}");
    Ok(())
}
