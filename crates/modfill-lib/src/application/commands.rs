//! Command execution handlers
//!
//! Session-based command execution. Handlers that talk to CurseForge are
//! generic over [`CurseForgeClient`] so tests can hand them a mock.

use crate::api::{CurseForgeClient, LiveCurseForgeClient};
use crate::application::session::{CommandSession, Session};
use crate::application::{CliConfig, Commands};
use crate::display::DisplayProviderExt;
use crate::manifest::{Manifest, diagnostics_json, parse_mod_list};
use crate::resolve::projects::ProjectResolver;
use crate::resolve::{AutomaticStrategy, InteractiveStrategy, ResolutionReport, resolve_all};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tracing::info;

/// Inputs of the resolve command
#[derive(Debug, Clone)]
pub struct ResolveArgs {
    pub modlist: PathBuf,
    pub manifest: PathBuf,
    pub output: PathBuf,
    pub non_interactive: bool,
    pub diagnostics: Option<PathBuf>,
}

/// Execute CLI commands using the session-based architecture
pub async fn execute_command(config: CliConfig) -> Result<()> {
    // Create command session (owns all ephemeral state)
    let session = CommandSession::new(config.app_config);

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            session
                .display()
                .status()
                .message("modfill - CurseForge manifest filler");
            session
                .display()
                .status()
                .subtle("Run 'modfill --help' for usage information");
            return Ok(());
        }
    };

    execute_command_with_session(command, &session).await
}

/// Execute a specific command with a provided session (for testing)
pub async fn execute_command_with_session(command: Commands, session: &dyn Session) -> Result<()> {
    match command {
        Commands::Version => handle_version(session),
        Commands::Search { name } => {
            let client = live_client(session)?;
            handle_search(session, &client, &name).await
        }
        Commands::Resolve {
            modlist,
            manifest,
            output,
            non_interactive,
            diagnostics,
        } => {
            let args = ResolveArgs {
                modlist,
                manifest,
                output,
                non_interactive,
                diagnostics,
            };
            let client = live_client(session)?;
            handle_resolve(session, &client, &args).await.map(|_| ())
        }
    }
}

fn live_client(session: &dyn Session) -> Result<LiveCurseForgeClient> {
    let config = session.config().app_config().to_curseforge_config();
    Ok(LiveCurseForgeClient::from_config(config)?)
}

fn handle_version(session: &dyn Session) -> Result<()> {
    let status = session.display().status();
    status.message(&format!("modfill {}", env!("CARGO_PKG_VERSION")));
    status.subtle("Resolve mod names into CurseForge manifest entries");
    status.subtle(&format!(
        "Target: {}-{}",
        std::env::consts::ARCH,
        std::env::consts::OS
    ));
    Ok(())
}

/// Print ranked search results for one name
pub async fn handle_search<C: CurseForgeClient>(
    session: &dyn Session,
    client: &C,
    name: &str,
) -> Result<()> {
    let resolver_config = session.config().app_config().to_resolver_config();
    let ranked = ProjectResolver::new(client, &resolver_config)
        .resolve_projects(name)
        .await
        .with_context(|| format!("Search for '{}' failed", name))?;

    let status = session.display().status();
    status.section(&format!("Search results for '{}'", name));
    if ranked.is_empty() {
        status.warning("No projects found");
        return Ok(());
    }

    let lines: Vec<String> = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "[{}] {}  (projectID={}, {} downloads, similarity {:.2})",
                i + 1,
                r.candidate.name,
                r.candidate.id,
                r.candidate.download_count,
                r.similarity
            )
        })
        .collect();
    let items: Vec<&str> = lines.iter().map(String::as_str).collect();
    status.list(&items);

    Ok(())
}

/// Resolve a mod list and write the filled manifest
///
/// Input, output and terminal problems are fatal; anything that goes wrong
/// for a single mod ends up in the report's unresolved entries.
pub async fn handle_resolve<C: CurseForgeClient>(
    session: &dyn Session,
    client: &C,
    args: &ResolveArgs,
) -> Result<ResolutionReport> {
    let filesystem = session.filesystem();

    let modlist = filesystem
        .read_to_string(&args.modlist)
        .with_context(|| format!("Cannot read mod list {}", args.modlist.display()))?;
    let requests = parse_mod_list(&modlist)
        .with_context(|| format!("Cannot load mod list {}", args.modlist.display()))?;

    let template = filesystem
        .read_to_string(&args.manifest)
        .with_context(|| format!("Cannot read manifest template {}", args.manifest.display()))?;
    let manifest = Manifest::parse(&template)
        .with_context(|| format!("Cannot load manifest template {}", args.manifest.display()))?;

    if !args.non_interactive && !session.is_interactive_terminal() {
        bail!("Interactive mode needs a terminal; pass --non-interactive for unattended runs");
    }

    let resolver_config = session.config().app_config().to_resolver_config();
    let display = session.display();
    display.status().section(&format!(
        "Resolving {} mod{} for {}",
        requests.len(),
        if requests.len() == 1 { "" } else { "s" },
        resolver_config.target_version
    ));
    info!(
        mods = requests.len(),
        interactive = !args.non_interactive,
        target = %resolver_config.target_version,
        "Starting resolve run"
    );

    let report = if args.non_interactive {
        let strategy = AutomaticStrategy::new(client, &resolver_config);
        resolve_all(&requests, &strategy, display, resolver_config.request_delay).await
    } else {
        let strategy = InteractiveStrategy::new(client, &resolver_config, display);
        resolve_all(&requests, &strategy, display, resolver_config.request_delay).await
    };

    let output = manifest
        .with_files(&report.manifest_files())
        .to_pretty_string()?;
    filesystem
        .write_file(&args.output, &output)
        .with_context(|| format!("Cannot write manifest {}", args.output.display()))?;
    display
        .status()
        .success("Wrote manifest", &args.output.display().to_string());

    let unresolved = report.unresolved();
    let diagnostics = diagnostics_json(&unresolved)?;
    if !unresolved.is_empty() {
        let status = display.status();
        status.section("Unresolved entries");
        status.message(diagnostics.trim_end());
    }
    if let Some(path) = &args.diagnostics {
        filesystem
            .write_file(path, &diagnostics)
            .with_context(|| format!("Cannot write diagnostics {}", path.display()))?;
    }

    display.display_summary("Resolve", &report.summary());
    Ok(report)
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
