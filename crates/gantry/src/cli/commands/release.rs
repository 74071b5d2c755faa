//! Release command

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use gantry_changelog::extract_release_notes;
use gantry_core::config::load_config_or_default;
use gantry_core::version;
use gantry_github::GitHubClient;

use crate::cli::{output, Cli, OutputFormat};

/// Create the draft GitHub release from the changelog
#[derive(Debug, Args)]
pub struct ReleaseCommand {
    /// Publish immediately instead of creating a draft
    #[arg(long)]
    pub publish: bool,
}

#[derive(Debug, Serialize)]
struct ReleaseSummary {
    tag: String,
    url: String,
    draft: bool,
}

impl ReleaseCommand {
    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(publish = self.publish, "executing release command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        if !cli.quiet && cli.format == OutputFormat::Text {
            output::banner("release");
        }

        let release_version =
            version::read_deployment_version(&cwd.join(&config.paths.deployment_version))?;
        let tag = release_version.to_string();

        // The release body is the entry prep spliced into the Markdown
        // changelog.
        let changelog_path = cwd.join(&config.paths.changelog_md);
        let contents = std::fs::read_to_string(&changelog_path)?;
        let lines: Vec<String> = contents.lines().map(str::to_string).collect();
        let notes = extract_release_notes(&lines, &tag);

        let client = GitHubClient::new(&config.github)?;
        let release = client.create_release(&tag, &tag, &notes.join("\n"), !self.publish)?;

        let quiet = cli.quiet || cli.format == OutputFormat::Json;
        if !quiet {
            let label = if release.draft {
                "Created draft release"
            } else {
                "Created release"
            };
            output::step(label, 1, 1);
        }

        match cli.format {
            OutputFormat::Json => {
                let summary = ReleaseSummary {
                    tag: tag.clone(),
                    url: release.html_url.clone(),
                    draft: release.draft,
                };
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!();
                    output::success("Review and publish the release to finish the process.");
                    println!("Link to release: {}", style(&release.html_url).cyan());
                }
            }
        }

        Ok(())
    }
}
