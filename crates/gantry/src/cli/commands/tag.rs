//! Tag command

use clap::Args;
use console::style;
use dialoguer::Confirm;
use serde::Serialize;
use tracing::info;

use gantry_core::config::load_config_or_default;
use gantry_core::version;
use gantry_git::{push_tag, GitRepo};

use crate::cli::{output, Cli, OutputFormat};

/// Tag the merged release on the base branch
#[derive(Debug, Args)]
pub struct TagCommand {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Debug, Serialize)]
struct TagSummary {
    tag: String,
}

impl TagCommand {
    /// Execute the tag command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing tag command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        if !cli.quiet && cli.format == OutputFormat::Text {
            output::banner("tag");
        }

        let repo = GitRepo::discover(&cwd)?;
        repo.checkout_branch(&config.github.base_branch)?;
        repo.fetch_and_fast_forward(&config.release.remote, &config.github.base_branch)?;

        // After the prep PR merges, the base branch's deployment version
        // file carries the release version.
        let release_version =
            version::read_deployment_version(&cwd.join(&config.paths.deployment_version))?;
        let tag = release_version.to_string();

        if !self.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Tag release {}?", tag))
                .default(true)
                .interact()?;

            if !confirmed {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let quiet = cli.quiet || cli.format == OutputFormat::Json;

        repo.create_tag(&tag, &format!("release {}", tag))?;
        if !quiet {
            output::step("Created annotated tag", 1, 2);
        }

        push_tag(&config.release.remote, &tag)?;
        if !quiet {
            output::step("Pushed tag", 2, 2);
        }

        match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&TagSummary { tag: tag.clone() })?
                );
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!();
                    output::success(&format!(
                        "Tagged {}. Continue with {}.",
                        style(&tag).yellow(),
                        style("gantry release").cyan()
                    ));
                }
            }
        }

        Ok(())
    }
}
