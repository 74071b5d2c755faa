//! Prep command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::Confirm;
use semver::Version;
use serde::Serialize;
use tracing::info;

use gantry_changelog::{collect_window, ChangelogAssembler, DocumentPatcher};
use gantry_core::config::{load_config_or_default, Config};
use gantry_core::{schedule, version};
use gantry_git::{push_branch_with_upstream, GitRepo};
use gantry_github::GitHubClient;

use crate::cli::{output, Cli, OutputFormat};

const STEPS: usize = 6;

/// Cut a release branch with version files and changelogs updated
#[derive(Debug, Args)]
pub struct PrepCommand {
    /// Explicit release version (otherwise taken from the schedule file)
    #[arg(long)]
    pub version: Option<String>,

    /// Release schedule file (defaults to the configured path)
    #[arg(long)]
    pub schedule: Option<PathBuf>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Debug, Serialize)]
struct PrepSummary {
    current_version: String,
    release_version: String,
    branch: String,
    pr_url: String,
}

impl PrepCommand {
    /// Execute the prep command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.version, schedule = ?self.schedule, "executing prep command");
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);

        if config_path.is_none() && !cli.quiet {
            output::warning("No configuration found, using defaults.");
        }

        if !cli.quiet && cli.format == OutputFormat::Text {
            output::banner("prep");
        }

        // Resolve the release version before anything is touched. A missing
        // schedule entry or a non-advancing version must abort while the
        // repository and schedule file are still pristine.
        let schedule_path = self
            .schedule
            .clone()
            .unwrap_or_else(|| cwd.join(&config.paths.release_schedule));
        let today = chrono::Local::now().date_naive();

        let (release_version, from_schedule) = match &self.version {
            Some(v) => (Version::parse(v)?, false),
            None => {
                let scheduled = schedule::scheduled_version(&schedule_path, today)?;
                (Version::parse(&scheduled)?, true)
            }
        };

        // A missing token should also fail before any mutation.
        let client = GitHubClient::new(&config.github)?;

        let repo = GitRepo::discover(&cwd)?;
        repo.checkout_branch(&config.github.base_branch)?;
        repo.fetch_and_fast_forward(&config.release.remote, &config.github.base_branch)?;

        let version_file = cwd.join(&config.paths.deployment_version);
        let current_version = version::read_deployment_version(&version_file)?;
        version::ensure_newer(&current_version, &release_version)?;

        if !cli.quiet && cli.format == OutputFormat::Text {
            println!();
            println!("  Current version: {}", style(&current_version).cyan());
            println!(
                "  Release version: {}",
                style(&release_version).green().bold()
            );
            println!();
        }

        if !self.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Prepare release {}?", release_version))
                .default(true)
                .interact()?;

            if !confirmed {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let quiet = cli.quiet || cli.format == OutputFormat::Json;

        let branch = config.release.branch_name(&release_version.to_string());
        repo.create_and_checkout_branch(&branch)?;
        if !quiet {
            output::step("Created a release branch", 1, STEPS);
        }

        if from_schedule {
            schedule::consume_scheduled_version(&schedule_path, today)?;
        }
        version::write_deployment_version(&version_file, &release_version)?;
        if !quiet {
            output::step("Updated deployment version file", 2, STEPS);
        }

        version::write_version_snippet(
            &cwd.join(&config.paths.version_snippet),
            &config.github.repo,
            &release_version,
        )?;
        if !quiet {
            output::step("Updated version in tutorial snippet", 3, STEPS);
        }

        self.update_changelogs(&cwd, &config, &client, &current_version, &release_version)?;
        if !quiet {
            output::step("Updated changelogs", 4, STEPS);
        }

        repo.commit_all(&config.release.commit_message)?;
        if !quiet {
            output::step("Committed changes", 5, STEPS);
        }

        push_branch_with_upstream(&config.release.remote, &branch)?;
        let pr = client.create_pull(
            &config.release.pr_title(&release_version.to_string()),
            &format!("release prep for {}", release_version),
            &branch,
            &config.github.base_branch,
        )?;
        if !quiet {
            output::step("Opened prep PR", 6, STEPS);
        }

        match cli.format {
            OutputFormat::Json => {
                let summary = PrepSummary {
                    current_version: current_version.to_string(),
                    release_version: release_version.to_string(),
                    branch,
                    pr_url: pr.html_url.clone(),
                };
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!();
                    output::success(&format!(
                        "Review, approve, and merge the PR, then run {}.",
                        style("gantry tag").cyan()
                    ));
                    println!("Link to PR: {}", style(&pr.html_url).cyan());
                }
            }
        }

        Ok(())
    }

    /// Derive the changelog entry once and splice it into both documents
    fn update_changelogs(
        &self,
        cwd: &Path,
        config: &Config,
        client: &GitHubClient,
        current_version: &Version,
        release_version: &Version,
    ) -> anyhow::Result<()> {
        let current = current_version.to_string();
        let release = release_version.to_string();

        let last_release = client.release_by_tag(&current)?.created_at;
        let window = collect_window(client.closed_pulls(&config.github.base_branch), last_release)?;

        let internal_authors = std::fs::read_to_string(cwd.join(&config.paths.internal_authors))?;
        let records = ChangelogAssembler::new(internal_authors).assemble(window);
        info!(record_count = records.len(), "derived changelog entry");

        for path in [&config.paths.changelog_md, &config.paths.changelog_rst] {
            let patcher = DocumentPatcher::for_path(cwd.join(path))?;
            patcher.patch_file(&current, &release, &records)?;
        }

        Ok(())
    }
}
