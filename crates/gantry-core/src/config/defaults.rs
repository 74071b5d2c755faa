//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "gantry.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "gantry.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".gantry.toml",
        ".gantry.yaml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Gantry Configuration

[github]
owner = ""
repo = ""
base_branch = "develop"

[paths]
changelog_md = "docs/changelog.md"
changelog_rst = "docs/changelog.rst"
deployment_version = "deployment_version"
version_snippet = "docs/components/_version_snippet.mdx"
internal_authors = ".github/teams.yml"
release_schedule = "release_schedule.json"

[release]
branch_prefix = "release-"
commit_message = "release prep"
pr_title_prefix = "[RELEASE]"
remote = "origin"
"#;
