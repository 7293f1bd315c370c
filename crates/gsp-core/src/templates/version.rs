//! Version comparison for CLI and template compatibility

use semver::Version;

/// Compare CLI version against the version a templates root expects
/// Returns a warning message if the CLI is older
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    // Unparseable versions can't be compared, skip warning
    let cli_ver = parse_version(cli_version)?;
    let template_ver = parse_version(template_version)?;

    if cli_ver < template_ver {
        Some(format!(
            "These templates were designed for create-gsp {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            template_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse version string, tolerating a leading 'v'
fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}
