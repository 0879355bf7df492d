//! Configuration templates for `fsq init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out
//! example configurations.

/// Project template: the local file that `fsq init` writes, before commenting.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Home-directory template, a reduced set of search defaults.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Template for a project `.fsq.toml`, with every setting commented out.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Template for `~/.fsq.toml`, with every setting commented out.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Prefixes every setting line with `# `, leaving blanks and existing comments alone.
fn comment_template(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
