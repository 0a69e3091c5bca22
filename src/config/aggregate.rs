//! Flattening of the `repos` mapping into editor search paths

use crate::error::Result;

use super::{Config, RepoPaths};

/// Collect every configured repository path, in `repos` order, followed by
/// `"{distinguished}/{suffix}"`.
///
/// Lists are flattened in place and duplicates are kept. Fails if `repos` is
/// missing or `distinguished` is not a single-path entry.
pub fn aggregate_paths(config: &Config, distinguished: &str, suffix: &str) -> Result<Vec<String>> {
    let repos = config.repos()?;
    let base = config.repo_path(distinguished)?;

    let mut paths = Vec::with_capacity(repos.len() + 1);
    for (name, value) in repos {
        match value {
            RepoPaths::Single(path) => paths.push(path.clone()),
            RepoPaths::Many(list) => paths.extend(list.iter().cloned()),
            RepoPaths::Unsupported(_) => {
                tracing::warn!("Skipping repo '{}': expected a path or a list of paths", name);
            }
        }
    }
    paths.push(format!("{}/{}", base, suffix));

    tracing::debug!("Aggregated {} paths", paths.len());
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, ADDONS_SUFFIX, ODOO_REPO};
    use crate::error::Error;

    fn aggregate(yaml: &str) -> Result<Vec<String>> {
        aggregate_paths(&parse_config(yaml).unwrap(), ODOO_REPO, ADDONS_SUFFIX)
    }

    #[test]
    fn test_string_only_repos() {
        let paths = aggregate("repos:\n  a: /x\n  b: /y\n  odoo: /odoo\n").unwrap();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths.last().unwrap(), "/odoo/addons");
    }

    #[test]
    fn test_mixed_values_flatten_in_order() {
        let paths = aggregate("repos:\n  a: /x\n  b: [/y, /z]\n  odoo: /odoo\n").unwrap();
        assert_eq!(paths, vec!["/x", "/y", "/z", "/odoo", "/odoo/addons"]);
    }

    #[test]
    fn test_order_follows_file_not_name() {
        let paths = aggregate("repos:\n  odoo: /odoo\n  zz: /first\n  aa: [/second]\n").unwrap();
        assert_eq!(paths, vec!["/odoo", "/first", "/second", "/odoo/addons"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let paths = aggregate("repos:\n  odoo: /odoo\n  again: [/odoo, /odoo]\n").unwrap();
        assert_eq!(paths, vec!["/odoo", "/odoo", "/odoo", "/odoo/addons"]);
    }

    #[test]
    fn test_unsupported_entries_are_skipped() {
        let paths = aggregate("repos:\n  odoo: /odoo\n  bogus: {nested: /x}\n").unwrap();
        assert_eq!(paths, vec!["/odoo", "/odoo/addons"]);
    }

    #[test]
    fn test_missing_odoo_fails_instead_of_placeholder() {
        let result = aggregate("repos:\n  a: /x\n");
        assert!(matches!(result, Err(Error::RepoNotFound(name)) if name == "odoo"));
    }

    #[test]
    fn test_empty_or_absent_repos_fails() {
        assert!(matches!(aggregate("repos: {}\n"), Err(Error::RepoNotFound(_))));
        assert!(matches!(aggregate("python: '3.11'\n"), Err(Error::MissingRepos)));
    }
}
