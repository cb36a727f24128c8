use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use lib_core::{
    define_cli_error, expand_home_from, home_dir_from, CliError, AWS_SHARED_CREDENTIALS_FILE,
    DEFAULT_CREDENTIALS_PATH, HOME,
};
use regex::Regex;
use tracing::{debug, trace};

use crate::AwsProfile;

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[(.+?)\]\s*$").expect("Hardcoded regex should be valid.")
});

define_cli_error!(
    CredentialsFileNotFound,
    "Cannot find a readable credentials file at '{path}'.",
    { path: &str }
);
define_cli_error!(
    ProfilesNotLoaded,
    "Profiles from '{path}' have not been loaded yet.",
    { path: &str }
);

/// Profiles declared in a shared credentials file, in file order.
///
/// Only `[name]` section headers are looked at. Every header produces its own
/// entry, so a name declared twice shows up twice.
#[derive(Debug)]
pub struct ProfileRegistry {
    path: PathBuf,
    profiles: Option<Vec<AwsProfile>>,
}

impl ProfileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            profiles: None,
        }
    }

    /// Registry for `$AWS_SHARED_CREDENTIALS_FILE`, falling back to
    /// `~/.aws/credentials`.
    pub fn from_default_location() -> Result<Self, CliError> {
        Ok(Self::new(default_credentials_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.profiles.is_some()
    }

    /// Reads the credentials file and replaces the held profiles. On failure
    /// the previously loaded profiles (if any) are kept.
    pub fn load(&mut self) -> Result<&[AwsProfile], CliError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            CredentialsFileNotFound::with_debug(&self.path.display().to_string(), &e)
        })?;
        let profiles = parse_profiles(&content);
        debug!(
            path = %self.path.display(),
            count = profiles.len(),
            "Loaded profiles from credentials file."
        );
        Ok(self.profiles.insert(profiles).as_slice())
    }

    pub fn all_profiles(&self) -> Result<&[AwsProfile], CliError> {
        self.profiles
            .as_deref()
            .ok_or_else(|| ProfilesNotLoaded::new(&self.path.display().to_string()))
    }

    /// First profile with exactly this name. Returns `None` before a load.
    pub fn find_by_name(&self, name: &str) -> Option<&AwsProfile> {
        self.profiles
            .as_deref()?
            .iter()
            .find(|profile| profile.name() == name)
    }
}

pub fn default_credentials_path() -> Result<PathBuf, CliError> {
    resolve_credentials_path(
        std::env::var_os(AWS_SHARED_CREDENTIALS_FILE),
        std::env::var_os(HOME),
    )
}

fn resolve_credentials_path(
    env_override: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf, CliError> {
    match env_override.filter(|path| !path.is_empty()) {
        Some(path) => expand_home_from(PathBuf::from(path), home),
        None => Ok(DEFAULT_CREDENTIALS_PATH
            .iter()
            .fold(home_dir_from(home)?, |path, segment| path.join(segment))),
    }
}

fn parse_profiles(content: &str) -> Vec<AwsProfile> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let name = HEADER_REGEX
                .captures(line)
                .map(|caps| caps[1].trim().to_string())
                .filter(|name| !name.is_empty());
            if name.is_none() {
                trace!(line = index + 1, "Skipping non-header line.");
            }
            name.map(AwsProfile::new)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use lib_core::HomeNotSet;
    use tempfile::NamedTempFile;

    use super::*;

    fn credentials_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn names(profiles: &[AwsProfile]) -> Vec<&str> {
        profiles.iter().map(AwsProfile::name).collect()
    }

    #[test]
    fn test_load_empty_file() {
        let file = credentials_file("");
        let mut registry = ProfileRegistry::new(file.path());
        assert!(registry.load().unwrap().is_empty());
        assert!(registry.is_loaded());
    }

    #[test]
    fn test_load_without_headers() {
        let file = credentials_file("aws_access_key_id = AKIA\n# comment\n\n");
        let mut registry = ProfileRegistry::new(file.path());
        assert!(registry.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_keeps_duplicates_in_file_order() {
        let file = credentials_file(
            "[a]\naws_access_key_id = A\nsome junk\n\n[b]\nregion = x\n[b]\naws_secret_access_key = B\n",
        );
        let mut registry = ProfileRegistry::new(file.path());
        assert_eq!(names(registry.load().unwrap()), vec!["a", "b", "b"]);
        assert_eq!(names(registry.all_profiles().unwrap()), vec!["a", "b", "b"]);
    }

    #[test]
    fn test_load_trims_names_and_tolerates_whitespace() {
        let file = credentials_file("  [ dev ]  \n\t[prod]\r\n[staging]\r\n");
        let mut registry = ProfileRegistry::new(file.path());
        assert_eq!(names(registry.load().unwrap()), vec!["dev", "prod", "staging"]);
    }

    #[test]
    fn test_load_skips_malformed_headers() {
        let file = credentials_file("[unterminated\nno-brackets-here\n[]\n[   ]\nx [inline]\n[ok]\n");
        let mut registry = ProfileRegistry::new(file.path());
        assert_eq!(names(registry.load().unwrap()), vec!["ok"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = ProfileRegistry::new(dir.path().join("credentials"));
        let error = registry.load().unwrap_err();
        assert!(error.is::<CredentialsFileNotFound>());
        assert!(!registry.is_loaded());
        assert!(registry.all_profiles().unwrap_err().is::<ProfilesNotLoaded>());
    }

    #[test]
    fn test_failed_reload_keeps_previous_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");
        std::fs::write(&path, "[dev]\n[prod]\n").unwrap();
        let mut registry = ProfileRegistry::new(&path);
        registry.load().unwrap();

        std::fs::remove_file(&path).unwrap();
        assert!(registry.load().unwrap_err().is::<CredentialsFileNotFound>());
        assert_eq!(names(registry.all_profiles().unwrap()), vec!["dev", "prod"]);
    }

    #[test]
    fn test_reload_replaces_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");
        std::fs::write(&path, "[dev]\n").unwrap();
        let mut registry = ProfileRegistry::new(&path);
        registry.load().unwrap();

        std::fs::write(&path, "[prod]\n").unwrap();
        assert_eq!(names(registry.load().unwrap()), vec!["prod"]);
    }

    #[test]
    fn test_all_profiles_before_load() {
        let registry = ProfileRegistry::new("/nonexistent/credentials");
        let error = registry.all_profiles().unwrap_err();
        assert!(error.is::<ProfilesNotLoaded>());
        assert!(registry.find_by_name("dev").is_none());
    }

    #[test]
    fn test_find_by_name() {
        let file = credentials_file("[dev]\nkey = value\n[prod]\n");
        let mut registry = ProfileRegistry::new(file.path());
        registry.load().unwrap();

        assert_eq!(registry.find_by_name("dev"), Some(&AwsProfile::new("dev")));
        assert_eq!(registry.find_by_name("staging"), None);
        assert_eq!(registry.find_by_name("Dev"), None);
        assert_eq!(registry.find_by_name(" dev"), None);
    }

    fn home() -> Option<OsString> {
        Some(OsString::from("/home/dev"))
    }

    #[test]
    fn test_resolve_credentials_path_override() {
        let path = resolve_credentials_path(Some(OsString::from("/tmp/creds")), home()).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/creds"));
    }

    #[test]
    fn test_resolve_credentials_path_defaults_to_home() {
        assert_eq!(
            resolve_credentials_path(None, home()).unwrap(),
            PathBuf::from("/home/dev/.aws/credentials")
        );
        assert_eq!(
            resolve_credentials_path(Some(OsString::new()), home()).unwrap(),
            PathBuf::from("/home/dev/.aws/credentials")
        );
    }

    #[test]
    fn test_resolve_credentials_path_expands_tilde_override() {
        let path =
            resolve_credentials_path(Some(OsString::from("~/work/credentials")), home()).unwrap();
        assert_eq!(path, PathBuf::from("/home/dev/work/credentials"));
    }

    #[test]
    fn test_resolve_credentials_path_without_home() {
        let error = resolve_credentials_path(None, None).unwrap_err();
        assert!(error.is::<HomeNotSet>());
        let error = resolve_credentials_path(None, Some(OsString::new())).unwrap_err();
        assert!(error.is::<HomeNotSet>());
        let error =
            resolve_credentials_path(Some(OsString::from("~/credentials")), None).unwrap_err();
        assert!(error.is::<HomeNotSet>());

        let path = resolve_credentials_path(Some(OsString::from("/tmp/creds")), None).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/creds"));
    }
}
