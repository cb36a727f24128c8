use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{constants::HOME, define_cli_error, CliError};

define_cli_error!(HomeNotSet, "The {var} environment variable is not set.", { var: &str });

/// Home directory from an already-read `HOME` value. Unset and empty are
/// both rejected.
pub fn home_dir_from(home: Option<OsString>) -> Result<PathBuf, CliError> {
    home.filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| HomeNotSet::new(HOME))
}

/// Replaces a leading `~` with the given home directory. Other paths are
/// returned untouched.
pub fn expand_home_from<P>(path: P, home: Option<OsString>) -> Result<PathBuf, CliError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir_from(home)?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}
