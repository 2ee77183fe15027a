use std::{ffi::OsStr, path::{Path, PathBuf}, env::VarError};

use anyhow::{Result, anyhow, Context, bail};


pub fn osstr_to_str(s: &OsStr) -> Result<&str> {
    match s.to_str() {
        Some(s2) => Ok(s2),
        None => bail!("can't properly decode to string {:?}",
                      s.to_string_lossy())
    }
}

pub fn program_path() -> Result<PathBuf> {
    let path = std::env::args_os().next().ok_or_else(
        || anyhow!("missing program executable path in args_os"))?;
    Ok(PathBuf::from(path))
}

/// Split the file name of `path` into stem and extension, e.g.
/// `/srv/cgi-bin/webtest.cgi` into `("webtest", Some("cgi"))`.
pub fn file_stem_and_extension(path: &Path) -> Result<(String, Option<String>)> {
    let stem = path.file_stem().ok_or_else(
        || anyhow!("cannot get file name from path {:?}",
                   path.to_string_lossy()))?;
    let stem = osstr_to_str(stem).with_context(
        || anyhow!("cannot decode file name of {:?}", path.to_string_lossy()))?
        .to_string();
    let extension = match path.extension() {
        Some(ext) => Some(osstr_to_str(ext)?.to_string()),
        None => None
    };
    Ok((stem, extension))
}

/// Get an env var as a String; decoding failures are reported as
/// errors.
pub fn getenv(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(s) => Ok(Some(s)),
        Err(e) => match e {
            VarError::NotPresent => Ok(None),
            VarError::NotUnicode(_) => bail!("{name:?} env var is not unicode"),
        }
    }
}

/// Like `getenv` but treats an empty value like a missing one (CGI
/// servers set variables like `QUERY_STRING` to the empty string).
pub fn getenv_nonempty(name: &str) -> Result<Option<String>> {
    Ok(getenv(name)?.filter(|s| !s.is_empty()))
}
