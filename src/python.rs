//! Host interpreter configuration, as reported by `python3-config`.

use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::warn;

use crate::config_tool;
use crate::config_tool::ConfigToolError;
use crate::discovery::find_executable;

/// Fallback module suffix for interpreters whose config tool predates
/// `--extension-suffix`.
const DEFAULT_EXT_SUFFIX: &str = ".so";

/// Everything the build needs to know about the host interpreter.
#[derive(Debug, Clone)]
pub struct PythonConfig {
    tool: PathBuf,
    include_dirs: Vec<PathBuf>,
    ext_suffix: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PythonConfigError {
    #[error("no python3-config or python-config executable on the search path")]
    ToolNotFound,

    #[error(transparent)]
    Query(#[from] ConfigToolError),

    #[error("could not parse `{tool} --includes` output {line:?}: {source}")]
    MalformedIncludes {
        tool: String,
        line: String,
        source: flagline::ParseError,
    },
}

impl PythonConfig {
    /// Interrogate the interpreter's config tool.
    ///
    /// `explicit` overrides tool discovery entirely; otherwise `python3-config`
    /// is preferred over the unversioned `python-config`.
    pub fn discover(explicit: Option<&Path>) -> Result<PythonConfig, PythonConfigError> {
        let tool = match explicit {
            Some(path) => path.to_path_buf(),
            None => find_executable("python3-config")
                .or_else(|| find_executable("python-config"))
                .ok_or(PythonConfigError::ToolNotFound)?,
        };

        let include_dirs = query_include_dirs(&tool)?;
        let ext_suffix = query_ext_suffix(&tool);
        debug!(
            "interpreter config from {}: {} include dir(s), module suffix {ext_suffix}",
            tool.display(),
            include_dirs.len(),
        );

        Ok(PythonConfig {
            tool,
            include_dirs,
            ext_suffix,
        })
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// Header directories every module is compiled against.
    pub fn include_dirs(&self) -> &[PathBuf] {
        &self.include_dirs
    }

    /// The platform- and version-specific filename suffix for modules,
    /// including the leading dot.
    pub fn ext_suffix(&self) -> &str {
        &self.ext_suffix
    }
}

fn query_include_dirs(tool: &Path) -> Result<Vec<PathBuf>, PythonConfigError> {
    let line = config_tool::query(tool, "--includes")?;
    let flags = flagline::parse(&line).map_err(|source| PythonConfigError::MalformedIncludes {
        tool: tool.display().to_string(),
        line: line.clone(),
        source,
    })?;

    let mut dirs: Vec<PathBuf> = flags
        .into_iter()
        .filter_map(|flag| match flag {
            flagline::Flag::IncludeDir(dir) => Some(dir),
            _ => None,
        })
        .collect();
    dirs.dedup();
    Ok(dirs)
}

/// Older config tools do not understand `--extension-suffix`; fall back to a
/// bare `.so` like their interpreters expect.
fn query_ext_suffix(tool: &Path) -> String {
    match config_tool::query(tool, "--extension-suffix") {
        Ok(suffix) if !suffix.is_empty() => suffix,
        Ok(_) => DEFAULT_EXT_SUFFIX.to_owned(),
        Err(error) => {
            warn!("assuming module suffix {DEFAULT_EXT_SUFFIX}: {error}");
            DEFAULT_EXT_SUFFIX.to_owned()
        }
    }
}
