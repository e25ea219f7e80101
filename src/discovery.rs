//! Locating vendor SDKs and the directories their libraries live in.
//!
//! The optional commercial solvers are not vendored; their SDKs are found on
//! the machine running the build. Resolution is two-tiered: an explicit
//! environment override wins, otherwise a known executable is searched for on
//! the search path and the installation root is derived from its location.

use std::env;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use enumset::EnumSetType;
use once_cell::sync::Lazy;
use walkdir::WalkDir;

/// The process search path, parsed once. The build never mutates `PATH`.
static SEARCH_PATH: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    env::var_os("PATH")
        .map(|path| env::split_paths(&path).collect())
        .unwrap_or_default()
});

/// The optional commercial SDKs the catalog can link against.
#[derive(EnumSetType, Debug, clap::ValueEnum)]
pub enum Sdk {
    Cplex,
    Gurobi,
}

impl Sdk {
    pub const ALL: [Sdk; 2] = [Sdk::Cplex, Sdk::Gurobi];

    /// The environment variable naming the installation root directly.
    pub fn env_var(self) -> &'static str {
        match self {
            Sdk::Cplex => "CPLEXDIR",
            Sdk::Gurobi => "GUROBI_HOME",
        }
    }

    /// The executable whose on-path location betrays the installation root.
    pub fn executable(self) -> &'static str {
        match self {
            Sdk::Cplex => "cplex",
            Sdk::Gurobi => "gurobi_cl",
        }
    }

    /// How many directories above the executable's directory the root sits.
    ///
    /// CPLEX installs its binary under `<root>/bin/<arch>/`, Gurobi under
    /// `<root>/bin/`.
    fn root_offset(self) -> usize {
        match self {
            Sdk::Cplex => 2,
            Sdk::Gurobi => 1,
        }
    }
}

impl fmt::Display for Sdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sdk::Cplex => write!(f, "CPLEX"),
            Sdk::Gurobi => write!(f, "Gurobi"),
        }
    }
}

/// How an installation root was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// The named override environment variable was set.
    Environment(&'static str),
    /// Derived from an executable found on the search path.
    Executable(PathBuf),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Environment(var) => write!(f, "from ${var}"),
            Origin::Executable(path) => write!(f, "derived from {}", path.display()),
        }
    }
}

/// A resolved SDK installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkHome {
    pub root: PathBuf,
    pub origin: Origin,
}

/// Resolve the installation root of `sdk`, if it can be found at all.
///
/// The override environment variable is preferred; a set-but-blank value is
/// treated as unset. Failing that, the SDK's executable is searched for on
/// `PATH` and the root derived from its (symlink-resolved) location.
pub fn locate(sdk: Sdk) -> Option<SdkHome> {
    let override_value = env::var(sdk.env_var()).ok();
    locate_with(sdk, override_value.as_deref(), &SEARCH_PATH)
}

pub(crate) fn locate_with(
    sdk: Sdk,
    override_value: Option<&str>,
    search_path: &[PathBuf],
) -> Option<SdkHome> {
    if let Some(root) = override_value {
        if !root.trim().is_empty() {
            return Some(SdkHome {
                root: PathBuf::from(root),
                origin: Origin::Environment(sdk.env_var()),
            });
        }
    }

    let executable = find_executable_in(sdk.executable(), search_path)?;
    let resolved = executable.canonicalize().unwrap_or(executable);

    let mut dir = resolved.parent()?;
    for _ in 0..sdk.root_offset() {
        dir = dir.parent()?;
    }

    let root = dir.to_path_buf();
    Some(SdkHome {
        root,
        origin: Origin::Executable(resolved),
    })
}

/// Search the process `PATH` for an executable file called `name`.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    find_executable_in(name, &SEARCH_PATH)
}

pub(crate) fn find_executable_in(name: &str, search_path: &[PathBuf]) -> Option<PathBuf> {
    for dir in search_path {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cfg!(windows) {
            let candidate = dir.join(format!("{name}.exe"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// The ways a located SDK can still be unusable.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("could not find a static library anywhere under {}", searched.display())]
    NoStaticLibraries { searched: PathBuf },

    #[error("could not find a lib{prefix}<version>.so library under {}", searched.display())]
    NoVersionedLibrary { prefix: String, searched: PathBuf },
}

/// Walk `base` until a file with the `.a` extension is found and return its
/// containing directory.
///
/// SDKs nest their static libraries under architecture and build-type
/// subdirectories (`lib/<arch>/<buildtype>/`); the exact names vary between
/// releases, so the directory is found rather than spelled out.
pub fn static_lib_dir(base: &Path) -> Result<PathBuf, DiscoveryError> {
    for entry in WalkDir::new(base).into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "a") {
            let dir = path.parent().unwrap_or(base);
            return Ok(dir.to_path_buf());
        }
    }

    Err(DiscoveryError::NoStaticLibraries {
        searched: base.to_path_buf(),
    })
}

/// Find the version-mangled shared library `lib<prefix><digits>.so` under
/// `lib_dir` and return its link stem (for Gurobi: `gurobi110` or similar).
pub fn versioned_lib_stem(lib_dir: &Path, prefix: &str) -> Result<String, DiscoveryError> {
    for entry in WalkDir::new(lib_dir).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some(stem) = versioned_stem(&name, prefix) {
            return Ok(stem.to_owned());
        }
    }

    Err(DiscoveryError::NoVersionedLibrary {
        prefix: prefix.to_owned(),
        searched: lib_dir.to_path_buf(),
    })
}

fn versioned_stem<'a>(file_name: &'a str, prefix: &str) -> Option<&'a str> {
    let stem = file_name.strip_prefix("lib")?.strip_suffix(".so")?;
    let version = stem.strip_prefix(prefix)?;

    if !version.is_empty() && version.bytes().all(|b| b.is_ascii_digit()) {
        Some(stem)
    } else {
        None
    }
}
