//! Options controlling a build run and the layout of the source tree.

use std::path::PathBuf;

/// Directory under the third-party tree holding the bundled XML parser.
const LIBXML_SRC_DIR: &str = "libxml2-2.9.1";

/// Everything a build run can be told from the outside.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory containing the `solvers/` tree.
    pub source_root: PathBuf,
    /// Scratch directory for generated sources, objects, and built modules.
    pub build_dir: PathBuf,
    /// Where generated host-language shims are written; defaults to
    /// `<build_dir>/python`.
    pub py_out: Option<PathBuf>,
    /// Directory containing bundled third-party sources.
    pub third_party: PathBuf,
    /// Link against the system XML parser instead of building the bundled
    /// copy.
    pub use_system_libxml: bool,
    /// Interface generator override; resolved from `$SWIG` or the search path
    /// when unset.
    pub swig: Option<PathBuf>,
    /// Interpreter config tool override.
    pub python_config: Option<PathBuf>,
    /// When non-empty, only the named modules are built.
    pub only: Vec<String>,
}

impl Default for BuildOptions {
    fn default() -> BuildOptions {
        BuildOptions {
            source_root: PathBuf::from("."),
            build_dir: PathBuf::from("build"),
            py_out: None,
            third_party: PathBuf::from("third-party"),
            use_system_libxml: false,
            swig: None,
            python_config: None,
            only: Vec::new(),
        }
    }
}

impl BuildOptions {
    pub fn layout(&self) -> Layout {
        Layout {
            source_root: self.source_root.clone(),
        }
    }

    pub fn py_out(&self) -> PathBuf {
        self.py_out
            .clone()
            .unwrap_or_else(|| self.build_dir.join("python"))
    }

    pub fn libxml_src(&self) -> PathBuf {
        self.third_party.join(LIBXML_SRC_DIR)
    }
}

/// Where the solver sources sit relative to the source root.
#[derive(Debug, Clone)]
pub struct Layout {
    source_root: PathBuf,
}

impl Layout {
    pub fn new(source_root: impl Into<PathBuf>) -> Layout {
        Layout {
            source_root: source_root.into(),
        }
    }

    /// The interface definition for `name`: `solvers/<name>.i`.
    pub fn interface(&self, name: &str) -> PathBuf {
        self.solvers().join(format!("{name}.i"))
    }

    /// The per-solver source directory `solvers/<name>`.
    pub fn solver_dir(&self, name: &str) -> PathBuf {
        self.solvers().join(name)
    }

    fn solvers(&self) -> PathBuf {
        self.source_root.join("solvers")
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn layout_places_interfaces_beside_solver_dirs() {
        let layout = Layout::new("pkg");

        assert_eq!(layout.interface("Mistral"), Path::new("pkg/solvers/Mistral.i"));
        assert_eq!(
            layout.solver_dir("Mistral").join("Mistral.cpp"),
            Path::new("pkg/solvers/Mistral/Mistral.cpp")
        );
    }

    #[test]
    fn py_out_defaults_under_the_build_dir() {
        let options = BuildOptions::default();
        assert_eq!(options.py_out(), Path::new("build/python"));

        let options = BuildOptions {
            py_out: Some(PathBuf::from("shims")),
            ..BuildOptions::default()
        };
        assert_eq!(options.py_out(), Path::new("shims"));
    }
}
