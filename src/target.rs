//! Declarative description of a single native extension module.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// File extensions treated as compilable sources when collecting a
/// directory.
const SOURCE_EXTENSIONS: [&str; 5] = ["c", "cc", "cpp", "cxx", "C"];

/// One native module: an interface definition plus everything needed to
/// compile and link the solver it wraps.
///
/// A target says nothing about *how* to build; it is consumed by
/// [`crate::toolchain::Toolchain`].
#[derive(Debug, Clone, Default)]
pub struct ModuleTarget {
    name: String,
    interface: PathBuf,
    sources: Vec<PathBuf>,
    include_dirs: Vec<PathBuf>,
    generator_include_dirs: Vec<PathBuf>,
    defines: Vec<(String, Option<String>)>,
    libraries: Vec<String>,
    library_dirs: Vec<PathBuf>,
    compile_flags: Vec<String>,
    link_flags: Vec<String>,
}

impl ModuleTarget {
    pub fn new(name: impl Into<String>, interface: impl Into<PathBuf>) -> ModuleTarget {
        ModuleTarget {
            name: name.into(),
            interface: interface.into(),
            ..ModuleTarget::default()
        }
    }

    pub fn source(mut self, path: impl Into<PathBuf>) -> ModuleTarget {
        self.sources.push(path.into());
        self
    }

    pub fn sources(mut self, paths: impl IntoIterator<Item = PathBuf>) -> ModuleTarget {
        self.sources.extend(paths);
        self
    }

    pub fn include(mut self, dir: impl Into<PathBuf>) -> ModuleTarget {
        self.include_dirs.push(dir.into());
        self
    }

    /// Add a directory the interface generator resolves `%include` against.
    pub fn generator_include(mut self, dir: impl Into<PathBuf>) -> ModuleTarget {
        self.generator_include_dirs.push(dir.into());
        self
    }

    pub fn define(mut self, name: &str, value: Option<&str>) -> ModuleTarget {
        self.defines
            .push((name.to_owned(), value.map(str::to_owned)));
        self
    }

    pub fn library(mut self, name: &str) -> ModuleTarget {
        self.libraries.push(name.to_owned());
        self
    }

    pub fn library_dir(mut self, dir: impl Into<PathBuf>) -> ModuleTarget {
        self.library_dirs.push(dir.into());
        self
    }

    pub fn compile_flags<'a>(mut self, flags: impl IntoIterator<Item = &'a str>) -> ModuleTarget {
        self.compile_flags.extend(flags.into_iter().map(str::to_owned));
        self
    }

    pub fn link_flags<'a>(mut self, flags: impl IntoIterator<Item = &'a str>) -> ModuleTarget {
        self.link_flags.extend(flags.into_iter().map(str::to_owned));
        self
    }

    /// Append flags after construction, for flags only known at build time.
    pub fn push_compile_flags(&mut self, flags: impl IntoIterator<Item = String>) {
        self.compile_flags.extend(flags);
    }

    pub fn push_link_flags(&mut self, flags: impl IntoIterator<Item = String>) {
        self.link_flags.extend(flags);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interface(&self) -> &Path {
        &self.interface
    }

    pub fn source_files(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn include_dirs(&self) -> &[PathBuf] {
        &self.include_dirs
    }

    pub fn generator_include_dirs(&self) -> &[PathBuf] {
        &self.generator_include_dirs
    }

    pub fn defines(&self) -> &[(String, Option<String>)] {
        &self.defines
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn library_dirs(&self) -> &[PathBuf] {
        &self.library_dirs
    }

    pub fn extra_compile_flags(&self) -> &[String] {
        &self.compile_flags
    }

    pub fn extra_link_flags(&self) -> &[String] {
        &self.link_flags
    }
}

/// Collect every compilable source directly inside `dir`, sorted by name.
///
/// Non-source files and subdirectories are ignored. Sorting keeps the
/// compile order stable across filesystems.
pub fn collect_sources(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_source = path
            .extension()
            .is_some_and(|ext| SOURCE_EXTENSIONS.iter().any(|known| ext == *known));
        if path.is_file() && is_source {
            sources.push(path);
        }
    }

    sources.sort();
    Ok(sources)
}
