//! Building the bundled XML parser that the Mistral interface reads models
//! with.
//!
//! The parser is configured and installed once into `<build_dir>/libxml`;
//! later runs find the install tree and skip straight to asking its
//! `xml2-config` for flags. `--use-system-libxml` bypasses the source build
//! and queries the system tool instead.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;

use log::debug;
use log::info;

use crate::config_tool;
use crate::config_tool::ConfigToolError;
use crate::discovery::find_executable;
use crate::flags;
use crate::flags::Platform;
use crate::options::BuildOptions;
use crate::target::ModuleTarget;
use crate::toolchain;

/// Extra flags for the one target that links the XML parser, as reported by
/// `xml2-config`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlFlags {
    pub compile: Vec<String>,
    pub link: Vec<String>,
}

impl XmlFlags {
    pub fn apply_to(&self, target: &mut ModuleTarget) {
        target.push_compile_flags(self.compile.iter().cloned());
        target.push_link_flags(self.link.iter().cloned());
    }
}

#[derive(Debug, thiserror::Error)]
pub enum XmlBuildError {
    #[error("bundled XML parser sources not found at {}", path.display())]
    MissingSources { path: PathBuf },

    #[error("no xml2-config on the search path")]
    SystemToolMissing,

    #[error("no usable C compiler: {source}")]
    Compiler {
        #[source]
        source: cc::Error,
    },

    #[error("could not prepare {}: {source}", path.display())]
    Scratch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("XML parser configure failed with {status}")]
    ConfigureFailed { status: ExitStatus },

    #[error("XML parser install failed with {status}")]
    InstallFailed { status: ExitStatus },

    #[error(transparent)]
    FlagQuery(#[from] ConfigToolError),

    #[error("could not parse xml2-config output {line:?}: {source}")]
    MalformedFlags {
        line: String,
        source: flagline::ParseError,
    },
}

/// Make the XML parser available and report the flags to build against it.
pub fn prepare(options: &BuildOptions, platform: Platform) -> Result<XmlFlags, XmlBuildError> {
    if options.use_system_libxml {
        let tool =
            find_executable("xml2-config").ok_or(XmlBuildError::SystemToolMissing)?;
        return query_flags(&tool);
    }

    let install_dir = options.build_dir.join("libxml");
    if install_dir.exists() {
        debug!(
            "bundled XML parser already installed at {}",
            install_dir.display()
        );
    } else {
        let compiler = toolchain::c_compiler()
            .map_err(|source| XmlBuildError::Compiler { source })?;
        let cflags = flags::platform_flags(platform).compile.join(" ");

        build_from_source(
            &options.libxml_src(),
            &options.build_dir,
            &install_dir,
            &cflags,
            compiler.path(),
        )?;
    }

    query_flags(&install_dir.join("bin").join("xml2-config"))
}

/// Configure and install the bundled parser into `install_dir`.
///
/// Configuration runs in a scratch directory that is wiped if it is left
/// over from an earlier failed attempt, and again if configure itself fails.
pub(crate) fn build_from_source(
    src: &Path,
    build_dir: &Path,
    install_dir: &Path,
    cflags: &str,
    cc_path: &Path,
) -> Result<(), XmlBuildError> {
    let configure = src.join("configure");
    if !configure.is_file() {
        return Err(XmlBuildError::MissingSources {
            path: src.to_path_buf(),
        });
    }

    let scratch = build_dir.join("libxml-build");
    if scratch.exists() {
        remove_scratch(&scratch)?;
    }
    fs::create_dir_all(&scratch).map_err(|source| XmlBuildError::Scratch {
        path: scratch.clone(),
        source,
    })?;

    // configure is run from inside the scratch directory, so both it and the
    // install prefix have to be absolute.
    let configure = absolute(&configure)?;
    let prefix = absolute(install_dir)?;

    info!("building the bundled XML parser");
    let status = Command::new(&configure)
        .arg("--enable-static")
        .arg(format!("--prefix={}", prefix.display()))
        .arg(format!("CFLAGS={cflags}"))
        .arg(format!("CC={}", cc_path.display()))
        .current_dir(&scratch)
        .status()
        .map_err(|source| XmlBuildError::Spawn {
            program: configure.display().to_string(),
            source,
        })?;
    if !status.success() {
        remove_scratch(&scratch)?;
        return Err(XmlBuildError::ConfigureFailed { status });
    }

    let status = Command::new("make")
        .arg("install")
        .current_dir(&scratch)
        .status()
        .map_err(|source| XmlBuildError::Spawn {
            program: "make".to_owned(),
            source,
        })?;
    if !status.success() {
        return Err(XmlBuildError::InstallFailed { status });
    }

    Ok(())
}

pub(crate) fn query_flags(tool: &Path) -> Result<XmlFlags, XmlBuildError> {
    Ok(XmlFlags {
        compile: query_words(tool, "--cflags")?,
        link: query_words(tool, "--libs")?,
    })
}

fn query_words(tool: &Path, flag: &str) -> Result<Vec<String>, XmlBuildError> {
    let line = config_tool::query(tool, flag)?;
    flagline::split(&line).map_err(|source| XmlBuildError::MalformedFlags { line, source })
}

fn remove_scratch(scratch: &Path) -> Result<(), XmlBuildError> {
    fs::remove_dir_all(scratch).map_err(|source| XmlBuildError::Scratch {
        path: scratch.to_path_buf(),
        source,
    })
}

fn absolute(path: &Path) -> Result<PathBuf, XmlBuildError> {
    std::path::absolute(path).map_err(|source| XmlBuildError::Scratch {
        path: path.to_path_buf(),
        source,
    })
}
