//! Driving the interface generator, compiler, and linker for one module.
//!
//! Object compilation goes through the [`cc`] crate so compiler discovery,
//! `$CC`/`$CXX` overrides, and flag spelling match what the rest of the
//! ecosystem does. `cc` is built for build scripts, so the pieces it would
//! normally read from cargo's environment are pinned explicitly here.

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;

use log::debug;

use crate::discovery::find_executable;
use crate::flags;
use crate::flags::FlagSet;
use crate::flags::Platform;
use crate::options::BuildOptions;
use crate::python::PythonConfig;
use crate::target::ModuleTarget;

/// The target triple this binary was compiled for, which is also the triple
/// the modules it builds are for.
pub(crate) fn host_triple() -> &'static str {
    env!("GANTRY_HOST_TRIPLE")
}

/// The C compiler used for third-party source builds.
pub(crate) fn c_compiler() -> Result<cc::Tool, cc::Error> {
    configured_build(false).try_get_compiler()
}

fn configured_build(cpp: bool) -> cc::Build {
    let mut build = cc::Build::new();
    let _ = build
        .cpp(cpp)
        .cargo_metadata(false)
        .pic(true)
        .warnings(false)
        .opt_level(3)
        .debug(false)
        .target(host_triple())
        .host(host_triple());
    build
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no interface generator found (pass --swig or set $SWIG)")]
    GeneratorNotFound,

    #[error("could not create {}: {source}", path.display())]
    Io {
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

    #[error("interface generation for {module} failed with {status}")]
    GeneratorFailed { module: String, status: ExitStatus },

    #[error("no usable C++ compiler: {source}")]
    NoCompiler {
        #[source]
        source: cc::Error,
    },

    #[error("compiling {module} failed: {source}")]
    CompileFailed {
        module: String,
        #[source]
        source: cc::Error,
    },

    #[error("linking {module} failed with {status}")]
    LinkFailed { module: String, status: ExitStatus },
}

/// Everything needed to turn a [`ModuleTarget`] into a loadable module.
#[derive(Debug)]
pub struct Toolchain {
    swig: PathBuf,
    platform: Platform,
    flags: FlagSet,
    python: PythonConfig,
    build_dir: PathBuf,
    py_out: PathBuf,
}

impl Toolchain {
    pub fn new(
        options: &BuildOptions,
        python: PythonConfig,
        platform: Platform,
    ) -> Result<Toolchain, BuildError> {
        let swig = match &options.swig {
            Some(path) => path.clone(),
            None => resolve_swig().ok_or(BuildError::GeneratorNotFound)?,
        };

        Ok(Toolchain {
            swig,
            platform,
            flags: flags::platform_flags(platform),
            python,
            build_dir: options.build_dir.clone(),
            py_out: options.py_out(),
        })
    }

    /// Generate, compile, and link `target`; returns the built module path.
    pub fn build(&self, target: &ModuleTarget) -> Result<PathBuf, BuildError> {
        let wrapper = self.generate(target)?;
        let objects = self.compile(target, &wrapper)?;
        self.link(target, &objects)
    }

    /// Run the interface generator, producing the C++ wrapper and the
    /// host-language shim.
    fn generate(&self, target: &ModuleTarget) -> Result<PathBuf, BuildError> {
        let generated_dir = self.build_dir.join("generated");
        create_dir(&generated_dir)?;
        create_dir(&self.py_out)?;

        let stem = target
            .interface()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.name().trim_start_matches('_').to_owned());
        let wrapper = generated_dir.join(format!("{stem}_wrap.cpp"));

        let mut cmd = Command::new(&self.swig);
        let _ = cmd.arg("-python").arg("-c++");
        for dir in target.generator_include_dirs() {
            let _ = cmd.arg(format!("-I{}", dir.display()));
        }
        let _ = cmd
            .arg("-outdir")
            .arg(&self.py_out)
            .arg("-o")
            .arg(&wrapper)
            .arg(target.interface());

        debug!("running {cmd:?}");
        let status = cmd.status().map_err(|source| BuildError::Spawn {
            program: self.swig.display().to_string(),
            source,
        })?;
        if !status.success() {
            return Err(BuildError::GeneratorFailed {
                module: target.name().to_owned(),
                status,
            });
        }

        Ok(wrapper)
    }

    fn compile(&self, target: &ModuleTarget, wrapper: &Path) -> Result<Vec<PathBuf>, BuildError> {
        let out_dir = self.build_dir.join("obj").join(target.name());
        create_dir(&out_dir)?;

        let mut build = configured_build(true);
        let _ = build.out_dir(&out_dir);
        let _ = build.file(wrapper).files(target.source_files().iter());

        for dir in target.include_dirs() {
            let _ = build.include(dir);
        }
        for dir in self.python.include_dirs() {
            let _ = build.include(dir);
        }
        for (name, value) in target.defines() {
            let _ = build.define(name, value.as_deref());
        }
        for flag in &self.flags.compile {
            let _ = build.flag(flag);
        }
        for flag in target.extra_compile_flags() {
            let _ = build.flag(flag);
        }

        build
            .try_compile_intermediates()
            .map_err(|source| BuildError::CompileFailed {
                module: target.name().to_owned(),
                source,
            })
    }

    /// Link the objects into `<build_dir>/lib/<name><ext_suffix>`.
    ///
    /// Linking goes through the C++ driver so the C++ runtime is picked up
    /// without spelling it out per platform.
    fn link(&self, target: &ModuleTarget, objects: &[PathBuf]) -> Result<PathBuf, BuildError> {
        let module_dir = self.build_dir.join("lib");
        create_dir(&module_dir)?;
        let module = module_dir.join(format!("{}{}", target.name(), self.python.ext_suffix()));

        let compiler = configured_build(true)
            .try_get_compiler()
            .map_err(|source| BuildError::NoCompiler { source })?;
        let mut cmd = compiler.to_command();

        let _ = cmd.args(flags::shared_module_flags(self.platform));
        let _ = cmd.args(&self.flags.link);
        let _ = cmd.args(objects);
        for dir in target.library_dirs() {
            let _ = cmd.arg(format!("-L{}", dir.display()));
        }
        for lib in target.libraries() {
            let _ = cmd.arg(format!("-l{lib}"));
        }
        let _ = cmd.args(target.extra_link_flags());
        let _ = cmd.arg("-o").arg(&module);

        debug!("running {cmd:?}");
        let status = cmd.status().map_err(|source| BuildError::Spawn {
            program: compiler.path().display().to_string(),
            source,
        })?;
        if !status.success() {
            return Err(BuildError::LinkFailed {
                module: target.name().to_owned(),
                status,
            });
        }

        Ok(module)
    }
}

/// The interface generator that would be used, honouring `$SWIG`.
pub fn resolve_swig() -> Option<PathBuf> {
    if let Some(path) = env::var_os("SWIG") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    find_executable("swig")
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}
