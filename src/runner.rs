//! Command-line front end for the build tool.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::catalog;
use crate::flags::Platform;
use crate::options::BuildOptions;
use crate::python::PythonConfig;
use crate::toolchain::Toolchain;
use crate::vendored;

#[derive(Debug, clap::Parser)]
#[command(
    name = "gantry",
    version,
    about = "Builds the native solver interface modules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Action,
}

#[derive(Debug, clap::Subcommand)]
pub enum Action {
    /// Generate, compile, and link every enabled module.
    Build {
        #[command(flatten)]
        options: CommonArgs,
    },

    /// Show what would be built, without building anything.
    List {
        #[command(flatten)]
        options: CommonArgs,
    },
}

#[derive(Debug, clap::Args)]
pub struct CommonArgs {
    /// Directory containing the solvers/ tree.
    #[arg(long, default_value = ".")]
    source_root: PathBuf,

    /// Scratch directory for generated sources, objects, and built modules.
    #[arg(long, default_value = "build")]
    build_dir: PathBuf,

    /// Directory the generated host-language shims are written to
    /// [default: <build-dir>/python].
    #[arg(long)]
    py_out: Option<PathBuf>,

    /// Directory holding the bundled third-party sources.
    #[arg(long, default_value = "third-party")]
    third_party: PathBuf,

    /// Link against the system XML parser instead of building the bundled copy.
    #[arg(long)]
    use_system_libxml: bool,

    /// Interface generator executable [default: $SWIG, or swig from the
    /// search path].
    #[arg(long)]
    swig: Option<PathBuf>,

    /// Interpreter config tool [default: python3-config from the search path].
    #[arg(long)]
    python_config: Option<PathBuf>,

    /// Only handle the named module. Can be provided multiple times.
    #[arg(long = "only", value_name = "MODULE")]
    only: Vec<String>,
}

impl From<CommonArgs> for BuildOptions {
    fn from(args: CommonArgs) -> BuildOptions {
        BuildOptions {
            source_root: args.source_root,
            build_dir: args.build_dir,
            py_out: args.py_out,
            third_party: args.third_party,
            use_system_libxml: args.use_system_libxml,
            swig: args.swig,
            python_config: args.python_config,
            only: args.only,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match args.command {
        Action::Build { options } => build(options.into()),
        Action::List { options } => list(options.into()),
    }
}

pub fn build(options: BuildOptions) -> anyhow::Result<()> {
    let platform = Platform::host();
    let layout = options.layout();

    let python = PythonConfig::discover(options.python_config.as_deref())
        .context("inspecting the host interpreter")?;

    let catalog = catalog::assemble(&layout, platform)?;
    let mut targets = catalog.select(&options.only)?;

    if targets.iter().any(|target| catalog::needs_xml_parser(target)) {
        let xml =
            vendored::prepare(&options, platform).context("preparing the bundled XML parser")?;
        for target in &mut targets {
            if catalog::needs_xml_parser(target) {
                xml.apply_to(target);
            }
        }
    }

    let toolchain = Toolchain::new(&options, python, platform)?;
    for target in &targets {
        info!("building {}", target.name());
        let module = toolchain
            .build(target)
            .with_context(|| format!("building {}", target.name()))?;
        info!("wrote {}", module.display());
    }

    info!("built {} module(s)", targets.len());
    Ok(())
}

pub fn list(options: BuildOptions) -> anyhow::Result<()> {
    let layout = options.layout();

    let catalog = catalog::assemble(&layout, Platform::host())?;
    let skipped = catalog.skipped;
    let targets = catalog.select(&options.only)?;

    for target in &targets {
        println!(
            "{}: {} source file(s), interface {}",
            target.name(),
            target.source_files().len(),
            target.interface().display()
        );
    }
    for sdk in skipped {
        println!("{sdk}: installation not found, interface disabled");
    }

    Ok(())
}
