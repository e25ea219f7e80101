//! Diagnostic companion to gantry: reports which solver SDKs and host tools
//! can be located on this machine, without building anything.

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use gantry::discovery;
use gantry::discovery::Sdk;
use gantry::python::PythonConfig;
use gantry::toolchain;

#[derive(Debug, clap::Parser)]
#[command(
    name = "gantry-probe",
    about = "Reports which solver SDKs and host tools can be located."
)]
struct Cli {
    /// Fail unless the given SDK can be located. Can be provided multiple
    /// times.
    #[arg(long, value_enum, value_name = "SDK")]
    require: Vec<Sdk>,

    /// Interpreter config tool [default: python3-config from the search path].
    #[arg(long)]
    python_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut missing = Vec::new();
    for sdk in Sdk::ALL {
        match discovery::locate(sdk) {
            Some(home) => println!("{sdk}: {} ({})", home.root.display(), home.origin),
            None => {
                println!("{sdk}: not found");
                missing.push(sdk);
            }
        }
    }

    match toolchain::resolve_swig() {
        Some(path) => println!("swig: {}", path.display()),
        None => println!("swig: not found"),
    }

    match PythonConfig::discover(args.python_config.as_deref()) {
        Ok(python) => println!(
            "python: {} (module suffix {})",
            python.tool().display(),
            python.ext_suffix()
        ),
        Err(error) => println!("python: {error}"),
    }

    for sdk in args.require {
        if missing.contains(&sdk) {
            bail!("{sdk} is required but could not be located");
        }
    }

    Ok(())
}
