//! The build-target catalog: one declaration per solver interface.
//!
//! Seven targets are unconditional. The two commercial interfaces are only
//! declared when their SDK can be located; a missing SDK downgrades the
//! interface to a logged notice, while a located-but-broken installation is
//! an error.

use std::io;
use std::path::PathBuf;

use enumset::EnumSet;
use log::info;
use log::warn;

use crate::discovery;
use crate::discovery::DiscoveryError;
use crate::discovery::Sdk;
use crate::discovery::SdkHome;
use crate::flags::Platform;
use crate::options::Layout;
use crate::target;
use crate::target::ModuleTarget;

mod cplex;
mod gurobi;
mod mip;
mod mistral;
mod sat;
mod toulbar2;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not list sources under {}: {source}", dir.display())]
    SourceListing {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("no module named {name}; available: {}", available.join(", "))]
    UnknownModule { name: String, available: Vec<String> },
}

/// The declared targets plus the SDKs that could not be found.
#[derive(Debug)]
pub struct Catalog {
    pub targets: Vec<ModuleTarget>,
    pub skipped: EnumSet<Sdk>,
}

impl Catalog {
    /// Reduce the catalog to the modules named in `only`; an empty filter
    /// keeps everything. Names may be given with or without the leading
    /// underscore.
    pub fn select(self, only: &[String]) -> Result<Vec<ModuleTarget>, CatalogError> {
        if only.is_empty() {
            return Ok(self.targets);
        }

        for name in only {
            if !self
                .targets
                .iter()
                .any(|target| name_matches(target.name(), name))
            {
                return Err(CatalogError::UnknownModule {
                    name: name.clone(),
                    available: self
                        .targets
                        .iter()
                        .map(|target| target.name().to_owned())
                        .collect(),
                });
            }
        }

        Ok(self
            .targets
            .into_iter()
            .filter(|target| only.iter().any(|name| name_matches(target.name(), name)))
            .collect())
    }
}

fn name_matches(module: &str, requested: &str) -> bool {
    module == requested || module.trim_start_matches('_') == requested
}

/// Whether `target` reads models through the bundled XML parser.
pub fn needs_xml_parser(target: &ModuleTarget) -> bool {
    target.name() == mistral::MISTRAL
}

/// Declare every buildable target for the tree described by `layout`.
pub fn assemble(layout: &Layout, platform: Platform) -> Result<Catalog, CatalogError> {
    assemble_with(layout, platform, discovery::locate)
}

pub(crate) fn assemble_with(
    layout: &Layout,
    platform: Platform,
    locate: impl Fn(Sdk) -> Option<SdkHome>,
) -> Result<Catalog, CatalogError> {
    let mut targets = vec![
        mistral::mistral(layout)?,
        mistral::mistral2(layout)?,
        toulbar2::toulbar2(layout)?,
        mip::mip_wrapper(layout),
        sat::sat_wrapper(layout),
        sat::minisat(layout),
        sat::walksat(layout),
    ];

    let mut skipped = EnumSet::new();
    for sdk in Sdk::ALL {
        match locate(sdk) {
            Some(home) => {
                info!("found {sdk} at {} ({})", home.root.display(), home.origin);
                targets.push(match sdk {
                    Sdk::Cplex => cplex::cplex(layout, &home, platform)?,
                    Sdk::Gurobi => gurobi::gurobi(layout, &home)?,
                });
            }
            None => {
                warn!(
                    "Could not locate {sdk} installation on your system, \
                     the interface has been disabled."
                );
                skipped |= sdk;
            }
        }
    }

    Ok(Catalog { targets, skipped })
}

fn sources_under(dir: PathBuf) -> Result<Vec<PathBuf>, CatalogError> {
    target::collect_sources(&dir).map_err(|source| CatalogError::SourceListing { dir, source })
}
