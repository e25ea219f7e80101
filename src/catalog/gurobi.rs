//! The Gurobi interface, declared only when an installation is found.

use crate::discovery;
use crate::discovery::SdkHome;
use crate::options::Layout;
use crate::target::ModuleTarget;

use super::CatalogError;

pub(super) fn gurobi(layout: &Layout, home: &SdkHome) -> Result<ModuleTarget, CatalogError> {
    let lib_dir = home.root.join("lib");
    // The core library's name carries the release number (libgurobi110.so),
    // so the link stem has to be read off the installation.
    let core = discovery::versioned_lib_stem(&lib_dir, "gurobi")?;

    let solver = layout.solver_dir("Gurobi");
    let mip = layout.solver_dir("MipWrapper");

    Ok(ModuleTarget::new("_Gurobi", layout.interface("Gurobi"))
        .source(solver.join("Gurobi.cpp"))
        .source(mip.join("MipWrapper.cpp"))
        .generator_include(&solver)
        .generator_include(&mip)
        .include(&solver)
        .include(&mip)
        .include(home.root.join("include"))
        .library_dir(lib_dir)
        .library("gurobi_c++")
        .library(&core)
        .compile_flags(["-fPIC", "-fexceptions", "-Qunused-arguments"]))
}
