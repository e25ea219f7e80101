//! The IBM ILOG CPLEX interface, declared only when an installation is
//! found.

use std::path::PathBuf;

use crate::discovery;
use crate::discovery::SdkHome;
use crate::flags::Platform;
use crate::options::Layout;
use crate::target::ModuleTarget;

use super::CatalogError;

/// The Concert C++ API ships as a sibling tree of the CPLEX home.
fn concert_dir(home: &SdkHome) -> PathBuf {
    home.root.parent().unwrap_or(&home.root).join("concert")
}

pub(super) fn cplex(
    layout: &Layout,
    home: &SdkHome,
    platform: Platform,
) -> Result<ModuleTarget, CatalogError> {
    let concert = concert_dir(home);
    let cplex_libs = discovery::static_lib_dir(&home.root.join("lib"))?;
    let concert_libs = discovery::static_lib_dir(&concert.join("lib"))?;

    let solver = layout.solver_dir("CPLEX");
    let mip = layout.solver_dir("MipWrapper");

    // IL_STD switches the Concert headers to the std:: iostreams.
    let mut target = ModuleTarget::new("_CPLEX", layout.interface("CPLEX"))
        .source(solver.join("CPLEX.cpp"))
        .source(mip.join("MipWrapper.cpp"))
        .generator_include(&solver)
        .generator_include(&mip)
        .include(&solver)
        .include(&mip)
        .include(home.root.join("include"))
        .include(concert.join("include"))
        .library_dir(cplex_libs)
        .library_dir(concert_libs)
        .define("_UNIX", None)
        .define("NDEBUG", None)
        .define("IL_STD", None)
        .library("concert")
        .library("ilocplex")
        .library("cplex")
        .library("m")
        .library("pthread")
        .compile_flags(["-O", "-fPIC", "-fexceptions", "-Qunused-arguments"]);

    if platform == Platform::Linux {
        target = target.compile_flags(["-fno-strict-aliasing"]);
    }

    Ok(target)
}
