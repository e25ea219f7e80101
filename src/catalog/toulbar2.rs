//! The Toulbar2 cost-function-network interface.

use crate::options::Layout;
use crate::target::ModuleTarget;

use super::sources_under;
use super::CatalogError;

pub(super) fn toulbar2(layout: &Layout) -> Result<ModuleTarget, CatalogError> {
    let home = layout.solver_dir("Toulbar2");
    let sources = sources_under(home.join("lib/src"))?;

    // The cost-model defines must match what the interface code was written
    // against; changing them changes the solver's numeric types.
    Ok(ModuleTarget::new("_Toulbar2", layout.interface("Toulbar2"))
        .source(home.join("Toulbar2.cpp"))
        .sources(sources)
        .generator_include(&home)
        .include(&home)
        .include(home.join("include"))
        .define("NDEBUG", None)
        .define("LINUX", None)
        .define("LONGLONG_COST", None)
        .define("WIDE_STRING", None)
        .define("LONGDOUBLE_PROB", None)
        .define("NARYCHAR", None)
        .library("gmp")
        .compile_flags(["-Wno-overloaded-virtual"]))
}
