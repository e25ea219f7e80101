//! The two generations of the Mistral interface.

use crate::options::Layout;
use crate::target::ModuleTarget;

use super::sources_under;
use super::CatalogError;

pub(super) const MISTRAL: &str = "_Mistral";

const COMPILE_FLAGS: [&str; 4] = [
    "-fPIC",
    "-Wunused-label",
    "-fexceptions",
    "-Wno-overloaded-virtual",
];

/// First-generation Mistral, the only module that reads models through the
/// bundled XML parser; its parser flags are injected once that build step
/// has run.
pub(super) fn mistral(layout: &Layout) -> Result<ModuleTarget, CatalogError> {
    let home = layout.solver_dir("Mistral");
    let sources = sources_under(home.join("mistral/lib/src"))?;

    Ok(ModuleTarget::new(MISTRAL, layout.interface("Mistral"))
        .source(home.join("Mistral.cpp"))
        .sources(sources)
        .generator_include(&home)
        .include(&home)
        .include(home.join("mistral/include"))
        .define("_UNIX", None)
        .library("m")
        .compile_flags(COMPILE_FLAGS))
}

pub(super) fn mistral2(layout: &Layout) -> Result<ModuleTarget, CatalogError> {
    let home = layout.solver_dir("Mistral2");
    let sources = sources_under(home.join("mistral/src/lib"))?;

    Ok(ModuleTarget::new("_Mistral2", layout.interface("Mistral2"))
        .source(home.join("Mistral2.cpp"))
        .sources(sources)
        .generator_include(&home)
        .include(&home)
        .include(home.join("mistral/src/include"))
        .include(home.join("mistral/tools/tclap/include"))
        .library("m")
        .compile_flags(COMPILE_FLAGS))
}
