//! The SAT-based interfaces: the shared clause encoder plus the MiniSat and
//! Walksat backends.

use std::path::PathBuf;

use crate::options::Layout;
use crate::target::ModuleTarget;

fn minisat_src(layout: &Layout) -> PathBuf {
    layout.solver_dir("MiniSat").join("minisat_src")
}

/// The backend-independent encoder. It still compiles against MiniSat's
/// headers for the literal and clause types.
pub(super) fn sat_wrapper(layout: &Layout) -> ModuleTarget {
    let home = layout.solver_dir("SatWrapper");
    let minisat = minisat_src(layout);

    ModuleTarget::new("_SatWrapper", layout.interface("SatWrapper"))
        .source(home.join("SatWrapper.cpp"))
        .generator_include(&home)
        .generator_include(minisat.join("core"))
        .generator_include(minisat.join("mtl"))
        .include(&home)
        .include(minisat.join("core"))
        .include(minisat.join("mtl"))
}

pub(super) fn minisat(layout: &Layout) -> ModuleTarget {
    let home = layout.solver_dir("MiniSat");
    let sat = layout.solver_dir("SatWrapper");
    let src = home.join("minisat_src");

    ModuleTarget::new("_MiniSat", layout.interface("MiniSat"))
        .source(home.join("MiniSat.cpp"))
        .source(sat.join("SatWrapper.cpp"))
        .source(home.join("SimpSolver.cpp"))
        .source(src.join("core/Solver.C"))
        .generator_include(&home)
        .generator_include(&sat)
        .generator_include(src.join("core"))
        .generator_include(src.join("mtl"))
        .include(&home)
        .include(&sat)
        .include(src.join("core"))
        .include(src.join("mtl"))
}

pub(super) fn walksat(layout: &Layout) -> ModuleTarget {
    let home = layout.solver_dir("Walksat");
    let sat = layout.solver_dir("SatWrapper");
    let minisat = minisat_src(layout);

    // -ffloat-store: walksat's break-count scoring is sensitive to excess
    // x87 precision.
    ModuleTarget::new("_Walksat", layout.interface("Walksat"))
        .source(home.join("Walksat.cpp"))
        .source(home.join("walksat_src/cpp_walksat.cpp"))
        .source(sat.join("SatWrapper.cpp"))
        .generator_include(&home)
        .generator_include(&sat)
        .generator_include(home.join("walksat_src"))
        .generator_include(minisat.join("core"))
        .generator_include(minisat.join("mtl"))
        .include(&home)
        .include(&sat)
        .include(home.join("walksat_src"))
        .include(minisat.join("core"))
        .include(minisat.join("mtl"))
        .compile_flags(["-ffloat-store", "-Wno-format"])
}
