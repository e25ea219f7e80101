//! The solver-independent MIP encoding layer.
//!
//! `MipWrapper.cpp` is also compiled into the CPLEX and Gurobi modules; on
//! its own it only builds models without solving them.

use crate::options::Layout;
use crate::target::ModuleTarget;

pub(super) fn mip_wrapper(layout: &Layout) -> ModuleTarget {
    let home = layout.solver_dir("MipWrapper");

    ModuleTarget::new("_MipWrapper", layout.interface("MipWrapper"))
        .source(home.join("MipWrapper.cpp"))
        .generator_include(&home)
        .include(&home)
}
