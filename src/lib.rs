//! Build orchestration for a family of native solver interface modules.
//!
//! Each supported solver ships as a SWIG-generated extension module for the
//! host interpreter. This crate declares those modules as [`ModuleTarget`]s,
//! locates the optional commercial SDKs and host tools they depend on, builds
//! the bundled XML parser one of them links against, and drives the
//! generate/compile/link pipeline for every enabled target.
//!
//! The pieces are deliberately separable: [`catalog`] only declares targets,
//! [`discovery`] only finds things on the machine, and [`toolchain`] is the
//! only module that runs the compiler.

pub mod catalog;
mod config_tool;
pub mod discovery;
pub mod flags;
pub mod options;
pub mod python;
pub mod runner;
pub mod target;
pub mod toolchain;
pub mod vendored;

mod tests;

pub use config_tool::ConfigToolError;
pub use options::BuildOptions;
pub use options::Layout;
pub use target::ModuleTarget;
