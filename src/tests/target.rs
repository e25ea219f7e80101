#![cfg(test)]

use std::path::PathBuf;

use crate::target;
use crate::target::ModuleTarget;

use super::helpers::TempDir;

#[test]
fn collect_sources_filters_and_sorts() {
    let dir = TempDir::new("target-collect");
    let _ = dir.create_file("src/zeta.cpp", "");
    let _ = dir.create_file("src/alpha.cc", "");
    let _ = dir.create_file("src/Solver.C", "");
    let _ = dir.create_file("src/header.hpp", "");
    let _ = dir.create_file("src/README", "");
    let _ = dir.create_file("src/nested/inner.cpp", "");

    let sources = target::collect_sources(&dir.join("src")).expect("the directory exists");

    assert_eq!(
        sources,
        [
            dir.join("src/Solver.C"),
            dir.join("src/alpha.cc"),
            dir.join("src/zeta.cpp"),
        ]
    );
}

#[test]
fn collect_sources_reports_a_missing_directory() {
    let dir = TempDir::new("target-missing");

    assert!(target::collect_sources(&dir.join("absent")).is_err());
}

#[test]
fn builder_accumulates_in_declaration_order() {
    let target = ModuleTarget::new("_Demo", "solvers/Demo.i")
        .source("a.cpp")
        .include("first")
        .include("second")
        .define("NDEBUG", None)
        .define("COST", Some("long"))
        .library("m")
        .compile_flags(["-fPIC", "-fexceptions"]);

    assert_eq!(target.name(), "_Demo");
    assert_eq!(target.interface(), PathBuf::from("solvers/Demo.i"));
    assert_eq!(target.source_files(), [PathBuf::from("a.cpp")]);
    assert_eq!(
        target.include_dirs(),
        [PathBuf::from("first"), PathBuf::from("second")]
    );
    assert_eq!(
        target.defines(),
        [
            ("NDEBUG".to_owned(), None),
            ("COST".to_owned(), Some("long".to_owned())),
        ]
    );
    assert_eq!(target.libraries(), ["m"]);
    assert_eq!(target.extra_compile_flags(), ["-fPIC", "-fexceptions"]);
}

#[test]
fn late_flag_injection_appends_after_declared_flags() {
    let mut target = ModuleTarget::new("_Demo", "Demo.i").compile_flags(["-O3"]);

    target.push_compile_flags(["-I/xml/include".to_owned()]);
    target.push_link_flags(["-lxml2".to_owned()]);

    assert_eq!(target.extra_compile_flags(), ["-O3", "-I/xml/include"]);
    assert_eq!(target.extra_link_flags(), ["-lxml2"]);
}
