#![cfg(test)]

use std::fs;
use std::path::Path;

use crate::discovery;
use crate::discovery::locate_with;
use crate::discovery::DiscoveryError;
use crate::discovery::Origin;
use crate::discovery::Sdk;

use super::helpers::TempDir;

#[test]
fn environment_override_wins_over_the_search_path() {
    let dir = TempDir::new("discovery-env");
    let _ = dir.create_file("bin/x86-64_linux/cplex", "");
    let search = vec![dir.join("bin/x86-64_linux")];

    let home = locate_with(Sdk::Cplex, Some("/opt/cplex"), &search).expect("override resolves");

    assert_eq!(home.root, Path::new("/opt/cplex"));
    assert_eq!(home.origin, Origin::Environment("CPLEXDIR"));
}

#[test]
fn blank_override_falls_back_to_the_search_path() {
    let dir = TempDir::new("discovery-blank");
    let exe = dir.create_file("studio/cplex/bin/x86-64_linux/cplex", "");
    let search = vec![dir.join("studio/cplex/bin/x86-64_linux")];

    let home = locate_with(Sdk::Cplex, Some("   "), &search).expect("executable resolves");

    let resolved = exe.canonicalize().expect("the executable exists");
    let expected = resolved
        .parent()
        .and_then(Path::parent)
        .and_then(Path::parent)
        .expect("the tree is deep enough");
    assert_eq!(home.root, expected);
    assert_eq!(home.origin, Origin::Executable(resolved));
}

#[test]
fn gurobi_root_is_one_level_above_the_bin_dir() {
    let dir = TempDir::new("discovery-gurobi");
    let exe = dir.create_file("gurobi1100/linux64/bin/gurobi_cl", "");
    let search = vec![dir.join("gurobi1100/linux64/bin")];

    let home = locate_with(Sdk::Gurobi, None, &search).expect("executable resolves");

    let resolved = exe.canonicalize().expect("the executable exists");
    assert_eq!(
        home.root,
        resolved
            .parent()
            .and_then(Path::parent)
            .expect("the tree is deep enough")
    );
}

#[test]
fn unresolved_when_neither_tier_matches() {
    let dir = TempDir::new("discovery-none");
    let search = vec![dir.path().to_path_buf()];

    assert!(locate_with(Sdk::Cplex, None, &search).is_none());
    assert!(locate_with(Sdk::Gurobi, Some(""), &search).is_none());
}

#[cfg(unix)]
#[test]
fn symlinked_executables_resolve_to_the_real_installation() {
    let dir = TempDir::new("discovery-symlink");
    let exe = dir.create_file("opt/gurobi/bin/gurobi_cl", "");
    fs::create_dir_all(dir.join("links")).expect("can create the link dir");
    std::os::unix::fs::symlink(&exe, dir.join("links/gurobi_cl")).expect("can create the symlink");

    let home = locate_with(Sdk::Gurobi, None, &[dir.join("links")]).expect("symlink resolves");

    let resolved = exe.canonicalize().expect("the executable exists");
    assert_eq!(
        home.root,
        resolved
            .parent()
            .and_then(Path::parent)
            .expect("the tree is deep enough")
    );
}

#[test]
fn find_executable_skips_directories_with_the_target_name() {
    let dir = TempDir::new("discovery-dirs");
    fs::create_dir_all(dir.join("first/swig")).expect("can create the decoy directory");
    let real = dir.create_file("second/swig", "");

    let found = discovery::find_executable_in("swig", &[dir.join("first"), dir.join("second")]);

    assert_eq!(found, Some(real));
}

#[test]
fn static_lib_dir_returns_the_directory_containing_the_archive() {
    let dir = TempDir::new("discovery-static");
    let _ = dir.create_file("lib/x86-64_linux/static_pic/libcplex.a", "");
    let _ = dir.create_file("lib/readme.txt", "");

    let found = discovery::static_lib_dir(&dir.join("lib")).expect("an archive exists");

    assert_eq!(found, dir.join("lib/x86-64_linux/static_pic"));
}

#[test]
fn static_lib_dir_fails_without_archives() {
    let dir = TempDir::new("discovery-nostatic");
    let _ = dir.create_file("lib/libfoo.so", "");

    let result = discovery::static_lib_dir(dir.path());

    assert!(matches!(
        result,
        Err(DiscoveryError::NoStaticLibraries { .. })
    ));
}

#[test]
fn versioned_lib_stem_reads_the_release_number_off_the_filename() {
    let dir = TempDir::new("discovery-versioned");
    let _ = dir.create_file("lib/libgurobi_c++.a", "");
    let _ = dir.create_file("lib/libgurobi110.so", "");

    let stem = discovery::versioned_lib_stem(&dir.join("lib"), "gurobi").expect("library exists");

    assert_eq!(stem, "gurobi110");
}

#[test]
fn versioned_lib_stem_fails_without_a_matching_library() {
    let dir = TempDir::new("discovery-unversioned");
    let _ = dir.create_file("lib/libgurobi.so", "");

    let result = discovery::versioned_lib_stem(&dir.join("lib"), "gurobi");

    assert!(matches!(
        result,
        Err(DiscoveryError::NoVersionedLibrary { .. })
    ));
}
