#![cfg(test)]
#![cfg(unix)]

use std::path::PathBuf;

use crate::python::PythonConfig;

use super::helpers::TempDir;

#[test]
fn interpreter_includes_and_suffix_come_from_the_config_tool() {
    let dir = TempDir::new("python-config");
    let tool = dir.create_executable(
        "python3-config",
        "#!/bin/sh\n\
         case \"$1\" in\n\
         --includes) echo '-I/usr/include/python3.11 -I/usr/include/python3.11' ;;\n\
         --extension-suffix) echo '.cpython-311-x86_64-linux-gnu.so' ;;\n\
         esac\n",
    );

    let config = PythonConfig::discover(Some(&tool)).expect("the tool answers");

    // The include dir is reported twice (include + platinclude); it is only
    // kept once.
    assert_eq!(
        config.include_dirs(),
        [PathBuf::from("/usr/include/python3.11")]
    );
    assert_eq!(config.ext_suffix(), ".cpython-311-x86_64-linux-gnu.so");
}

#[test]
fn missing_extension_suffix_support_falls_back_to_so() {
    let dir = TempDir::new("python-config-old");
    let tool = dir.create_executable(
        "python-config",
        "#!/bin/sh\n\
         if [ \"$1\" = --includes ]; then\n\
         echo '-I/usr/include/python2.7'\n\
         else\n\
         exit 2\n\
         fi\n",
    );

    let config = PythonConfig::discover(Some(&tool)).expect("includes still answer");

    assert_eq!(config.ext_suffix(), ".so");
}

#[test]
fn a_failing_includes_query_is_fatal() {
    let dir = TempDir::new("python-config-broken");
    let tool = dir.create_executable("python3-config", "#!/bin/sh\nexit 1\n");

    assert!(PythonConfig::discover(Some(&tool)).is_err());
}
