#![cfg(test)]

use crate::flags;
use crate::flags::Platform;

#[test]
fn every_platform_builds_optimised() {
    let flags = flags::platform_flags(Platform::Linux);

    assert_eq!(flags.compile, ["-O3"]);
    assert!(flags.link.is_empty());
}

#[test]
fn macos_pins_the_architecture_for_compile_and_link() {
    let flags = flags::platform_flags(Platform::MacOs);

    let arch = flags
        .compile
        .iter()
        .position(|flag| flag == "-arch")
        .expect("the architecture is pinned");
    assert_eq!(flags.compile[arch + 1], "x86_64");
    assert_eq!(flags.link, ["-arch", "x86_64", "-stdlib=libstdc++"]);
}

#[test]
fn modules_link_as_loadable_bundles_on_macos() {
    assert_eq!(flags::shared_module_flags(Platform::Linux), ["-shared"]);
    assert_eq!(flags::shared_module_flags(Platform::Other), ["-shared"]);
    assert_eq!(
        flags::shared_module_flags(Platform::MacOs),
        ["-bundle", "-undefined", "dynamic_lookup"]
    );
}
