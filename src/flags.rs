//! Per-platform compiler and linker flag sets shared by every target.

/// The operating systems the build behaves differently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Other,
}

impl Platform {
    pub fn host() -> Platform {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }
}

/// Compiler and linker flags applied to every module on one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    pub compile: Vec<String>,
    pub link: Vec<String>,
}

/// The base flag set for `platform`.
///
/// Everything is built `-O3`. On macOS the modules are pinned to x86_64 with
/// the GNU C++ runtime, and a handful of warnings the generated binding code
/// trips constantly are silenced.
pub fn platform_flags(platform: Platform) -> FlagSet {
    let mut flags = FlagSet {
        compile: vec!["-O3".to_owned()],
        link: Vec::new(),
    };

    if platform == Platform::MacOs {
        flags.compile.extend(
            [
                "-stdlib=libstdc++",
                "-Wno-shorten-64-to-32",
                "-arch",
                "x86_64",
                "-Wno-self-assign",
                "-Wno-shadow",
                "-Wno-unused-label",
            ]
            .map(String::from),
        );
        flags
            .link
            .extend(["-arch", "x86_64", "-stdlib=libstdc++"].map(String::from));
    }

    flags
}

/// The linker flags that turn a set of objects into a loadable module.
pub fn shared_module_flags(platform: Platform) -> &'static [&'static str] {
    match platform {
        // Bundles may leave interpreter symbols unresolved until load time.
        Platform::MacOs => &["-bundle", "-undefined", "dynamic_lookup"],
        Platform::Linux | Platform::Other => &["-shared"],
    }
}
