use std::env;

fn main() {
    // The solver modules are always built for the machine gantry itself runs
    // on; the toolchain points `cc` at this triple at run time.
    println!(
        "cargo:rustc-env=GANTRY_HOST_TRIPLE={}",
        env::var("TARGET").expect("cargo sets TARGET")
    );
    println!("cargo:rerun-if-changed=build.rs");
}
