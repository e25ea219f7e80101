fn main() -> anyhow::Result<()> {
    gantry::runner::run()
}
