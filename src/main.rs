fn main() -> anyhow::Result<()> {
    sbml_errgen::run()
}
