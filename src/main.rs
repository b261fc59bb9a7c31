fn main() -> anyhow::Result<()> {
    scanchunk_lib::run()
}
