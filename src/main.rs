fn main() -> anyhow::Result<()> {
    attribute_groups::app::run()
}
