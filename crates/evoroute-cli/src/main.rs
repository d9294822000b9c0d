mod command;
mod maps;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
