use crate::maps;

#[derive(Debug, Default, Clone, clap::Args)]
pub(crate) struct MapsArg {}

pub(crate) fn run(_arg: &MapsArg) -> anyhow::Result<()> {
    for map in maps::BUILTIN_MAPS {
        let field = (map.build)()?;
        println!(
            "{:2}  {:<14} {}x{}  {} obstacle(s)  {} -> {}",
            map.id,
            map.name,
            field.width(),
            field.height(),
            field.obstacles().len(),
            field.start(),
            field.end(),
        );
    }
    Ok(())
}
