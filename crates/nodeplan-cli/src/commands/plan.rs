use nodeplan_build::DockerfileGenerator;
use nodeplan_core::NodeplanConfig;
use std::path::Path;

pub fn plan(project_dir: &Path) -> anyhow::Result<()> {
    let config = NodeplanConfig::load(project_dir)?;
    let dockerfile = DockerfileGenerator::new(&config.build, &config.project).render()?;

    print!("{dockerfile}");
    Ok(())
}
