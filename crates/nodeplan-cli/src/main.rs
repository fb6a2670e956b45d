mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nodeplan_core::PlanType;

#[derive(Parser)]
#[command(
    name = "nodeplan",
    about = "Render Dockerfiles for Node.js projects and stage their static output"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Dockerfile for the project
    Plan {
        /// Project directory containing nodeplan.toml
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Extract static output from a built image into .zeabur/output
    Transform {
        /// Built image reference
        #[arg(long)]
        image: String,
        /// Working directory receiving .zeabur/output
        #[arg(long, default_value = ".")]
        workdir: PathBuf,
        /// Kind of plan that produced the image (static, nodejs)
        #[arg(long, default_value = "nodejs", value_parser = str::parse::<PlanType>)]
        plan_type: PlanType,
        /// Plan metadata in KEY=VALUE format (e.g. framework=hexo, outputDir=dist)
        #[arg(long = "meta", value_name = "KEY=VALUE")]
        meta: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // stdout carries the rendered plan; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { dir } => commands::plan(&dir)?,
        Commands::Transform {
            image,
            workdir,
            plan_type,
            meta,
        } => commands::transform(&image, &workdir, plan_type, &meta)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_plan_type(args: &[&str]) -> PlanType {
        let mut argv = vec!["nodeplan", "transform", "--image", "img"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Transform { plan_type, .. } => plan_type,
            Commands::Plan { .. } => panic!("expected transform"),
        }
    }

    #[test]
    fn plan_type_defaults_to_nodejs() {
        assert_eq!(parse_plan_type(&[]), PlanType::Nodejs);
    }

    #[test]
    fn plan_type_parses_through_from_str() {
        assert_eq!(parse_plan_type(&["--plan-type", "static"]), PlanType::Static);
        assert_eq!(parse_plan_type(&["--plan-type", "nodejs"]), PlanType::Nodejs);
    }

    #[test]
    fn unknown_plan_type_is_rejected() {
        let argv = ["nodeplan", "transform", "--image", "img", "--plan-type", "Static"];
        let err = Cli::try_parse_from(argv).err().unwrap().to_string();
        assert!(err.contains("unknown plan type"), "got: {err}");
    }
}
