//! VMON CLI - Command line tool for the vegetation monitor.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "vmon-cli",
    version,
    about = "NDVI & SAVI vegetation monitoring toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: vmon_cli::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    vmon_cli::run(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmon_cli::Command;
    use vmon_core::index::IndexType;

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["vmon-cli", "render", "--aoi", "field.geojson"]).unwrap();
        match cli.command {
            Command::Render {
                aoi,
                index,
                start,
                end,
                out_dir,
                seed,
            } => {
                assert_eq!(aoi.to_str(), Some("field.geojson"));
                assert_eq!(index, IndexType::Ndvi);
                assert!(start.is_none());
                assert!(end.is_none());
                assert_eq!(out_dir.to_str(), Some("."));
                assert!(seed.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn render_with_index_and_dates() {
        let cli = Cli::try_parse_from([
            "vmon-cli", "render", "--aoi", "a.json", "--index", "savi", "--start", "2024-01-01",
            "--end", "2024-01-12", "--seed", "7",
        ])
        .unwrap();
        let Command::Render {
            index, start, end, seed, ..
        } = cli.command
        else {
            panic!("expected render");
        };
        assert_eq!(index, IndexType::Savi);
        assert_eq!(start.map(|d| d.to_string()).as_deref(), Some("2024-01-01"));
        assert_eq!(end.map(|d| d.to_string()).as_deref(), Some("2024-01-12"));
        assert_eq!(seed, Some(7));
    }

    #[test]
    fn rejects_unknown_index() {
        assert!(Cli::try_parse_from(["vmon-cli", "legend", "--index", "evi"]).is_err());
    }

    #[test]
    fn scenes_default_cloud_cover() {
        let cli = Cli::try_parse_from([
            "vmon-cli", "scenes", "--catalog", "scenes.csv", "--aoi", "a.json",
        ])
        .unwrap();
        let Command::Scenes { max_cloud, .. } = cli.command else {
            panic!("expected scenes");
        };
        assert_eq!(max_cloud, 20.0);
    }
}
