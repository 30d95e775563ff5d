//! Chapter Reader CLI - serve or inspect a directory of numbered chapters

use chapter_reader::config::{self, ReaderConfig};
use chapter_reader::ui::{self, ChapterRow, Icons};
use chapter_reader::{find_image, list_chapters};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "chapter-reader")]
#[command(version)]
#[command(about = "Minimal web reader for numbered text chapters")]
#[command(long_about = r#"
Chapter Reader serves chapters/chap<N>.txt as web pages, each one with its
optional static/chap<N>.{jpg,jpeg,png,webp} illustration.

Example usage:
  chapter-reader serve --port 8080
  chapter-reader list
  chapter-reader init
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Default)]
struct DirArgs {
    /// Directory containing chap<N>.txt files
    #[arg(long)]
    chapters: Option<PathBuf>,

    /// Directory containing chapter images
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve {
        #[command(flatten)]
        dirs: DirArgs,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List discovered chapters and their images
    List {
        #[command(flatten)]
        dirs: DirArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a default reader.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn apply_dirs(config: &mut ReaderConfig, dirs: DirArgs) {
    if let Some(chapters) = dirs.chapters {
        config.chapters_dir = chapters;
    }
    if let Some(static_dir) = dirs.static_dir {
        config.static_dir = static_dir;
    }
}

fn run_list(config: &ReaderConfig, json: bool) -> anyhow::Result<()> {
    let rows: Vec<ChapterRow> = list_chapters(&config.chapters_dir)?
        .into_iter()
        .map(|number| ChapterRow {
            number,
            image_url: find_image(&config.static_dir, &config.static_url_path, number),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    ui::info(
        &format!("{} Chapters", Icons::FOLDER),
        &config.chapters_dir.display().to_string(),
    );
    if rows.is_empty() {
        ui::warn("No chapters found");
        return Ok(());
    }
    println!("{}", ui::chapter_table(&rows));
    let with_images = rows.iter().filter(|r| r.image_url.is_some()).count();
    println!(
        "{}",
        ui::dim(&format!(
            "{} chapters, {} with images {}",
            rows.len(),
            with_images,
            Icons::IMAGE
        ))
    );
    Ok(())
}

fn run_init(path: PathBuf, force: bool) -> anyhow::Result<()> {
    config::write_config(&path, &config::default_config_file(), force)?;
    ui::success(&format!("Wrote {}", path.display()));
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let command = cli.command.unwrap_or(Commands::Serve {
        dirs: DirArgs::default(),
        host: None,
        port: None,
    });

    if let Commands::Init { force } = command {
        let path = cli.config.unwrap_or_else(config::default_config_path);
        return run_init(path, force);
    }

    let mut config = config::load_config(cli.config.as_deref())?;

    let result = match command {
        Commands::Serve { dirs, host, port } => {
            apply_dirs(&mut config, dirs);
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            ui::header("Chapter Reader");
            chapter_reader::server::start_server(config).await
        }
        Commands::List { dirs, json } => {
            apply_dirs(&mut config, dirs);
            run_list(&config, json)
        }
        Commands::Init { .. } => Ok(()),
    };

    if let Err(e) = result {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
