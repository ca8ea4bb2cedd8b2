use clap::{Parser, Subcommand};
use simple_nav::walk::DiskSource;
use simple_nav::{config, output, walk};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-nav")]
#[command(about = "Sidebar navigation generator for markdown documentation sites")]
#[command(long_about = "\
Sidebar navigation generator for markdown documentation sites

Your filesystem is the data source. Directories become sidebar groups,
markdown files become page links, and the nesting of the sidebar mirrors
the nesting on disk.

Content structure:

  docs/
  ├── site.toml                    # Site config (optional)
  ├── about.md                     # Root-level page → /about
  ├── guide/                       # Group → section /guide/
  │   ├── readme.md                # Index page (promoted to the group's path)
  │   ├── getting-started.md       # Page → /guide/getting-started
  │   └── advanced/                # Nested group
  │       └── tips.md
  ├── root-study/                  # Retitle via [sidebar.titles] in site.toml
  │   └── object-clone.md
  └── .vuepress/                   # Dot-prefixed = never listed

The output is sidebar.json: one section per top-level directory keyed by
its URL prefix, plus a catch-all section for the root keyed by '/'.

Run 'simple-nav gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Output file for the sidebar configuration
    #[arg(long, default_value = "sidebar.json", global = true)]
    output: PathBuf,

    /// Site config file (defaults to <source>/site.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the sidebar configuration from the content directory
    Build,
    /// Walk the content directory and report without writing anything
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source, cli.config.as_deref())?;
            let sidebar = walk::root_pages(
                &DiskSource,
                &cli.source,
                &config.sidebar.titles,
                &config.sidebar.walk_options(),
            )?;
            let json = serde_json::to_string_pretty(&sidebar)?;
            std::fs::write(&cli.output, json)?;
            output::print_build_output(&sidebar, &cli.source);
            println!("==> Wrote {}", cli.output.display());
        }
        Command::Check => {
            let config = config::load_config(&cli.source, cli.config.as_deref())?;
            let sidebar = walk::root_pages(
                &DiskSource,
                &cli.source,
                &config.sidebar.titles,
                &config.sidebar.walk_options(),
            )?;
            output::print_build_output(&sidebar, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
