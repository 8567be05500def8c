use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use sitenav::config::{load_or_default, to_json};
use sitenav::logging::init_tracing;
use sitenav::{DEFAULT_CONTAINER_ID, Document, NavigationMenu, Viewport};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a site navigation menu from its configuration", long_about = None)]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rendered menu HTML
    Render {
        /// Navigation configuration (JSON); the built-in site menu when omitted
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Utf8PathBuf>,
        /// Current location used to mark the active entry
        #[arg(long, default_value = "/")]
        location: String,
        /// Viewport width; at or below 768 the mobile interaction mode applies
        #[arg(long, default_value_t = 1024)]
        width: u32,
        /// Render with the mobile panel open
        #[arg(long)]
        open_panel: bool,
        /// Entry id whose dropdown to open (mobile widths only)
        #[arg(long, value_name = "ENTRY_ID")]
        open_dropdown: Option<String>,
        /// Container id to render into
        #[arg(long, default_value = DEFAULT_CONTAINER_ID)]
        container: String,
    },
    /// Print the configuration as JSON
    Config {
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Utf8PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    match cli.command {
        Command::Render {
            config,
            location,
            width,
            open_panel,
            open_dropdown,
            container,
        } => {
            let config = load_or_default(config.as_deref())?;
            let mut doc = Document::new(location.as_str(), Viewport::new(width)).with_container(&container);
            let mut menu = NavigationMenu::new(config).with_container(container.as_str());
            menu.render(&mut doc)?;
            menu.set_active(&mut doc, &location);
            if open_panel {
                menu.toggle_mobile_open(&mut doc);
            }
            if let Some(id) = open_dropdown {
                if !menu.toggle_dropdown(&mut doc, &id) {
                    bail!("Cannot open dropdown `{}` at width {}", id, width);
                }
            }
            let html = doc
                .container_html(menu.container_id())
                .with_context(|| format!("Container {} vanished", menu.container_id()))?;
            print!("{}", html);
        }
        Command::Config { config } => {
            let config = load_or_default(config.as_deref())?;
            println!("{}", to_json(&config)?);
        }
    }
    Ok(())
}
