use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use menu_core::adapters::{NamingFormLocator, OutcomeNavigationResolver};
use menu_core::{
    MenuComponent, MenuDispatcher, MenuModel, MenuRenderer, PhasedEventQueue,
    RenderCollaborators, RequestParams, ResponseWriter,
};
use menu_shared::constants::menu_id_param;
use menu_shared::telemetry::init_telemetry;
use menu_shared::RenderKitConfig;

#[derive(Parser, Debug)]
#[command(
    name = "menu-render",
    version,
    about = "Render a JSON menu model to markup, or decode a submitted menu address"
)]
struct Args {
    /// Path to the JSON menu model
    #[arg(long)]
    menu: PathBuf,

    /// Client id of the component holding the menu
    #[arg(long, default_value = "form:menu")]
    holder: String,

    /// Client id of a form enclosing the holder (repeatable)
    #[arg(long = "form", default_value = "form")]
    forms: Vec<String>,

    // === Navigation ===
    /// Prefix for outcome urls
    #[arg(long, default_value = "")]
    context_path: String,

    /// Suffix for outcome urls
    #[arg(long, default_value = ".xhtml")]
    suffix: String,

    /// Replace item and group ids with their path addresses. Dynamic items
    /// submit their id as the menu address, so `--decode` only resolves ids
    /// that are paths; pass this when the model uses symbolic ids.
    #[arg(long)]
    generate_ids: bool,

    /// Decode this address (e.g. `2_1`) instead of rendering
    #[arg(long)]
    decode: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = RenderKitConfig::load().context("Failed to load configuration")?;
    init_telemetry(&config.telemetry);

    let content = fs::read_to_string(&args.menu)
        .with_context(|| format!("Failed to read menu model {}", args.menu.display()))?;
    let mut model: MenuModel =
        serde_json::from_str(&content).context("Failed to parse menu model")?;
    if args.generate_ids {
        model.generate_unique_ids();
    }

    let component = MenuComponent::new(args.holder.clone(), model);
    info!("Loaded menu {} for {}", args.menu.display(), component.client_id);

    match &args.decode {
        Some(address) => decode(&component, address),
        None => render(&config, &args, &component),
    }
}

fn render(config: &RenderKitConfig, args: &Args, component: &MenuComponent) -> Result<()> {
    let renderer = MenuRenderer::new(
        config.menu.clone(),
        RenderCollaborators::with_defaults(
            OutcomeNavigationResolver::new(args.context_path.clone(), args.suffix.clone()),
            NamingFormLocator::new(args.forms.iter().cloned()),
        ),
    );

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());
    renderer
        .encode_menu(&mut writer, component)
        .context("Failed to render menu")?;
    writer.write_raw("\n")?;
    writer.flush()?;
    Ok(())
}

fn decode(component: &MenuComponent, address: &str) -> Result<()> {
    let params = RequestParams::from([(menu_id_param(&component.client_id), address.to_string())]);
    let mut queue = PhasedEventQueue::new();

    let phase = MenuDispatcher::new()
        .decode(component, &params, &mut queue)
        .with_context(|| format!("Failed to decode menu address {}", address))?;
    if phase.is_none() {
        info!("Address {} matches no menu item", address);
    }

    let mut out = io::stdout().lock();
    for event in queue.drain_all() {
        writeln!(out, "{}", serde_json::to_string(&event)?)?;
    }
    Ok(())
}
