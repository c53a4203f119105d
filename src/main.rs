use astral::{logging, Overlay, OverlayConfig};

fn main() -> anyhow::Result<()> {
    let config = OverlayConfig::default();
    logging::init(config.debug_logging);

    tracing::info!(
        width = config.width,
        height = config.height,
        "starting overlay (Insert: menu, arrows + Enter: edit, K: effect)"
    );
    Overlay::new(config).run()?;
    Ok(())
}
