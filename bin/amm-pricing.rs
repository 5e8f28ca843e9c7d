use std::sync::Arc;

use anyhow::Context;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;

use amm_pricing::{
    Bundle, MemoryStore, NativePriceOracle, PriceResolver, PricingConfig, Settings, Snapshot,
    Token, TokenStore, VolumeTracker,
};

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .context("Failed to initialize logger")?;

    // Load configuration
    let settings = Settings::new()
        .context("Failed to load config.yaml. Please ensure it exists and is valid")?;

    let config = Arc::new(
        PricingConfig::from_settings(&settings.pricing).context("Invalid pricing configuration")?,
    );
    info!(
        "Pricing config loaded: native={}, stable pair={}, {} whitelisted tokens, threshold={}",
        config.native_token(),
        config.stable_pair(),
        config.whitelist().len(),
        config.minimum_liquidity_threshold()
    );

    let replay = settings
        .replay
        .context("No replay section in config.yaml; nothing to price")?;

    let snapshot = Snapshot::from_file(&replay.snapshot_path)?;
    let token_ids = snapshot.token_ids();
    let mut store = snapshot.into_store();
    info!(
        "Snapshot loaded: {} tokens, {} pairs",
        store.token_count(),
        store.pair_count()
    );

    run_pricing_pass(config, &mut store, &token_ids);
    Ok(())
}

/// One processing cycle: refresh the bundle, then re-derive every token once.
///
/// Tokens are re-priced in snapshot order and written back immediately, so a
/// token priced later in the pass sees the updated price of an earlier one.
fn run_pricing_pass(config: Arc<PricingConfig>, store: &mut MemoryStore, token_ids: &[String]) {
    let oracle = NativePriceOracle::new(config.clone());
    let resolver = PriceResolver::new(config);

    let mut bundle = Bundle::default();
    bundle.refresh(&oracle, &*store);
    if bundle.is_unpriced() {
        warn!("Native price unavailable; USD prices will be 0 this cycle");
    }

    for token_id in token_ids {
        let view: &MemoryStore = store;
        let Some(token) = view.load_token(token_id) else {
            continue;
        };

        let derived_native = resolver.find_native_per_token(&token, view, view, view);
        store.set_derived_native(token_id, derived_native.clone());

        let priced = Token::new(&token.id, &token.symbol, derived_native);
        info!(
            "{} ({}): {} native, ${}",
            priced.symbol,
            priced.id,
            priced.derived_native,
            VolumeTracker::token_price_usd(&priced, &bundle)
        );
    }
}
