//! Attaches engines through the selector and prices a mixed book.
//!
//! ```text
//! RUST_LOG=pricer=debug cargo run --example engine_selection
//! ```

use std::sync::Arc;

use pricer::prelude::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), PricingError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Both models read the same discount curve.
    let curve = Arc::new(FlatYieldCurve::new(0.02));
    let equity = Arc::new(BlackScholesModel::new(
        Arc::clone(&curve),
        Arc::new(EquityCurve::new(100.0, 0.0)),
        0.20,
    ));
    let rates = Arc::new(BlackRateModel::new(curve, 0.25));
    let selector = EngineSelector::new(equity, rates);

    let swap = InterestRateSwap::new(
        1_000_000.0,
        0.03,
        0.028,
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![1.0; 5],
        true,
    );

    let mut book = vec![
        ("European call", Instrument::new(EuropeanOption::call(100.0, 1.0))),
        (
            "Asian call",
            Instrument::new(AsianOption::arithmetic(OptionType::Call, 100.0, 1.0)),
        ),
        (
            "Down-and-in put",
            Instrument::new(BarrierOption::down_and_in(OptionType::Put, 100.0, 1.0, 85.0)),
        ),
        (
            "Caplet",
            Instrument::new(Caplet::new(1_000_000.0, 0.03, 0.028, 0.5, 1.0, 0.5)),
        ),
        ("Payer swap", Instrument::new(swap.clone())),
        ("Payer swaption", Instrument::new(Swaption::new(swap, 1.0))),
    ];

    for (label, instrument) in &mut book {
        selector.attach(instrument)?;
        let engine = instrument
            .pricing_engine()
            .map_or("none", |engine| engine.name());
        println!("{label:<18} {engine:<26} NPV = {:.6}", instrument.npv()?);
    }

    let unattached = Instrument::new(EuropeanOption::put(100.0, 1.0));
    println!(
        "{:<18} {:<26} NPV = {:.6}",
        "Unattached put",
        "none",
        unattached.npv()?
    );

    Ok(())
}
