//! Prices one product per run with an explicitly chosen engine.
//!
//! ```text
//! cargo run --example pricing_tour -- barrier
//! RUST_LOG=pricer=debug cargo run --example pricing_tour -- all
//! ```

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use pricer::prelude::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

struct Environment {
    equity: Arc<BlackScholesModel>,
    rates: Arc<BlackRateModel>,
}

impl Environment {
    fn standard() -> Result<Self, PricingError> {
        let equity = BlackScholesModel::builder()
            .spot(100.0)
            .rate(0.02)
            .dividend_yield(0.0)
            .vol(0.20)
            .build()?;
        let rates = BlackRateModel::flat(0.02, 0.25)?;
        Ok(Self {
            equity: Arc::new(equity),
            rates: Arc::new(rates),
        })
    }
}

fn show(label: &str, instrument: &Instrument) -> Result<(), PricingError> {
    println!("{label:<28} NPV = {:.6}", instrument.npv()?);
    Ok(())
}

fn swap() -> InterestRateSwap {
    InterestRateSwap::new(
        1_000_000.0,
        0.03,
        0.028,
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![1.0; 5],
        true,
    )
}

fn run(product: &str, env: &Environment) -> Result<(), PricingError> {
    let equity = &env.equity;
    let rates = &env.rates;
    match product {
        "european" => show(
            "European call (BS)",
            &Instrument::new(EuropeanOption::call(100.0, 1.0))
                .with_pricing_engine(Arc::new(BlackScholesEngine::new(Arc::clone(equity)))),
        ),
        "digital" => show(
            "Digital call (BS)",
            &Instrument::new(DigitalOption::cash_or_nothing(OptionType::Call, 100.0, 1.0, 10.0))
                .with_pricing_engine(Arc::new(DigitalBlackScholesEngine::new(Arc::clone(
                    equity,
                )))),
        ),
        "asian" => {
            let engine = AsianMonteCarloEngine::new(Arc::clone(equity), 10_000, 50, 1234);
            let estimate = engine.simulate(&AsianOption::arithmetic(OptionType::Call, 100.0, 1.0))?;
            println!(
                "{:<28} NPV = {:.6} (stderr {:.4})",
                "Asian call (MC)", estimate.price, estimate.stderr
            );
            Ok(())
        }
        "barrier" => {
            let engine = BarrierMonteCarloEngine::new(Arc::clone(equity), 10_000, 252, 5678);
            let option = BarrierOption::up_and_out(OptionType::Call, 100.0, 1.0, 120.0);
            let estimate = engine.simulate(&option)?;
            println!(
                "{:<28} NPV = {:.6} (stderr {:.4})",
                "Up-and-out call (MC)", estimate.price, estimate.stderr
            );
            Ok(())
        }
        "caplet" => show(
            "Caplet (Black)",
            &Instrument::new(Caplet::new(1_000_000.0, 0.03, 0.028, 0.5, 1.0, 0.5))
                .with_pricing_engine(Arc::new(CapletBlackEngine::new(Arc::clone(rates)))),
        ),
        "cap" | "floor" => {
            let starts = [0.5, 1.5, 2.5, 3.5];
            let ends = [1.5, 2.5, 3.5, 4.5];
            let accruals = [1.0; 4];
            let cap = Cap::from_schedule(1_000_000.0, 0.03, 0.028, &starts, &ends, &accruals)?;
            let floor = Floor::from_schedule(1_000_000.0, 0.03, 0.028, &starts, &ends, &accruals)?;
            show(
                "Cap 4y (Black)",
                &Instrument::new(cap)
                    .with_pricing_engine(Arc::new(CapBlackEngine::new(Arc::clone(rates)))),
            )?;
            show(
                "Floor 4y (Black)",
                &Instrument::new(floor)
                    .with_pricing_engine(Arc::new(FloorBlackEngine::new(Arc::clone(rates)))),
            )
        }
        "swap" => show(
            "Payer swap 5y",
            &Instrument::new(swap())
                .with_pricing_engine(Arc::new(SwapEngine::new(Arc::clone(rates)))),
        ),
        "swaption" => show(
            "Payer swaption 1y x 5y",
            &Instrument::new(Swaption::new(swap(), 1.0))
                .with_pricing_engine(Arc::new(SwaptionBlackEngine::new(Arc::clone(rates)))),
        ),
        other => {
            eprintln!("unknown product `{other}`");
            Ok(())
        }
    }
}

const PRODUCTS: [&str; 8] = [
    "european", "digital", "asian", "barrier", "caplet", "cap", "swap", "swaption",
];

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let selected = env::args().nth(1).unwrap_or_else(|| "all".to_string());
    let env = match Environment::standard() {
        Ok(env) => env,
        Err(err) => {
            eprintln!("market setup failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let products: Vec<&str> = if selected == "all" {
        PRODUCTS.to_vec()
    } else {
        vec![selected.as_str()]
    };

    for product in products {
        if let Err(err) = run(product, &env) {
            eprintln!("{product}: {err}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
