//! Agify Example
//!
//! Fetches an age guess from <https://api.agify.io> with each fetch strategy.

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use fetchling::{
    DEFAULT_DELAY, HyperTransport, JsonDecoder, Locator, deliver_after,
    deliver_after_with_callback, prelude::*,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const AGIFY_URL: &str = "https://api.agify.io/?name=meelad";

/// Answer from agify.io.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agify {
    pub name: String,
    pub age: Option<u32>,
    pub count: u64,
}

async fn run_strategy<S: FetchStrategy>(
    fetcher: &Fetcher<fetchling::Logging<HyperTransport>, JsonDecoder<Agify>>,
    strategy: &S,
) {
    match fetcher.fetch_with(strategy, AGIFY_URL).await {
        Ok(data) => println!("[{}] Data received: {data:?}", strategy.name()),
        Err(err) => eprintln!("[{}] Error in fetch: {err}", strategy.name()),
    }
}

fn show_division(dividend: f64, divisor: f64) {
    match divide(dividend, divisor) {
        Ok(result) => println!("{dividend} / {divisor} = {result}"),
        Err(err) => eprintln!("{dividend} / {divisor}: {err}"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Delayed values ===");
    let handle = deliver_after_with_callback("Data fetched", DEFAULT_DELAY, |message| {
        println!("callback: {message}");
    });
    if let Err(err) = handle.await {
        eprintln!("callback task failed: {err}");
    }
    let message = deliver_after("Data fetched", DEFAULT_DELAY).await;
    println!("future: {message}");

    println!("\n=== Fetching {AGIFY_URL} ===");
    let fetcher = Fetcher::json::<Agify>().with_logging();
    run_strategy(&fetcher, &CallbackStrategy).await;
    run_strategy(&fetcher, &FutureStrategy).await;
    run_strategy(&fetcher, &AsyncStrategy).await;

    match Locator::new(AGIFY_URL) {
        Ok(locator) => {
            let handle = CallbackStrategy::fetch_with_callback(
                fetcher.transport().clone(),
                *fetcher.decoder(),
                locator,
                |result| match result {
                    Ok(data) => println!("[callback] Data received: {data:?}"),
                    Err(err) => eprintln!("[callback] Error in fetch: {err}"),
                },
            );
            if let Err(err) = handle.await {
                eprintln!("callback task failed: {err}");
            }
        }
        Err(err) => eprintln!("{err}"),
    }

    println!("\n=== Division ===");
    show_division(10.0, 2.0);
    show_division(10.0, 0.0);
    match divide_deferred(10.0, 0.0).await {
        Ok(result) => println!("deferred: {result}"),
        Err(err) => eprintln!("deferred: {err}"),
    }
}
