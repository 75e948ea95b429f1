use capintel::application::backtest::BacktestParams;
use capintel::cli::commands::{Cli, Commands, OutputFormat};
use capintel::cli::render::{signal_card, SignalReport};
use capintel::config::Config;
use capintel::domain::values::asset_class::AssetClass;
use capintel::domain::values::horizon::Horizon;
use capintel::domain::values::signal_request::SignalRequest;
use capintel::logger::setup_logger;
use capintel::CapIntel;
use clap::Parser;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    setup_logger();

    let cli = Cli::parse();
    let config = Config::from_env();
    let result = match CapIntel::new(&config) {
        Ok(ci) => run_command(ci, cli.command).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn parse_request(ticker: &str, asset_class: &str, horizon: &str) -> Result<SignalRequest, Box<dyn std::error::Error>> {
    let asset_class: AssetClass = asset_class.parse()?;
    let horizon: Horizon = horizon.parse()?;
    Ok(SignalRequest::new(ticker, asset_class, horizon)?)
}

async fn run_command(ci: CapIntel, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Signal {
            ticker,
            asset_class,
            horizon,
            price,
            backtest,
            format,
        } => {
            let request = parse_request(&ticker, &asset_class, &horizon)?;
            let signal = ci.signal(&request, price).await.map_err(|e| {
                if price.is_none() {
                    format!("{e}. Pass the current price with --price to skip the lookup")
                } else {
                    e.to_string()
                }
            })?;

            let bt = if backtest && signal.action().is_directional() {
                Some(ci.backtest(&signal, &BacktestParams::default())?)
            } else {
                None
            };

            match format {
                OutputFormat::Json => {
                    let report = SignalReport {
                        signal: &signal,
                        backtest: bt,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Text => println!("{}", signal_card(&signal, bt.as_ref())),
            }
        }
        Commands::Price { asset_class, ticker } => {
            let asset_class: AssetClass = asset_class.parse()?;
            let price = ci.last_price(asset_class, &ticker).await?;
            println!("{price:.4}");
        }
        Commands::Backtest {
            ticker,
            asset_class,
            horizon,
            price,
            steps,
            step_bp,
            fee_bp,
        } => {
            let request = parse_request(&ticker, &asset_class, &horizon)?;
            let signal = ci.build_signal(&request, price)?;
            let params = BacktestParams {
                n_steps: steps,
                step_bp,
                fee_bp,
            };
            let result = ci.backtest(&signal, &params)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "signal_id": signal.id(),
                    "action": signal.action(),
                    "entry": signal.entry(),
                    "take_profit": signal.take_profit(),
                    "stop": signal.stop(),
                    "result": result,
                }))?
            );
        }
    }
    Ok(())
}
