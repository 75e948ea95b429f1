use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "capintel", about = "Demo trade signals for crypto and equities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a signal for a ticker
    Signal {
        /// Ticker, e.g. BTCUSDT or AAPL
        ticker: String,
        /// Asset class (crypto, equity)
        #[arg(long, default_value = "crypto")]
        asset_class: String,
        /// Horizon (intraday, swing, position)
        #[arg(long, default_value = "swing")]
        horizon: String,
        /// Current price; fetched from Polygon when omitted
        #[arg(long)]
        price: Option<f64>,
        /// Also run the toy backtest (BUY/SHORT only)
        #[arg(long)]
        backtest: bool,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Print the last traded price
    Price {
        /// Asset class (crypto, equity)
        asset_class: String,
        ticker: String,
    },
    /// Generate a signal and run the toy backtest on it
    Backtest {
        ticker: String,
        #[arg(long, default_value = "crypto")]
        asset_class: String,
        #[arg(long, default_value = "swing")]
        horizon: String,
        /// Current price
        #[arg(long)]
        price: f64,
        /// Number of simulated steps
        #[arg(long, default_value = "400")]
        steps: usize,
        /// Step size standard deviation in basis points
        #[arg(long, default_value = "15")]
        step_bp: f64,
        /// Round-trip fee in basis points
        #[arg(long, default_value = "2")]
        fee_bp: f64,
    },
}
