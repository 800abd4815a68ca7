use clap::Parser;
use squawkcalc::{Args, DesignReport};
use tracing::info;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    // Initialize logging; diagnostics go to stderr so the report on stdout
    // stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_design_config();
    info!("system clock: {:.1} Hz", config.system_clock_hz);
    info!("timer0 mode: {:?}", config.timer0);

    // Compute the derived constants
    let report = match DesignReport::compute(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", report.render());
}
