use clap::Parser;

/// Command-line interface definition for jornalero
/// Interactive attendance and payroll ledger; all operations live in the
/// menu, so the only flags are ambient wiring.
#[derive(Parser)]
#[command(
    name = "jornalero",
    version = env!("CARGO_PKG_VERSION"),
    about = "Registro de asistencia y jornales con reconocimiento facial",
    long_about = None
)]
pub struct Cli {
    /// Override the slot-store path (useful for tests or a custom store)
    #[arg(long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update, no polling sleeps)
    #[arg(long = "test", hide = true)]
    pub test: bool,
}
