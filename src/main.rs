use sportsleague::domain::league::League;
use sportsleague::shell::Shell;

fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    tracing::info!("Starting league roster shell");

    // The league is constructed here and handed to the shell; it lives for
    // the duration of the process.
    let league = League::new();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(league, stdin.lock(), stdout.lock());
    shell.run()
}
