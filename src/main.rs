use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goatline::app;
use goatline::config::Config;
use goatline::output;
use goatline::render::ReportStyle;

#[derive(Parser)]
#[command(
    name = "goatline",
    version,
    about = "Pageviews and per-path sparklines from a GoatCounter site",
    long_about = "Pageviews and per-path sparklines from a GoatCounter site.\n\n\
                  Reads SITE_PREFIX (or SITE_URL) and TOKEN from the environment \
                  or a .env file in the current directory."
)]
struct Cli {
    /// Also show site-wide pageview totals
    #[arg(long)]
    totals: bool,

    /// Print the fetched data as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Disable colours and bold text
    #[arg(long)]
    no_color: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("GOATLINE_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_report(cli: &Cli) -> anyhow::Result<i32> {
    let cfg = Config::load()?;
    let snapshot = app::fetch(&cfg, cli.totals)?;

    if cli.json {
        output::print_json(&snapshot);
        return Ok(0);
    }

    let style = ReportStyle {
        ansi: output::use_ansi(cli.no_color),
        ..ReportStyle::default()
    };
    println!("{}", snapshot.render(&style));
    Ok(0)
}

fn or_exit(r: anyhow::Result<i32>) -> i32 {
    r.unwrap_or_else(|e| {
        eprintln!("[goatline] error: {e:#}");
        1
    })
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    std::process::exit(or_exit(cmd_report(&cli)));
}
