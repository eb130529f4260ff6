use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use timecraft_core::{eligible_items, format_hour, Config, TimelineWindow};

#[derive(Args)]
pub struct WindowArgs {
    /// Schedule JSON file, or `-` for stdin
    pub file: PathBuf,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WindowReport {
    start_hour: u16,
    end_hour: u16,
    total_minutes: u16,
    hours: Vec<String>,
}

pub fn run(args: WindowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let doc = super::read_schedule(&args.file)?;
    let items = eligible_items(doc.items());
    let window = TimelineWindow::compute(&items, &config.window);

    let report = WindowReport {
        start_hour: window.start_hour,
        end_hour: window.end_hour,
        total_minutes: window.total_minutes(),
        hours: window.hours().map(format_hour).collect(),
    };

    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} - {} ({} minutes)",
            format_hour(report.start_hour),
            format_hour(report.end_hour),
            report.total_minutes
        );
        println!("{}", report.hours.join(" "));
    }
    Ok(())
}
