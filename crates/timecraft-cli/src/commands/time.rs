use clap::Subcommand;
use timecraft_core::ClockTime;

#[derive(Subcommand)]
pub enum TimeAction {
    /// Convert "H:MM AM/PM" to minutes since midnight
    Parse {
        /// Time text, e.g. "1:05 PM"
        text: String,
    },
    /// Convert minutes since midnight to "H:MM AM/PM"
    Format {
        /// Minutes since midnight (0-1439)
        minutes: u16,
    },
}

pub fn run(action: TimeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimeAction::Parse { text } => {
            let time = text
                .parse::<ClockTime>()
                .map_err(|e| format!("invalid time {text:?}: {e}"))?;
            println!("{}", time.minutes());
        }
        TimeAction::Format { minutes } => {
            let time = ClockTime::from_minutes(minutes)
                .ok_or_else(|| format!("minutes must be below 1440, got {minutes}"))?;
            println!("{time}");
        }
    }
    Ok(())
}
