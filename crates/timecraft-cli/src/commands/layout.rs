use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;
use timecraft_core::{
    assign_lane_indices, assign_lanes, layout_by_day, ClockTime, Config, ScheduleItem, TimedItem,
};

#[derive(Args)]
pub struct LayoutArgs {
    /// Schedule JSON file, or `-` for stdin
    pub file: PathBuf,
    /// Lay out each date separately (default when the schedule spans several dates)
    #[arg(long, conflicts_with = "date")]
    pub by_day: bool,
    /// Lay out only the items of one date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let json = args.json || config.output.json;
    let doc = super::read_schedule(&args.file)?;
    let schedule = doc.items();

    // Lanes are only meaningful within one day.
    let dates: BTreeSet<&str> = schedule.iter().map(|s| s.date.as_str()).collect();
    if args.by_day || (args.date.is_none() && dates.len() > 1) {
        let daily = layout_by_day(schedule);
        if json {
            println!("{}", serde_json::to_string_pretty(&daily)?);
        } else {
            for (i, day) in daily.days.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{} ({} lanes)", day.date, day.layout.total_lanes);
                let entries: Vec<&ScheduleItem> =
                    schedule.iter().filter(|s| s.date == day.date).collect();
                print_rows(&entries);
            }
        }
        report_skipped(schedule.len(), daily.all_items().count());
        return Ok(());
    }

    let selected: Vec<&ScheduleItem> = schedule
        .iter()
        .filter(|s| args.date.as_ref().map_or(true, |date| &s.date == date))
        .collect();
    if let Some(date) = &args.date {
        if selected.is_empty() {
            return Err(format!("no items on {date}").into());
        }
    }

    let items: Vec<TimedItem> = selected
        .iter()
        .copied()
        .filter_map(TimedItem::from_schedule_item)
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&assign_lanes(&items))?);
    } else {
        let total_lanes = assign_lanes(&items).total_lanes;
        println!("{} items in {} lanes", items.len(), total_lanes);
        print_rows(&selected);
    }
    report_skipped(selected.len(), items.len());
    Ok(())
}

fn report_skipped(total: usize, laid_out: usize) {
    let skipped = total.saturating_sub(laid_out);
    if skipped > 0 {
        eprintln!("skipped {skipped} item(s) with unusable times");
    }
}

/// One row per placeable entry, ordered by start time then lane.
fn print_rows(entries: &[&ScheduleItem]) {
    let (items, titles): (Vec<TimedItem>, Vec<&str>) = entries
        .iter()
        .filter_map(|entry| {
            TimedItem::from_schedule_item(entry).map(|item| (item, entry.task.as_str()))
        })
        .unzip();
    let lanes = assign_lane_indices(&items);

    let mut rows: Vec<(&TimedItem, &str, usize)> = items
        .iter()
        .zip(titles)
        .zip(lanes)
        .map(|((item, title), lane)| (item, title, lane))
        .collect();
    rows.sort_by_key(|(item, _, lane)| (item.start_minutes, *lane));

    for (item, title, lane) in rows {
        let start = ClockTime::from_minutes(item.start_minutes)
            .map(|t| t.to_string())
            .unwrap_or_default();
        let end = ClockTime::from_minutes(item.end_minutes)
            .map(|t| t.to_string())
            .unwrap_or_default();
        println!(
            "  lane {lane:<3} {start:>8} - {end:<8}  {:<12} {title}",
            item.id
        );
    }
}
