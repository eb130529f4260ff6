pub mod config;
pub mod layout;
pub mod time;
pub mod window;

use std::path::Path;

use timecraft_core::ScheduleDocument;

/// Read a schedule from a file, or from stdin when `source` is `-`.
pub fn read_schedule(source: &Path) -> Result<ScheduleDocument, Box<dyn std::error::Error>> {
    let doc = if source == Path::new("-") {
        ScheduleDocument::from_reader(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(source)
            .map_err(|e| format!("cannot open {}: {e}", source.display()))?;
        ScheduleDocument::from_reader(std::io::BufReader::new(file))
    }?;
    tracing::debug!(items = doc.items().len(), "read schedule");
    Ok(doc)
}
