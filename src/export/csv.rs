use super::{record_fields, SCHEDULE_COLUMNS};
use crate::error::AmortizationError;
use crate::loan::Schedule;
use log::info;
use std::path::{Path, PathBuf};

/// File name a schedule is exported under, e.g. `annuity_amortization.csv`.
pub fn file_name(schedule: &Schedule) -> String {
    format!("{}_amortization.csv", schedule.method())
}

/// Writes the schedule with a header row into `dir` and returns the file path.
pub fn write_csv(dir: &Path, schedule: &Schedule) -> Result<PathBuf, AmortizationError> {
    let path = dir.join(file_name(schedule));
    let mut writer = ::csv::Writer::from_path(&path)?;

    writer.write_record(SCHEDULE_COLUMNS)?;
    for record in schedule {
        writer.write_record(record_fields(record))?;
    }
    writer.flush()?;

    info!(
        "Data was recorded to {} at the following location: {}",
        file_name(schedule),
        dir.display()
    );
    Ok(path)
}
