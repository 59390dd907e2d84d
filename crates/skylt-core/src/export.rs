use crate::error::SkyltError;
use crate::model::{Project, RowField};
use std::io::Write;
use std::path::Path;

/// Write the schedule as CSV with the header
/// `SignType,RoomNumber,RoomName,Building,Level,Notes`.
pub fn write_csv<W: Write>(project: &Project, writer: W) -> Result<(), SkyltError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(RowField::ALL.map(RowField::header))?;
    for row in &project.schedule {
        csv.write_record(row.values())?;
    }
    csv.flush()?;
    Ok(())
}

pub fn schedule_to_csv(project: &Project) -> Result<String, SkyltError> {
    let mut buf = Vec::new();
    write_csv(project, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn export_csv_file(project: &Project, path: &Path) -> Result<(), SkyltError> {
    let file = std::fs::File::create(path)?;
    write_csv(project, file)?;
    tracing::info!(
        rows = project.schedule.len(),
        path = %path.display(),
        "schedule exported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_quoting() {
        let mut p = Project::new("Test");
        p.building = "North".into();
        p.level = "1".into();
        let row = p.row("FOH", "204", "WOMEN'S RESTROOM", "Auto, checked");
        p.schedule.push(row);

        let csv = schedule_to_csv(&p).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("SignType,RoomNumber,RoomName,Building,Level,Notes")
        );
        assert_eq!(
            lines.next(),
            Some("FOH,204,WOMEN'S RESTROOM,North,1,\"Auto, checked\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_schedule_has_header_only() {
        let p = Project::new("Empty");
        let csv = schedule_to_csv(&p).unwrap();
        assert_eq!(csv.trim_end(), "SignType,RoomNumber,RoomName,Building,Level,Notes");
    }
}
