//! High-level library API: run the whole read → group → sort → format
//! pipeline on a file or on in-memory text. Prefer these entrypoints over
//! the lower-level `core` and `io` modules when embedding the converter.
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::core::grouping::{Grouping, group_values};
use crate::core::naming::SkipReason;
use crate::error::{Error, Result};
use crate::io::reader::{parse_document, read_document};
use crate::io::writers::tales::{write_diagnostics, write_tales};
use crate::types::Tale;

/// Summary of one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Entries in the `sounds` array.
    pub records: usize,
    /// Entries assigned to a tale.
    pub grouped: usize,
    pub skipped_fields: usize,
    /// Names without an extension or without an ordinal separator.
    pub skipped_malformed: usize,
    pub skipped_ordinal: usize,
    pub tales: usize,
}

impl ConversionReport {
    fn from_grouping(records: usize, grouping: &Grouping) -> Self {
        Self {
            records,
            grouped: grouping.tales.iter().map(|t| t.parts.len()).sum(),
            skipped_fields: grouping.count(SkipReason::MissingFields),
            skipped_malformed: grouping.count(SkipReason::NoExtension)
                + grouping.count(SkipReason::NoOrdinalSeparator),
            skipped_ordinal: grouping.count(SkipReason::InvalidOrdinal),
            tales: grouping.tales.len(),
        }
    }
}

/// Group the sounds of a JSON document held in memory.
pub fn convert_str(text: &str) -> Result<Grouping> {
    let document = parse_document(text)?;
    Ok(group_values(&document.sounds))
}

/// Load a file and group its sounds.
pub fn convert_file(input: &Path) -> Result<Grouping> {
    let document = read_document(input)?;
    Ok(group_values(&document.sounds))
}

/// Tales only, discarding skip information.
pub fn load_tales(input: &Path) -> Result<Vec<Tale>> {
    Ok(convert_file(input)?.tales)
}

/// Render a grouping: diagnostic tokens first, then one block per tale.
pub fn write_grouping<W: Write>(out: &mut W, grouping: &Grouping) -> Result<()> {
    write_diagnostics(out, grouping.diagnostics()).map_err(Error::Environment)?;
    write_tales(out, &grouping.tales).map_err(Error::Environment)?;
    out.flush().map_err(Error::Environment)
}

/// Convert `input` and write the result to `out`.
pub fn convert_file_to_writer<W: Write>(input: &Path, out: &mut W) -> Result<ConversionReport> {
    let document = read_document(input)?;
    let grouping = group_values(&document.sounds);
    let report = ConversionReport::from_grouping(document.sounds.len(), &grouping);

    write_grouping(out, &grouping)?;
    info!(
        "Converted {} of {} sounds into {} tales",
        report.grouped, report.records, report.tales
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "sounds": [
            {"id": "B", "originalName": "foo_2.wav"},
            {"id": "A", "originalName": "foo_1.wav"},
            {"id": "C", "originalName": "bar.wav"},
            {"id": "D", "originalName": "noext"},
            {"id": "E"}
        ]
    }"#;

    #[test]
    fn test_convert_str() {
        let grouping = convert_str(SAMPLE).unwrap();
        assert_eq!(grouping.tales, vec![Tale::story("foo", vec!["A".into(), "B".into()])]);

        let report = ConversionReport::from_grouping(5, &grouping);
        assert_eq!(
            report,
            ConversionReport {
                records: 5,
                grouped: 2,
                skipped_fields: 1,
                skipped_malformed: 2,
                skipped_ordinal: 0,
                tales: 1,
            }
        );
    }

    #[test]
    fn test_write_grouping() {
        let grouping = convert_str(SAMPLE).unwrap();
        let mut buf = Vec::new();
        write_grouping(&mut buf, &grouping).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "sore\nkore\n- name: foo\n  type: story\n  length: 240\n  parts:\n    - A\n    - B\n\n"
        );
    }

    #[test]
    fn test_convert_str_format_error() {
        assert!(matches!(convert_str("{}"), Err(Error::Format)));
    }
}
