//! Minimal CSV record writer.
//!
//! Fields are quoted only when they contain the delimiter, a double quote,
//! or a line break; embedded quotes are doubled. Records end with CRLF.

use std::borrow::Cow;
use std::io::Write;

const DELIMITER: char = ',';
const QUOTE: char = '"';
const TERMINATOR: &str = "\r\n";

/// Writes CSV records to an underlying writer.
pub struct CsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> CsvWriter<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one record.
    pub fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> std::io::Result<()> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                write!(self.inner, "{}", DELIMITER)?;
            }
            write!(self.inner, "{}", quote_field(field.as_ref()))?;
        }
        write!(self.inner, "{}", TERMINATOR)
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Quote a field if it needs it.
pub fn quote_field(field: &str) -> Cow<'_, str> {
    let needs_quotes = field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\r' || c == '\n');

    if !needs_quotes {
        return Cow::Borrowed(field);
    }

    let escaped = field.replace(QUOTE, "\"\"");
    Cow::Owned(format!("{QUOTE}{escaped}{QUOTE}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[&[&str]]) -> String {
        let mut writer = CsvWriter::new(Vec::new());
        for record in records {
            writer.write_record(*record).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(quote_field("Battery Voltage"), "Battery Voltage");
        assert!(matches!(quote_field("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_field_is_not_quoted() {
        assert_eq!(quote_field(""), "");
    }

    #[test]
    fn comma_forces_quotes() {
        assert_eq!(quote_field("oil, fuel"), "\"oil, fuel\"");
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(quote_field("a \"tick\""), "\"a \"\"tick\"\"\"");
    }

    #[test]
    fn newlines_force_quotes() {
        assert_eq!(quote_field("line1\nline2"), "\"line1\nline2\"");
        assert_eq!(quote_field("cr\r"), "\"cr\r\"");
    }

    #[test]
    fn records_end_with_crlf() {
        let out = render(&[&["Section", "Field", "Value"], &["Metadata", "Date", ""]]);
        assert_eq!(out, "Section,Field,Value\r\nMetadata,Date,\r\n");
    }

    #[test]
    fn unicode_passes_through() {
        let out = render(&[&["Idle Parameters", "Ignition Timing", "10° BTDC"]]);
        assert_eq!(out, "Idle Parameters,Ignition Timing,10° BTDC\r\n");
    }
}
