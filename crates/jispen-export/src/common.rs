//! Schema constants and shared XML writing helpers.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// Namespace of the registry import schema.
pub const IMPORT_NS: &str = "ISEnvita/Import";

/// Version attribute of the `IniTransfer` root.
pub const TRANSFER_VERSION: &str = "1.0.0.0";

/// Schema version reported in the header.
pub const HEADER_VERSION: &str = "1.0.0.7";

/// Name of the reporting source system.
pub const SOURCE_NAME: &str = "JISPEN";

/// Format of the export identifier (`DD.MM.YYYY HH:MM:SS`).
pub const EXPORT_ID_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format of waste entry dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Write a simple text element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write a text element when the value is present; absent values are left out.
pub fn write_optional_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: Option<&str>,
) -> Result<()> {
    match text {
        Some(text) => write_text_element(writer, name, text),
        None => Ok(()),
    }
}

/// Write `<name>` and run `body` before closing it.
pub fn write_nested<W, F>(writer: &mut Writer<W>, name: &str, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut Writer<W>) -> Result<()>,
{
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    body(writer)?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Render a quantity the way the registry expects: shortest decimal, no exponent.
pub fn format_amount(amount: f64) -> String {
    format!("{amount}")
}
