//! Document shell and the public export entry points.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use tracing::{info, info_span};

use jispen_model::Record;

use crate::clock::Clock;
use crate::common::{
    EXPORT_ID_FORMAT, HEADER_VERSION, IMPORT_NS, SOURCE_NAME, TRANSFER_VERSION, write_nested,
    write_text_element,
};
use crate::error::Result;
use crate::subject::{Subject, collect_subjects};
use crate::waste::WasteEntry;

/// `Header` block of the transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// `DD.MM.YYYY HH:MM:SS` of the export instant.
    pub export_id: String,
    /// Operator identity signing the export.
    pub sign: String,
}

/// Fully assembled export, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub header: Header,
    pub subjects: Vec<Subject>,
    pub wastes: Vec<WasteEntry>,
}

/// Assemble the export document for `records`.
///
/// Waste entries follow input order one-to-one; subjects are deduplicated
/// (see [`collect_subjects`]).
pub fn build_document(records: &[Record], sign: &str, clock: &dyn Clock) -> Result<ExportDocument> {
    let header = Header {
        export_id: clock.now().format(EXPORT_ID_FORMAT).to_string(),
        sign: sign.to_string(),
    };
    let subjects = collect_subjects(records)?;
    let wastes = records.iter().map(WasteEntry::from_record).collect();
    Ok(ExportDocument {
        header,
        subjects,
        wastes,
    })
}

impl ExportDocument {
    /// Serialize as indented XML into `out`.
    pub fn write_to<W: Write>(&self, out: W) -> Result<()> {
        let mut xml = Writer::new_with_indent(out, b' ', 2);
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new("IniTransfer");
        root.push_attribute(("xmlns", IMPORT_NS));
        root.push_attribute(("Version", TRANSFER_VERSION));
        xml.write_event(Event::Start(root))?;

        write_nested(&mut xml, "Header", |w| {
            write_text_element(w, "Version", HEADER_VERSION)?;
            write_text_element(w, "NazevZdroje", SOURCE_NAME)?;
            write_text_element(w, "IdentifikatorExportu", &self.header.export_id)?;
            write_text_element(w, "Sign", &self.header.sign)
        })?;

        write_nested(&mut xml, "DataCZ", |w| {
            write_collection(w, "Subjekty", &self.subjects, |w, subject| subject.write(w))?;
            write_collection(w, "Odpady", &self.wastes, |w, entry| entry.write(w))
        })?;

        xml.write_event(Event::End(BytesEnd::new("IniTransfer")))?;
        Ok(())
    }
}

/// Build and write the export for `records` into `out`.
pub fn write_export<W: Write>(
    records: &[Record],
    sign: &str,
    clock: &dyn Clock,
    out: W,
) -> Result<()> {
    let span = info_span!("export", records = records.len());
    let _guard = span.enter();
    let document = build_document(records, sign, clock)?;
    document.write_to(out)?;
    info!(
        subjects = document.subjects.len(),
        wastes = document.wastes.len(),
        "export written"
    );
    Ok(())
}

/// Build the export for `records` and return it as text.
pub fn generate(records: &[Record], sign: &str, clock: &dyn Clock) -> Result<String> {
    let mut buffer = Vec::new();
    write_export(records, sign, clock, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_collection<W, T, F>(writer: &mut Writer<W>, name: &str, items: &[T], item: F) -> Result<()>
where
    W: Write,
    F: Fn(&mut Writer<W>, &T) -> Result<()>,
{
    if items.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }
    write_nested(writer, name, |w| {
        for entry in items {
            item(w, entry)?;
        }
        Ok(())
    })
}
