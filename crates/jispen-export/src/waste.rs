//! Waste entries: one per exported record.

use std::io::Write;

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use jispen_model::{Record, WasteCompany};

use crate::common::{DATE_FORMAT, format_amount, write_text_element};
use crate::error::Result;

/// `Odpad` element content.
#[derive(Debug, Clone, PartialEq)]
pub struct WasteEntry {
    pub id: String,
    /// Registry uid of the reporting facility.
    pub reporting_subject: String,
    pub date: NaiveDate,
    /// Tonnes, as stored.
    pub amount: f64,
    pub catalogue_code: String,
    pub category: String,
    pub loading_code: String,
    /// Partner subject id; `None` omits the element.
    pub partner_subject: Option<String>,
}

impl WasteEntry {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.to_string(),
            reporting_subject: record.medical_company().uid.to_string(),
            date: record.date,
            amount: record.amount,
            catalogue_code: record.waste.uid.clone(),
            category: record.waste.export_category().to_string(),
            loading_code: record.loading_code.uid.clone(),
            partner_subject: record.waste_company.as_ref().map(WasteCompany::subject_id),
        }
    }

    /// Write this entry as an `Odpad` element.
    pub fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("Odpad");
        start.push_attribute(("Id", self.id.as_str()));
        writer.write_event(Event::Start(start))?;
        write_text_element(writer, "IdSubjektEvident", &self.reporting_subject)?;
        let date = self.date.format(DATE_FORMAT).to_string();
        write_text_element(writer, "Datum", &date)?;
        write_text_element(writer, "Mnozstvi", &format_amount(self.amount))?;
        write_text_element(writer, "KatalogKod", &self.catalogue_code)?;
        write_text_element(writer, "Kategorie", &self.category)?;
        write_text_element(writer, "KodNakladaniKod", &self.loading_code)?;
        if let Some(partner) = &self.partner_subject {
            write_text_element(writer, "IdSubjektPartner", partner)?;
        }
        writer.write_event(Event::End(BytesEnd::new("Odpad")))?;
        Ok(())
    }
}
