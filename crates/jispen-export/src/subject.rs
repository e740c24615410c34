//! Registry subjects: medical facilities and their partner companies.
//!
//! Each subject takes exactly one of three shapes, selected for partners by
//! their [`WasteCompanyType`]. Medical facilities always use the company
//! shape.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use tracing::debug;

use jispen_model::{Address, MedicalCompany, Record, WasteCompany, WasteCompanyType};

use crate::common::{write_nested, write_optional_element, write_text_element};
use crate::dedupe::unique_by;
use crate::error::{ExportError, Result};

const MEDICAL_COMPANY: &str = "medical company";
const WASTE_COMPANY: &str = "waste company";

/// Identification fields shared by the company and municipality shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectIdentity {
    /// Registry identifier.
    pub identifier: u64,
    pub name: Option<String>,
    /// Facility code, reported both as facility and reporting code.
    pub facility_code: Option<String>,
}

/// Street-level address block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: Option<String>,
    pub registry_number: Option<String>,
    pub building_number: Option<String>,
    pub city: String,
    pub zipcode: String,
    pub territorial_unit: String,
}

/// `SubjektTypCZPO`: a legal entity with a facility address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySubject {
    pub id: String,
    pub identity: SubjectIdentity,
    pub address: PostalAddress,
}

/// `SubjektTypCZOO`: citizens of a municipality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitizensSubject {
    pub id: String,
    pub territorial_unit: String,
}

/// `SubjektTypCZObec`: a municipality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunicipalitySubject {
    pub id: String,
    pub identity: SubjectIdentity,
    pub territorial_unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Company(CompanySubject),
    Citizens(CitizensSubject),
    Municipality(MunicipalitySubject),
}

impl Subject {
    /// Value of the `Id` attribute.
    pub fn id(&self) -> &str {
        match self {
            Subject::Company(subject) => &subject.id,
            Subject::Citizens(subject) => &subject.id,
            Subject::Municipality(subject) => &subject.id,
        }
    }

    /// Name of the typed child element.
    pub fn element_name(&self) -> &'static str {
        match self {
            Subject::Company(_) => "SubjektTypCZPO",
            Subject::Citizens(_) => "SubjektTypCZOO",
            Subject::Municipality(_) => "SubjektTypCZObec",
        }
    }

    pub fn from_medical_company(company: &MedicalCompany) -> Result<Self> {
        let address = postal_address(
            &company.address,
            &company.territorial_unit.uid,
            MEDICAL_COMPANY,
            company.id,
        )?;
        Ok(Subject::Company(CompanySubject {
            id: company.uid.to_string(),
            identity: SubjectIdentity {
                identifier: company.uid,
                name: Some(company.name.clone()),
                facility_code: Some(company.company_id.clone()),
            },
            address,
        }))
    }

    pub fn from_waste_company(company: &WasteCompany) -> Result<Self> {
        match company.company_type {
            WasteCompanyType::Company => {
                let identity = waste_company_identity(company)?;
                let address = company.address.as_ref().ok_or(ExportError::MissingField {
                    entity: WASTE_COMPANY,
                    id: company.id,
                    field: "address",
                })?;
                let address = postal_address(
                    address,
                    &company.territorial_unit.uid,
                    WASTE_COMPANY,
                    company.id,
                )?;
                Ok(Subject::Company(CompanySubject {
                    id: identity.identifier.to_string(),
                    identity,
                    address,
                }))
            }
            WasteCompanyType::CitizensOfMunicipality => Ok(Subject::Citizens(CitizensSubject {
                id: company.subject_id(),
                territorial_unit: company.territorial_unit.uid.clone(),
            })),
            WasteCompanyType::Municipality => {
                let identity = waste_company_identity(company)?;
                Ok(Subject::Municipality(MunicipalitySubject {
                    id: identity.identifier.to_string(),
                    identity,
                    territorial_unit: company.territorial_unit.uid.clone(),
                }))
            }
        }
    }

    /// Write this subject as a `Subjekt` element.
    pub fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("Subjekt");
        start.push_attribute(("Id", self.id()));
        writer.write_event(Event::Start(start))?;
        write_nested(writer, self.element_name(), |w| match self {
            Subject::Company(subject) => {
                write_identity(w, &subject.identity)?;
                write_nested(w, "Adresy", |w| {
                    write_nested(w, "AdresaSidlo", |w| write_postal_address(w, &subject.address))?;
                    write_nested(w, "AdresaProvoz", |w| write_postal_address(w, &subject.address))
                })
            }
            Subject::Citizens(subject) => write_nested(w, "Adresy", |w| {
                write_nested(w, "AdresaSidlo", |w| {
                    write_text_element(w, "SidloAdresaZUJ", &subject.territorial_unit)
                })
            }),
            Subject::Municipality(subject) => {
                write_identity(w, &subject.identity)?;
                write_nested(w, "Adresy", |w| {
                    write_nested(w, "AdresaSidlo", |w| {
                        write_text_element(w, "ZUJ", &subject.territorial_unit)
                    })?;
                    write_nested(w, "AdresaProvoz", |w| {
                        write_text_element(w, "ZUJ", &subject.territorial_unit)
                    })
                })
            }
        })?;
        writer.write_event(Event::End(BytesEnd::new("Subjekt")))?;
        Ok(())
    }
}

/// Build the subject list for a set of records.
///
/// Medical facilities are deduplicated by registry uid and partner companies
/// by database id, each in first-seen order. Facilities come first. The two
/// populations are not deduplicated against each other.
pub fn collect_subjects(records: &[Record]) -> Result<Vec<Subject>> {
    let facilities = unique_by(records.iter().map(Record::medical_company), |c| c.uid);
    let partners = unique_by(
        records.iter().filter_map(|r| r.waste_company.as_ref()),
        |c| c.id,
    );
    debug!(
        facilities = facilities.len(),
        partners = partners.len(),
        "collected export subjects"
    );

    let mut subjects = Vec::with_capacity(facilities.len() + partners.len());
    for company in facilities {
        subjects.push(Subject::from_medical_company(company)?);
    }
    for company in partners {
        subjects.push(Subject::from_waste_company(company)?);
    }
    Ok(subjects)
}

fn waste_company_identity(company: &WasteCompany) -> Result<SubjectIdentity> {
    let identifier = company.uid.ok_or(ExportError::MissingField {
        entity: WASTE_COMPANY,
        id: company.id,
        field: "uid",
    })?;
    Ok(SubjectIdentity {
        identifier,
        name: company.name.clone(),
        facility_code: company.company_id.clone(),
    })
}

fn postal_address(
    address: &Address,
    territorial_unit: &str,
    entity: &'static str,
    id: u64,
) -> Result<PostalAddress> {
    let zipcode = address.zipcode.as_ref().ok_or(ExportError::MissingField {
        entity,
        id,
        field: "address.zipcode",
    })?;
    Ok(PostalAddress {
        street: address.street.clone(),
        registry_number: address.registry_number.clone(),
        building_number: address.building_number.clone(),
        city: address.city.clone(),
        zipcode: zipcode.uid.clone(),
        territorial_unit: territorial_unit.to_string(),
    })
}

fn write_identity<W: Write>(writer: &mut Writer<W>, identity: &SubjectIdentity) -> Result<()> {
    let name = identity.name.as_deref();
    let code = identity.facility_code.as_deref();
    write_text_element(writer, "Identifikator", &identity.identifier.to_string())?;
    write_optional_element(writer, "SubjektNazev", name)?;
    write_optional_element(writer, "ProvozovnaKod", code)?;
    write_optional_element(writer, "ProvozovnaNazev", name)?;
    write_optional_element(writer, "VykazovaciKod", code)?;
    write_text_element(writer, "CinnostNaUzemi", "false")
}

fn write_postal_address<W: Write>(writer: &mut Writer<W>, address: &PostalAddress) -> Result<()> {
    write_optional_element(writer, "Ulice", address.street.as_deref())?;
    write_optional_element(writer, "CisloPopisne", address.registry_number.as_deref())?;
    write_optional_element(writer, "CisloEvidencni", address.building_number.as_deref())?;
    write_text_element(writer, "Obec", &address.city)?;
    write_text_element(writer, "PSC", &address.zipcode)?;
    write_text_element(writer, "ZUJ", &address.territorial_unit)
}
