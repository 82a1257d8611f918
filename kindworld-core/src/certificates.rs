//! Certificate catalog: hour thresholds, derived progress, and downloadable documents
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type CertificateId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CertificateKind {
    #[default]
    Certificate,
    Medal,
}

impl CertificateKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Certificate => "certificate",
            Self::Medal => "medal",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Certificate => "Certificate",
            Self::Medal => "Medal",
        }
    }
}

impl fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CertificateKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "certificate" => Ok(Self::Certificate),
            "medal" => Ok(Self::Medal),
            _ => Err(()),
        }
    }
}

/// A template. Whether the viewer has earned it is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: CertificateId,
    pub name: String,
    pub required_hours: u32,
    pub company: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub kind: CertificateKind,
}

/// Validated input for a custom certificate template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCertificate {
    pub name: String,
    pub required_hours: u32,
    pub company: String,
    pub description: String,
    pub icon: String,
    pub kind: CertificateKind,
}

/// Progress toward a threshold, clamped to 0..=100. A zero threshold is complete.
#[must_use]
pub fn progress_pct(hours: u32, required: u32) -> u8 {
    if required == 0 {
        return 100;
    }
    let pct = (u64::from(hours) * 100 / u64::from(required)).min(100);
    u8::try_from(pct).unwrap_or(100)
}

#[must_use]
pub const fn is_earned(hours: u32, required: u32) -> bool {
    hours >= required
}

/// The viewer-relative view of one certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateStatus<'a> {
    pub certificate: &'a Certificate,
    pub earned: bool,
    pub progress_pct: u8,
    /// Hours still missing; zero once earned.
    pub deficit: u32,
}

impl<'a> CertificateStatus<'a> {
    #[must_use]
    pub fn for_hours(certificate: &'a Certificate, hours: u32) -> Self {
        Self {
            certificate,
            earned: is_earned(hours, certificate.required_hours),
            progress_pct: progress_pct(hours, certificate.required_hours),
            deficit: certificate.required_hours.saturating_sub(hours),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertificateError {
    #[error("no certificate with id {0}")]
    UnknownCertificate(CertificateId),
    #[error("\"{name}\" needs {deficit} more hours")]
    NotEarned { name: String, deficit: u32 },
}

/// A generated plain-text certificate ready to be saved client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateDocument {
    pub certificate_id: CertificateId,
    pub serial: String,
    pub file_name: String,
    pub body: String,
}

const RULE: &str = "================================================";

/// `Gold Volunteer  Medal` becomes `Gold_Volunteer_Medal_Certificate.txt`.
#[must_use]
pub fn certificate_file_name(name: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_Certificate.txt")
}

#[must_use]
pub fn render_certificate_text(
    holder: &str,
    certificate: &Certificate,
    issued_on: &str,
    serial: &str,
) -> String {
    let heading = match certificate.kind {
        CertificateKind::Certificate => "CERTIFICATE OF ACHIEVEMENT",
        CertificateKind::Medal => "MEDAL OF SERVICE",
    };
    [
        RULE.to_string(),
        format!("{heading:^48}"),
        RULE.to_string(),
        String::new(),
        String::from("This certifies that"),
        String::new(),
        format!("    {holder}"),
        String::new(),
        format!(
            "has successfully completed {} volunteer hours",
            certificate.required_hours
        ),
        String::from("and is hereby awarded the"),
        String::new(),
        format!("    {}", certificate.name),
        String::new(),
        format!("Issued by: {}", certificate.company),
        format!("Date: {issued_on}"),
        format!("Certificate ID: {serial}"),
        String::new(),
        String::from("Thank you for making the world a kinder place!"),
        RULE.to_string(),
        String::new(),
    ]
    .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CertificateCatalog {
    certificates: Vec<Certificate>,
}

impl CertificateCatalog {
    #[must_use]
    pub const fn new(certificates: Vec<Certificate>) -> Self {
        Self { certificates }
    }

    #[must_use]
    pub fn all(&self) -> &[Certificate] {
        &self.certificates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn statuses(&self, hours: u32) -> Vec<CertificateStatus<'_>> {
        self.certificates
            .iter()
            .map(|c| CertificateStatus::for_hours(c, hours))
            .collect()
    }

    #[must_use]
    pub fn earned_count(&self, hours: u32) -> usize {
        self.certificates
            .iter()
            .filter(|c| is_earned(hours, c.required_hours))
            .count()
    }

    /// The cheapest certificate the viewer has not reached yet.
    #[must_use]
    pub fn next_milestone(&self, hours: u32) -> Option<CertificateStatus<'_>> {
        self.certificates
            .iter()
            .filter(|c| !is_earned(hours, c.required_hours))
            .min_by_key(|c| c.required_hours)
            .map(|c| CertificateStatus::for_hours(c, hours))
    }

    /// Append a custom template with a slug id that does not collide.
    pub fn add(&mut self, new: NewCertificate) -> &Certificate {
        let base = slug(&new.name);
        let mut id = format!("custom-{base}");
        let mut n = 2;
        while self.get(&id).is_some() {
            id = format!("custom-{base}-{n}");
            n += 1;
        }
        self.certificates.push(Certificate {
            id,
            name: new.name,
            required_hours: new.required_hours,
            company: new.company,
            description: new.description,
            icon: new.icon,
            kind: new.kind,
        });
        let last = self.certificates.len() - 1;
        &self.certificates[last]
    }

    /// Build the downloadable document for an earned certificate.
    ///
    /// # Errors
    ///
    /// Returns an error when the id is unknown or the holder's hours fall short.
    pub fn issue(
        &self,
        id: &str,
        holder: &str,
        hours: u32,
        issued_on: &str,
        serial: String,
    ) -> Result<CertificateDocument, CertificateError> {
        let certificate = self
            .get(id)
            .ok_or_else(|| CertificateError::UnknownCertificate(id.to_string()))?;
        if !is_earned(hours, certificate.required_hours) {
            return Err(CertificateError::NotEarned {
                name: certificate.name.clone(),
                deficit: certificate.required_hours - hours,
            });
        }
        Ok(CertificateDocument {
            certificate_id: certificate.id.clone(),
            file_name: certificate_file_name(&certificate.name),
            body: render_certificate_text(holder, certificate, issued_on, &serial),
            serial,
        })
    }
}

fn slug(name: &str) -> String {
    let mut out = String::new();
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        String::from("certificate")
    } else {
        trimmed.to_string()
    }
}
