//! Field catalog: priority patterns and the reference sets used by the
//! email and password validators.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of the priority table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Matched case-insensitively as a substring of a field name
    pub pattern: String,
    /// `1` marks a priority pattern
    pub priority: u8,
}

impl CatalogEntry {
    pub fn new(pattern: impl Into<String>, priority: u8) -> Self {
        Self {
            pattern: pattern.into(),
            priority,
        }
    }

    pub fn is_priority(&self) -> bool {
        self.priority == 1
    }
}

/// Immutable lookup tables shared by every validation call.
///
/// Domain and password sets are stored lowercased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCatalog {
    pub entries: Vec<CatalogEntry>,
    pub domain_suffixes: HashSet<String>,
    pub disposable_domains: HashSet<String>,
    pub email_providers: HashSet<String>,
    pub common_passwords: HashSet<String>,
}

const PRIORITY_TABLE: &[(&str, u8)] = &[
    ("about", 1),
    ("aboutMe", 1),
    ("address", 1),
    ("bio", 1),
    ("city", 1),
    ("confirmPassword", 1),
    ("country", 1),
    ("coverPic", 0),
    ("dateOfBirth", 1),
    ("dob", 1),
    ("description", 1),
    ("education", 1),
    ("email", 1),
    ("firstName", 1),
    ("fname", 1),
    ("fullName", 1),
    ("gender", 1),
    ("initials", 0),
    ("interests", 0),
    ("isBlocked", 0),
    ("isDeleted", 0),
    ("isEmailVerified", 0),
    ("isVerified", 0),
    ("lastLoginAt", 0),
    ("lastName", 1),
    ("name", 1),
    ("location", 1),
    ("middleName", 0),
    ("mobile", 1),
    ("nameSurname", 0),
    ("nickName", 0),
    ("occupation", 1),
    ("other", 0),
    ("password", 1),
    ("phone", 1),
    ("postalCode", 1),
    ("profilePic", 0),
    ("profileStatus", 0),
    ("profileType", 0),
    ("profileVisibility", 0),
    ("resume", 0),
    ("sex", 1),
    ("skills", 1),
    ("state", 1),
    ("timezone", 0),
    ("title", 0),
    ("updatedAt", 0),
    ("username", 0),
    ("website", 0),
    ("workExperience", 1),
];

const DOMAIN_SUFFIXES: &[&str] = &[
    "com", "net", "org", "edu", "gov", "mil", "co", "io", "tech", "dev", "info", "biz", "me", "us",
    "uk", "ca", "au", "in", "eu", "de", "fr", "xyz", "site", "online", "store", "blog", "app",
];

const DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "temp-mail.org",
    "guerrillamail.com",
    "mailinator.com",
    "yopmail.com",
    "fakemailgenerator.com",
    "sharklasers.com",
    "dispostable.com",
    "throwawaymail.com",
    "getnada.com",
    "trashmail.com",
    "mintemail.com",
    "spambog.com",
    "maildrop.cc",
    "spamex.com",
    "mytrashmail.com",
    "boun.cr",
    "tmail.io",
    "mailpoof.com",
    "spamavert.com",
    "harakirimail.com",
    "tempmail.com",
    "tempmail.net",
    "emailtemporario.com.br",
];

const EMAIL_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
    "yandex.com",
    "mail.com",
    "zoho.com",
    "gmx.com",
    "fastmail.com",
    "tutanota.com",
    "live.com",
    "msn.com",
    "me.com",
    "qq.com",
    "naver.com",
    "rediffmail.com",
    "rocketmail.com",
    "inbox.com",
    "btinternet.com",
    "shaw.ca",
    "telus.net",
    "cox.net",
    "sbcglobal.net",
    "verizon.net",
    "att.net",
    "comcast.net",
    "optonline.net",
    "bigpond.com",
    "bluewin.ch",
    "earthlink.net",
    "mac.com",
    "web.de",
    "126.com",
    "163.com",
    "yeah.net",
    "lycos.com",
];

const COMMON_PASSWORDS: &[&str] = &[
    "123456", "password", "123456789", "12345678", "12345", "1234567", "qwerty", "abc123",
    "password1", "111111", "123123", "admin", "welcome", "letmein", "monkey", "football",
    "iloveyou", "sunshine", "1234", "princess", "dragon", "baseball", "superman", "trustno1",
    "shadow", "buster", "qwerty123", "batman", "whatever", "password123", "qazwsx", "1q2w3e4r",
    "123qwe", "123abc", "654321", "7777777",
];

static BUILTIN: Lazy<FieldCatalog> = Lazy::new(|| FieldCatalog {
    entries: PRIORITY_TABLE
        .iter()
        .map(|(pattern, priority)| CatalogEntry::new(*pattern, *priority))
        .collect(),
    domain_suffixes: lowered(DOMAIN_SUFFIXES),
    disposable_domains: lowered(DISPOSABLE_DOMAINS),
    email_providers: lowered(EMAIL_PROVIDERS),
    common_passwords: lowered(COMMON_PASSWORDS),
});

fn lowered(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

impl FieldCatalog {
    /// The catalog shipped with the library
    pub fn builtin() -> &'static FieldCatalog {
        &BUILTIN
    }

    /// Load a catalog from JSON. Set members are lowercased on load.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let catalog: FieldCatalog = serde_json::from_str(json)?;
        Ok(catalog.normalized())
    }

    fn normalized(self) -> Self {
        let lower = |set: HashSet<String>| set.into_iter().map(|s| s.to_lowercase()).collect();
        Self {
            entries: self.entries,
            domain_suffixes: lower(self.domain_suffixes),
            disposable_domains: lower(self.disposable_domains),
            email_providers: lower(self.email_providers),
            common_passwords: lower(self.common_passwords),
        }
    }

    /// Patterns of every entry flagged as priority
    pub fn priority_patterns(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.is_priority())
            .map(|e| e.pattern.as_str())
    }

    pub fn is_disposable(&self, host: &str) -> bool {
        self.disposable_domains.contains(&host.to_lowercase())
    }

    pub fn is_common_provider(&self, host: &str) -> bool {
        self.email_providers.contains(&host.to_lowercase())
    }

    pub fn is_accepted_suffix(&self, label: &str) -> bool {
        self.domain_suffixes.contains(&label.to_lowercase())
    }

    pub fn is_common_password(&self, password: &str) -> bool {
        self.common_passwords.contains(&password.to_lowercase())
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        FieldCatalog::builtin().clone()
    }
}
