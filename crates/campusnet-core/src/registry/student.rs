//! Students and the identifiers they are keyed by

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CampusError;
use crate::graph::NodeId;

static UFID_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
static CLASS_CODE_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
static NAME_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn matches(cell: &'static OnceLock<Option<Regex>>, source: &str, value: &str) -> bool {
    cell.get_or_init(|| match Regex::new(source) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(error = %e, pattern = source, "Failed to compile validation regex");
            None
        }
    })
    .as_ref()
    .is_some_and(|re| re.is_match(value))
}

/// Exactly eight ASCII digits
pub fn is_valid_ufid(value: &str) -> bool {
    matches(&UFID_PATTERN, r"^[0-9]{8}$", value)
}

/// Three uppercase letters followed by four digits, e.g. `COP3530`
pub fn is_valid_class_code(value: &str) -> bool {
    matches(&CLASS_CODE_PATTERN, r"^[A-Z]{3}[0-9]{4}$", value)
}

/// Letters and spaces, at least one letter
pub fn is_valid_name(value: &str) -> bool {
    matches(&NAME_PATTERN, r"^[A-Za-z ]*[A-Za-z][A-Za-z ]*$", value)
}

/// Eight-digit student identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ufid(String);

impl Ufid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ufid {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_ufid(s) {
            Ok(Ufid(s.to_string()))
        } else {
            Err(CampusError::invalid_value("UFID", s))
        }
    }
}

impl fmt::Display for Ufid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Course code such as `COP3530`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClassCode(String);

impl ClassCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClassCode {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_class_code(s) {
            Ok(ClassCode(s.to_string()))
        } else {
            Err(CampusError::invalid_value("class code", s))
        }
    }
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An enrolled student
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    name: String,
    ufid: Ufid,
    residence: NodeId,
    classes: Vec<ClassCode>,
}

impl Student {
    pub(crate) fn new(name: String, ufid: Ufid, residence: NodeId, classes: Vec<ClassCode>) -> Self {
        Self {
            name,
            ufid,
            residence,
            classes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ufid(&self) -> &Ufid {
        &self.ufid
    }

    pub fn residence(&self) -> NodeId {
        self.residence
    }

    pub fn classes(&self) -> &[ClassCode] {
        &self.classes
    }

    pub fn has_class(&self, code: &ClassCode) -> bool {
        self.classes.contains(code)
    }

    /// Returns false if the class was not held
    pub(crate) fn remove_class(&mut self, code: &ClassCode) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != code);
        self.classes.len() != before
    }

    /// Swap `old` for `new` in place; false if `old` is missing or `new` is already held
    pub(crate) fn replace_class(&mut self, old: &ClassCode, new: ClassCode) -> bool {
        if self.has_class(&new) {
            return false;
        }
        match self.classes.iter_mut().find(|c| **c == *old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }
}
