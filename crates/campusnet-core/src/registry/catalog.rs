//! Class metadata keyed by class code

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::NodeId;
use crate::registry::student::ClassCode;

/// Where and when a class meets
///
/// Times are kept exactly as loaded; `registry::schedule` parses them when
/// checking travel gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    pub location: NodeId,
    pub start_time: String,
    pub end_time: String,
}

/// All known classes
#[derive(Debug, Clone, Default)]
pub struct ClassCatalog {
    classes: HashMap<ClassCode, ClassInfo>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a class, returning the previous entry
    pub fn insert(&mut self, code: ClassCode, info: ClassInfo) -> Option<ClassInfo> {
        self.classes.insert(code, info)
    }

    pub fn remove(&mut self, code: &ClassCode) -> Option<ClassInfo> {
        self.classes.remove(code)
    }

    pub fn get(&self, code: &ClassCode) -> Option<&ClassInfo> {
        self.classes.get(code)
    }

    pub fn location(&self, code: &ClassCode) -> Option<NodeId> {
        self.classes.get(code).map(|info| info.location)
    }

    pub fn contains(&self, code: &ClassCode) -> bool {
        self.classes.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class codes in ascending order
    pub fn codes(&self) -> Vec<&ClassCode> {
        let mut codes: Vec<&ClassCode> = self.classes.keys().collect();
        codes.sort();
        codes
    }
}
