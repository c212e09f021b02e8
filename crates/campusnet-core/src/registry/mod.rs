//! Student registry
//!
//! Owns the enrolled students and the class catalog. Graph queries take the
//! network as a parameter so the registry never holds a reference into it.

pub mod catalog;
pub mod schedule;
pub mod student;

use std::collections::{BTreeMap, HashSet};

use crate::config::RegistryConfig;
use crate::error::{CampusError, Result};
use crate::graph::{shortest_path, zone_cost, EdgeStore, GraphProvider, NodeId, PathResult, ZoneCost};
use crate::{bail_invalid, bail_not_found};

pub use catalog::{ClassCatalog, ClassInfo};
pub use schedule::{check_schedule, parse_time, ScheduleCheck};
pub use student::{is_valid_class_code, is_valid_name, is_valid_ufid, ClassCode, Student, Ufid};

/// Students keyed by UFID plus the classes they may enroll in
#[derive(Debug, Clone, Default)]
pub struct Registry {
    students: BTreeMap<Ufid, Student>,
    catalog: ClassCatalog,
    limits: RegistryConfig,
}

impl Registry {
    pub fn new(limits: RegistryConfig) -> Self {
        Registry {
            students: BTreeMap::new(),
            catalog: ClassCatalog::new(),
            limits,
        }
    }

    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    pub fn limits(&self) -> RegistryConfig {
        self.limits
    }

    pub fn student(&self, ufid: &Ufid) -> Option<&Student> {
        self.students.get(ufid)
    }

    /// Students in UFID order
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn class_location(&self, code: &ClassCode) -> Option<NodeId> {
        self.catalog.location(code)
    }

    /// Register or update a class. Its location becomes a node of `graph`
    /// even if no edge touches it.
    pub fn set_class_info(
        &mut self,
        graph: &mut EdgeStore,
        code: ClassCode,
        info: ClassInfo,
    ) -> Option<ClassInfo> {
        graph.add_node(info.location);
        self.catalog.insert(code, info)
    }

    /// Enroll a new student.
    ///
    /// Rejects an invalid name, a UFID already in use, a class count outside
    /// the configured limits, repeated or unknown codes, and a residence that
    /// is not a location of `graph`. Nothing changes on rejection.
    pub fn add_student(
        &mut self,
        graph: &dyn GraphProvider,
        name: &str,
        ufid: Ufid,
        residence: NodeId,
        classes: Vec<ClassCode>,
    ) -> Result<()> {
        if !is_valid_name(name) {
            bail_invalid!("student name", name);
        }
        if self.students.contains_key(&ufid) {
            return Err(CampusError::already_exists("student", &ufid));
        }
        if classes.len() < self.limits.min_classes || classes.len() > self.limits.max_classes {
            bail_invalid!(
                "class count",
                format!(
                    "{} (expected {} to {})",
                    classes.len(),
                    self.limits.min_classes,
                    self.limits.max_classes
                )
            );
        }

        let mut seen = HashSet::new();
        for code in &classes {
            if !seen.insert(code) {
                bail_invalid!("class list", format!("{} listed twice", code));
            }
            if !self.catalog.contains(code) {
                bail_not_found!("class", code);
            }
        }
        if !graph.contains(residence) {
            bail_not_found!("location", residence);
        }

        tracing::debug!(ufid = %ufid, residence = %residence, classes = classes.len(), "student added");
        let student = Student::new(name.to_string(), ufid.clone(), residence, classes);
        self.students.insert(ufid, student);
        Ok(())
    }

    pub fn remove_student(&mut self, ufid: &Ufid) -> Result<Student> {
        self.students
            .remove(ufid)
            .ok_or_else(|| CampusError::not_found("student", ufid))
    }

    /// Drop one class from a student. Returns true when that was the
    /// student's last class and the student was removed.
    pub fn drop_class(&mut self, ufid: &Ufid, code: &ClassCode) -> Result<bool> {
        let student = self.student_mut(ufid)?;
        if !student.remove_class(code) {
            bail_not_found!("class for student", format!("{} ({})", code, ufid));
        }
        if student.classes().is_empty() {
            self.students.remove(ufid);
            tracing::debug!(ufid = %ufid, "student removed after dropping last class");
            return Ok(true);
        }
        Ok(false)
    }

    /// Swap `old` for `new` in a student's schedule
    pub fn replace_class(&mut self, ufid: &Ufid, old: &ClassCode, new: ClassCode) -> Result<()> {
        if !self.catalog.contains(&new) {
            bail_not_found!("class", new);
        }
        let student = self.student_mut(ufid)?;
        if !student.has_class(old) {
            bail_not_found!("class for student", format!("{} ({})", old, ufid));
        }
        let held = format!("{} ({})", new, ufid);
        if !student.replace_class(old, new) {
            return Err(CampusError::already_exists("class for student", held));
        }
        Ok(())
    }

    /// Remove a class from every student and from the catalog. Students left
    /// with no classes are removed. Returns how many students held it.
    pub fn remove_class(&mut self, code: &ClassCode) -> usize {
        let mut affected = 0;
        self.students.retain(|_, student| {
            if student.remove_class(code) {
                affected += 1;
            }
            !student.classes().is_empty()
        });
        self.catalog.remove(code);
        tracing::debug!(class = %code, affected, "class removed");
        affected
    }

    /// Shortest open route from the student's residence to each class, keyed
    /// by class code. Classes missing from the catalog have no location and
    /// are left out.
    pub fn shortest_times(
        &self,
        graph: &dyn GraphProvider,
        ufid: &Ufid,
    ) -> Result<BTreeMap<ClassCode, PathResult>> {
        let student = self.require(ufid)?;
        let mut out = BTreeMap::new();
        for code in student.classes() {
            let Some(location) = self.catalog.location(code) else {
                tracing::warn!(ufid = %ufid, class = %code, "class has no catalog location");
                continue;
            };
            out.insert(code.clone(), shortest_path(graph, student.residence(), location));
        }
        Ok(out)
    }

    /// Zone cost over the student's class locations
    pub fn student_zone(&self, graph: &dyn GraphProvider, ufid: &Ufid) -> Result<ZoneCost> {
        let student = self.require(ufid)?;
        let locations: Vec<NodeId> = student
            .classes()
            .iter()
            .filter_map(|code| self.catalog.location(code))
            .collect();
        Ok(zone_cost(graph, student.residence(), &locations))
    }

    /// Check whether the student can reach each class in time for the next
    pub fn verify_schedule(
        &self,
        graph: &dyn GraphProvider,
        ufid: &Ufid,
    ) -> Result<Vec<ScheduleCheck>> {
        let student = self.require(ufid)?;
        if student.classes().len() < 2 {
            bail_invalid!("schedule", format!("{} has fewer than two classes", ufid));
        }
        let classes: Vec<(ClassCode, ClassInfo)> = student
            .classes()
            .iter()
            .filter_map(|code| self.catalog.get(code).map(|info| (code.clone(), info.clone())))
            .collect();
        Ok(check_schedule(graph, &classes))
    }

    fn require(&self, ufid: &Ufid) -> Result<&Student> {
        self.students
            .get(ufid)
            .ok_or_else(|| CampusError::not_found("student", ufid))
    }

    fn student_mut(&mut self, ufid: &Ufid) -> Result<&mut Student> {
        self.students
            .get_mut(ufid)
            .ok_or_else(|| CampusError::not_found("student", ufid))
    }
}
