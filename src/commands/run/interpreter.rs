//! Executes parsed script commands against a loaded campus

use std::collections::BTreeMap;
use std::io::{self, Write};

use campusnet_core::campus::Campus;
use campusnet_core::error::Result;
use campusnet_core::graph::{is_connected, EdgeStatus, PathResult, ZoneCost};
use campusnet_core::registry::{ClassCode, Registry, ScheduleCheck, Ufid};
use serde_json::{json, Value};

use super::parser::ScriptCommand;

/// Outcome of one script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Done(bool),
    /// Students affected by `removeClass`; zero reads as failure
    Count(usize),
    Status(EdgeStatus),
    ShortestEdges {
        name: String,
        times: BTreeMap<ClassCode, PathResult>,
    },
    Zone {
        name: String,
        zone: ZoneCost,
    },
    Schedule {
        name: String,
        checks: Vec<ScheduleCheck>,
    },
}

impl Reply {
    pub fn is_success(&self) -> bool {
        match self {
            Reply::Done(ok) => *ok,
            Reply::Count(n) => *n > 0,
            _ => true,
        }
    }

    pub fn render_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Reply::Done(true) => writeln!(out, "successful"),
            Reply::Done(false) | Reply::Count(0) => writeln!(out, "unsuccessful"),
            Reply::Count(n) => writeln!(out, "{}", n),
            Reply::Status(status) => writeln!(out, "{}", status),
            Reply::ShortestEdges { name, times } => {
                writeln!(out, "Name: {}", name)?;
                for (code, route) in times {
                    writeln!(out, "{} | Total Time: {}", code, route.cost_or_sentinel())?;
                }
                Ok(())
            }
            Reply::Zone { name, zone } => {
                writeln!(out, "Student Zone Cost For {}: {}", name, zone.cost)
            }
            Reply::Schedule { name, checks } => {
                writeln!(out, "Schedule Check for {}:", name)?;
                for check in checks {
                    writeln!(out, "{} - {} \"{}\"", check.from, check.to, check.verdict())?;
                }
                Ok(())
            }
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Reply::Done(ok) => json!({ "ok": ok }),
            Reply::Count(n) => json!({ "ok": *n > 0, "count": n }),
            Reply::Status(status) => json!({ "ok": true, "status": status }),
            Reply::ShortestEdges { name, times } => {
                let times: Vec<Value> = times
                    .iter()
                    .map(|(code, route)| {
                        json!({
                            "class": code,
                            "time": route.cost_or_sentinel(),
                            "path": route.path,
                        })
                    })
                    .collect();
                json!({ "ok": true, "name": name, "times": times })
            }
            Reply::Zone { name, zone } => json!({
                "ok": true,
                "name": name,
                "cost": zone.cost,
                "partial": zone.partial,
                "vertices": zone.vertices,
                "unreachable": zone.unreachable,
            }),
            Reply::Schedule { name, checks } => {
                let checks: Vec<Value> = checks
                    .iter()
                    .map(|check| {
                        json!({
                            "from": check.from,
                            "to": check.to,
                            "gap_minutes": check.gap_minutes,
                            "travel": check.travel,
                            "feasible": check.feasible,
                        })
                    })
                    .collect();
                json!({ "ok": true, "name": name, "checks": checks })
            }
        }
    }
}

/// Run one command. Rejections become `Reply::Done(false)`; they never
/// abort the script.
pub fn execute(campus: &mut Campus, command: &ScriptCommand) -> Reply {
    match apply(campus, command) {
        Ok(reply) => reply,
        Err(e) => {
            tracing::debug!(command = command.keyword(), error = %e, "command rejected");
            Reply::Done(false)
        }
    }
}

fn student_name(registry: &Registry, ufid: &Ufid) -> String {
    registry
        .student(ufid)
        .map(|s| s.name().to_string())
        .unwrap_or_default()
}

fn apply(campus: &mut Campus, command: &ScriptCommand) -> Result<Reply> {
    let Campus { graph, registry } = campus;
    let reply = match command {
        ScriptCommand::Insert {
            name,
            ufid,
            residence,
            classes,
        } => {
            registry.add_student(&*graph, name, ufid.clone(), *residence, classes.clone())?;
            Reply::Done(true)
        }
        ScriptCommand::Remove { ufid } => {
            registry.remove_student(ufid)?;
            Reply::Done(true)
        }
        ScriptCommand::DropClass { ufid, code } => {
            registry.drop_class(ufid, code)?;
            Reply::Done(true)
        }
        ScriptCommand::ReplaceClass { ufid, old, new } => {
            registry.replace_class(ufid, old, new.clone())?;
            Reply::Done(true)
        }
        ScriptCommand::RemoveClass { code } => Reply::Count(registry.remove_class(code)),
        ScriptCommand::ToggleEdgesClosure { pairs } => {
            graph.toggle_edges(pairs)?;
            Reply::Done(true)
        }
        ScriptCommand::CheckEdgeStatus { from, to } => Reply::Status(graph.edge_status(*from, *to)),
        ScriptCommand::IsConnected { from, to } => Reply::Done(is_connected(&*graph, *from, *to)),
        ScriptCommand::PrintShortestEdges { ufid } => {
            let times = registry.shortest_times(&*graph, ufid)?;
            Reply::ShortestEdges {
                name: student_name(registry, ufid),
                times,
            }
        }
        ScriptCommand::PrintStudentZone { ufid } => {
            let zone = registry.student_zone(&*graph, ufid)?;
            Reply::Zone {
                name: student_name(registry, ufid),
                zone,
            }
        }
        ScriptCommand::VerifySchedule { ufid } => {
            let checks = registry.verify_schedule(&*graph, ufid)?;
            Reply::Schedule {
                name: student_name(registry, ufid),
                checks,
            }
        }
    };
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::run::parser::parse_line;
    use campusnet_core::config::RegistryConfig;
    use campusnet_core::graph::EdgeStore;
    use campusnet_core::load::{read_classes, read_edges};

    const EDGES: &str = "\
id1,id2,name1,name2,time
16,5,Hume Hall,Reitz Union,5
5,14,Reitz Union,Marston Library,4
16,40,Hume Hall,Broward Hall,6
40,50,Broward Hall,Little Hall,7
";

    const CLASSES: &str = "\
code,location,start,end
COP3530,14,10:40,11:30
CDA3101,5,09:35,10:25
MAC2311,50,11:45,12:35
";

    fn campus() -> Campus {
        let mut graph = EdgeStore::new();
        let mut registry = Registry::new(RegistryConfig::default());
        read_edges(EDGES.as_bytes(), &mut graph);
        read_classes(CLASSES.as_bytes(), &mut graph, &mut registry);
        Campus { graph, registry }
    }

    fn run(campus: &mut Campus, line: &str) -> String {
        let reply = execute(campus, &parse_line(line).unwrap());
        let mut out = Vec::new();
        reply.render_human(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_insert_and_shortest_edges() {
        let mut campus = campus();
        assert_eq!(
            run(&mut campus, r#"insert "Brian" 35459999 16 3 COP3530 CDA3101 MAC2311"#),
            "successful\n"
        );
        assert_eq!(
            run(&mut campus, "printShortestEdges 35459999"),
            "Name: Brian\nCDA3101 | Total Time: 5\nCOP3530 | Total Time: 9\nMAC2311 | Total Time: 13\n"
        );
    }

    #[test]
    fn test_toggle_then_status_and_unreachable_time() {
        let mut campus = campus();
        run(&mut campus, r#"insert "Brian" 35459999 16 1 MAC2311"#);

        assert_eq!(run(&mut campus, "checkEdgeStatus 16 40"), "open\n");
        assert_eq!(run(&mut campus, "toggleEdgesClosure 1 40 16"), "successful\n");
        assert_eq!(run(&mut campus, "checkEdgeStatus 16 40"), "closed\n");
        assert_eq!(run(&mut campus, "checkEdgeStatus 16 50"), "DNE\n");
        assert_eq!(run(&mut campus, "checkEdgeStatus -1 16"), "DNE\n");
        assert_eq!(run(&mut campus, "isConnected 16 50"), "unsuccessful\n");
        assert_eq!(
            run(&mut campus, "printShortestEdges 35459999"),
            "Name: Brian\nMAC2311 | Total Time: -1\n"
        );
    }

    #[test]
    fn test_toggle_with_missing_edge_changes_nothing() {
        let mut campus = campus();
        assert_eq!(
            run(&mut campus, "toggleEdgesClosure 2 16 5 16 50"),
            "unsuccessful\n"
        );
        assert_eq!(run(&mut campus, "checkEdgeStatus 16 5"), "open\n");
    }

    #[test]
    fn test_remove_class_counts() {
        let mut campus = campus();
        run(&mut campus, r#"insert "Brian" 35459999 16 2 COP3530 MAC2311"#);
        run(&mut campus, r#"insert "Brandon" 45679999 40 1 COP3530"#);
        assert_eq!(run(&mut campus, "removeClass COP3530"), "2\n");
        assert_eq!(run(&mut campus, "removeClass COP3530"), "unsuccessful\n");
        // Brandon held only COP3530
        assert_eq!(run(&mut campus, "remove 45679999"), "unsuccessful\n");
        assert_eq!(run(&mut campus, "remove 35459999"), "successful\n");
    }

    #[test]
    fn test_zone_and_schedule_output() {
        let mut campus = campus();
        run(&mut campus, r#"insert "Brian" 35459999 16 3 COP3530 CDA3101 MAC2311"#);
        assert_eq!(
            run(&mut campus, "printStudentZone 35459999"),
            "Student Zone Cost For Brian: 22\n"
        );
        assert_eq!(
            run(&mut campus, "verifySchedule 35459999"),
            "Schedule Check for Brian:\nCDA3101 - COP3530 \"Can make it!\"\nCOP3530 - MAC2311 \"Cannot make it!\"\n"
        );

        run(&mut campus, "dropClass 35459999 MAC2311");
        run(&mut campus, "dropClass 35459999 CDA3101");
        assert_eq!(run(&mut campus, "verifySchedule 35459999"), "unsuccessful\n");
    }

    #[test]
    fn test_unknown_student_is_unsuccessful() {
        let mut campus = campus();
        assert_eq!(run(&mut campus, "printShortestEdges 11111111"), "unsuccessful\n");
        assert_eq!(run(&mut campus, "printStudentZone 11111111"), "unsuccessful\n");
        assert_eq!(run(&mut campus, "replaceClass 11111111 COP3530 CDA3101"), "unsuccessful\n");
    }

    #[test]
    fn test_json_reply_shapes() {
        let mut campus = campus();
        run(&mut campus, r#"insert "Brian" 35459999 16 1 MAC2311"#);
        let reply = execute(&mut campus, &parse_line("printStudentZone 35459999").unwrap());
        let json = reply.to_json();
        assert_eq!(json["ok"], true);
        assert_eq!(json["cost"], 13);
        assert_eq!(json["partial"], false);

        let reply = execute(&mut campus, &parse_line("checkEdgeStatus 1 2").unwrap());
        assert_eq!(reply.to_json()["status"], "DNE");
        assert_eq!(Reply::Count(0).to_json()["ok"], false);
    }
}
