//! Back-to-back class feasibility

use chrono::NaiveTime;
use serde::Serialize;

use crate::graph::algos::shortest_path;
use crate::graph::types::Cost;
use crate::graph::GraphProvider;
use crate::registry::catalog::ClassInfo;
use crate::registry::student::ClassCode;

const TIME_FORMATS: &[&str] = &["%H:%M", "%I:%M %p", "%I:%M%p"];

/// Parse `HH:MM` (24h) or `HH:MM AM/PM`
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

/// Verdict for one consecutive pair of classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleCheck {
    pub from: ClassCode,
    pub to: ClassCode,
    /// Minutes between the end of `from` and the start of `to`
    pub gap_minutes: Option<i64>,
    /// Shortest open travel time between the two locations
    pub travel: Option<Cost>,
    pub feasible: bool,
}

impl ScheduleCheck {
    pub fn verdict(&self) -> &'static str {
        if self.feasible {
            "Can make it!"
        } else {
            "Cannot make it!"
        }
    }
}

/// Order classes by start time and check every consecutive pair.
///
/// Classes whose start time does not parse sort last, by code.
pub fn check_schedule(
    provider: &dyn GraphProvider,
    classes: &[(ClassCode, ClassInfo)],
) -> Vec<ScheduleCheck> {
    let mut ordered: Vec<(Option<NaiveTime>, &ClassCode, &ClassInfo)> = classes
        .iter()
        .map(|(code, info)| (parse_time(&info.start_time), code, info))
        .collect();
    ordered.sort_by(|a, b| {
        (a.0.is_none(), a.0, a.1).cmp(&(b.0.is_none(), b.0, b.1))
    });

    ordered
        .windows(2)
        .map(|pair| {
            let (_, prev_code, prev) = pair[0];
            let (next_start, next_code, next) = pair[1];

            let gap_minutes = parse_time(&prev.end_time)
                .zip(next_start)
                .map(|(end, start)| start.signed_duration_since(end).num_minutes());
            let travel = shortest_path(provider, prev.location, next.location).cost;

            let feasible = match (gap_minutes, travel) {
                (Some(gap), Some(travel)) => gap >= 0 && gap.unsigned_abs() >= travel,
                _ => false,
            };
            if gap_minutes.is_none() {
                tracing::debug!(from = %prev_code, to = %next_code, "unparseable class time");
            }

            ScheduleCheck {
                from: prev_code.clone(),
                to: next_code.clone(),
                gap_minutes,
                travel,
                feasible,
            }
        })
        .collect()
}
