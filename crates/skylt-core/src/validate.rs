//! Advisory consistency checks over a project's schedule.
//!
//! Validation never mutates the project and never blocks export: an empty
//! issue list means "all good", anything else is a flat list of warnings.

use crate::model::{Project, ScheduleRow};
use crate::rules::{sign, ELEV_LOBBY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    ElevatorBundleIncomplete,
    StairBundleIncomplete,
    ExitOffLevelOne,
    UtilityNotBoh,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Check the schedule for incomplete bundles and level or sign-type
/// inconsistencies.
pub fn validate(project: &Project) -> Vec<Issue> {
    let rows = &project.schedule;
    let mut issues = Vec::new();

    check_bundles(
        rows,
        &sign::ELEVATOR_BUNDLE,
        |r| non_empty_or(&r.room_name, ELEV_LOBBY),
        |room, missing| Issue {
            kind: IssueKind::ElevatorBundleIncomplete,
            message: format!("Elevator bundle incomplete in {room}: missing {missing}"),
        },
        &mut issues,
    );

    check_bundles(
        rows,
        &sign::STAIR_BUNDLE,
        |r| non_empty_or(&r.room_number, "?"),
        |room, missing| Issue {
            kind: IssueKind::StairBundleIncomplete,
            message: format!("Stair {room}: missing {missing}"),
        },
        &mut issues,
    );

    if !project.is_level_one() {
        for _ in rows
            .iter()
            .filter(|r| r.sign_type.eq_ignore_ascii_case(sign::EXIT))
        {
            issues.push(Issue {
                kind: IssueKind::ExitOffLevelOne,
                message: "EXIT present but project level is not 1".to_string(),
            });
        }
    }

    for row in rows.iter().filter(|r| {
        r.room_name.eq_ignore_ascii_case("ELECTRICAL") || r.room_name.eq_ignore_ascii_case("DATA")
    }) {
        if !row.sign_type.eq_ignore_ascii_case(sign::BOH) {
            issues.push(Issue {
                kind: IssueKind::UtilityNotBoh,
                message: format!("{}: should be BOH", row.room_name),
            });
        }
    }

    debug!(rows = rows.len(), issues = issues.len(), "schedule validated");
    issues
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Group rows belonging to a bundle by `group_key` and report every required
/// sign type a group lacks. Groups are reported in first-seen order.
fn check_bundles<'a>(
    rows: &'a [ScheduleRow],
    required: &[&str],
    group_key: impl Fn(&'a ScheduleRow) -> &'a str,
    issue: impl Fn(&str, &str) -> Issue,
    issues: &mut Vec<Issue>,
) {
    let mut groups: Vec<(&str, HashSet<String>)> = Vec::new();

    for row in rows {
        let sign_type = row.sign_type.to_uppercase();
        if !required.contains(&sign_type.as_str()) {
            continue;
        }
        let key = group_key(row);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, present)) => {
                present.insert(sign_type);
            }
            None => groups.push((key, HashSet::from([sign_type]))),
        }
    }

    for (room, present) in &groups {
        for &req in required {
            if !present.contains(req) {
                issues.push(issue(*room, req));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(level: &str, rows: &[(&str, &str, &str)]) -> Project {
        let mut p = Project::new("Test");
        p.level = level.into();
        let schedule = rows
            .iter()
            .map(|(sign, number, name)| p.row(sign, number, name, ""))
            .collect();
        p.schedule = schedule;
        p
    }

    fn messages(issues: &[Issue]) -> Vec<String> {
        issues.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_empty_schedule_is_clean() {
        assert!(validate(&project("2", &[])).is_empty());
    }

    #[test]
    fn test_lone_callbox_reports_two_missing() {
        let p = project("2", &[("CALLBOX", "1-100", "ELEV. LOBBY")]);
        assert_eq!(
            messages(&validate(&p)),
            vec![
                "Elevator bundle incomplete in ELEV. LOBBY: missing EVAC",
                "Elevator bundle incomplete in ELEV. LOBBY: missing HALL DIRECT",
            ]
        );
    }

    #[test]
    fn test_complete_elevator_bundle_is_clean() {
        let p = project(
            "2",
            &[
                ("CALLBOX", "1-100", "ELEV. LOBBY"),
                ("evac", "1-100", "ELEV. LOBBY"),
                ("Hall Direct", "C1-100", "ELEV. LOBBY"),
            ],
        );
        assert!(validate(&p).is_empty());
    }

    #[test]
    fn test_elevator_groups_by_room_name_with_default() {
        let p = project(
            "2",
            &[
                ("CALLBOX", "", ""),
                ("EVAC", "", "ELEV. LOBBY"),
                ("HALL DIRECT", "", "ELEV. LOBBY"),
                ("EVAC", "", "NORTH LOBBY"),
            ],
        );
        let issues = validate(&p);
        assert_eq!(
            messages(&issues),
            vec![
                "Elevator bundle incomplete in NORTH LOBBY: missing CALLBOX",
                "Elevator bundle incomplete in NORTH LOBBY: missing HALL DIRECT",
            ]
        );
        assert!(issues
            .iter()
            .all(|i| i.kind == IssueKind::ElevatorBundleIncomplete));
    }

    #[test]
    fn test_stair_groups_by_room_number() {
        let p = project(
            "2",
            &[
                ("INGRESS", "S1", "STAIR"),
                ("EGRESS", "S1", "STAIR"),
                ("INGRESS", "", "STAIR"),
                ("egress", "S2", "STAIR"),
            ],
        );
        assert_eq!(
            messages(&validate(&p)),
            vec!["Stair ?: missing EGRESS", "Stair S2: missing INGRESS"]
        );
    }

    #[test]
    fn test_exit_off_level_one_once_per_row() {
        let p = project("2", &[("EXIT", "", "EXIT"), ("exit", "", "EXIT")]);
        let issues = validate(&p);
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| i.message == "EXIT present but project level is not 1"));

        let ground = project(" 1", &[("EXIT", "", "EXIT")]);
        assert!(validate(&ground).is_empty());
    }

    #[test]
    fn test_utility_rooms_must_be_boh() {
        let p = project(
            "2",
            &[
                ("FOH", "", "Electrical"),
                ("boh", "", "DATA"),
                ("FOH", "", "data"),
                ("FOH", "", "LOUNGE"),
            ],
        );
        assert_eq!(
            messages(&validate(&p)),
            vec!["Electrical: should be BOH", "data: should be BOH"]
        );
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let p = project("3", &[("EXIT", "", "EXIT"), ("CALLBOX", "", "")]);
        let before = p.clone();
        let _ = validate(&p);
        assert_eq!(p, before);
    }
}
