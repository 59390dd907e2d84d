use proptest::prelude::*;
use skylt_core::generate::{apply, dedup_schedule};
use skylt_core::model::{Project, ScheduleRow};
use skylt_core::rules::Preset;
use std::collections::HashSet;

const WORDS: &[&str] = &[
    "STAIR", "ELEVATOR", "ELEV.", "EXIT", "LOBBY", "WOMEN", "MEN", "RESTROOM", "ELECTRICAL",
    "DATA", "IDF", "JANITOR", "YOGA", "PR FIT", "C1-100", "204", "A12", "CORRIDOR", "OFFICE",
];

fn plan_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..8).prop_map(|w| w.join(" "))
}

fn schedule_row() -> impl Strategy<Value = ScheduleRow> {
    (
        prop::sample::select(vec!["FOH", "BOH", "EXIT", "CALLBOX"]),
        prop::sample::select(vec!["", "1", "204"]),
        prop::sample::select(vec!["STAIR", "DATA", "LOUNGE"]),
        prop::sample::select(vec!["", "x", "y"]),
    )
        .prop_map(|(sign, number, name, notes)| ScheduleRow {
            sign_type: sign.into(),
            room_number: number.into(),
            room_name: name.into(),
            building: "A".into(),
            level: "2".into(),
            notes: notes.into(),
        })
}

fn preset() -> impl Strategy<Value = Preset> {
    prop::sample::select(vec![Preset::Southwood, Preset::Generic])
}

fn project(level: &str, schedule: Vec<ScheduleRow>) -> Project {
    let mut p = Project::new("Prop");
    p.building = "A".into();
    p.level = level.into();
    p.schedule = schedule;
    p
}

proptest! {
    #[test]
    fn no_duplicate_identities_after_apply(
        text in plan_text(),
        rows in prop::collection::vec(schedule_row(), 0..12),
        preset in preset(),
    ) {
        let mut p = project("2", rows);
        apply(&text, &mut p, preset);
        let keys: HashSet<_> = p.schedule.iter().map(|r| r.key()).collect();
        prop_assert_eq!(keys.len(), p.schedule.len());
    }

    #[test]
    fn second_apply_is_absorbed(
        text in plan_text(),
        rows in prop::collection::vec(schedule_row(), 0..12),
        preset in preset(),
    ) {
        let mut p = project("1", rows);
        dedup_schedule(&mut p.schedule);
        apply(&text, &mut p, preset);
        let once = p.schedule.clone();
        let outcome = apply(&text, &mut p, preset);
        prop_assert_eq!(outcome.net_delta, 0);
        prop_assert_eq!(&p.schedule, &once);
    }

    #[test]
    fn exit_rows_only_on_level_one(
        text in plan_text(),
        level in prop::sample::select(vec!["1", " 1 ", "2", "", "B1", "10"]),
    ) {
        let mut p = project(level, Vec::new());
        apply(&text, &mut p, Preset::Southwood);
        let exits = p.schedule.iter().filter(|r| r.sign_type == "EXIT").count();
        let expected = usize::from(level.trim() == "1" && text.to_uppercase().contains("EXIT"));
        prop_assert_eq!(exits, expected);
    }

    #[test]
    fn net_delta_matches_length_change(
        text in plan_text(),
        rows in prop::collection::vec(schedule_row(), 0..12),
    ) {
        let mut p = project("1", rows);
        let before = p.schedule.len() as i64;
        let outcome = apply(&text, &mut p, Preset::Southwood);
        prop_assert_eq!(outcome.net_delta, p.schedule.len() as i64 - before);
        prop_assert_eq!(
            outcome.net_delta,
            outcome.generated as i64 - outcome.removed_duplicates as i64
        );
    }
}
