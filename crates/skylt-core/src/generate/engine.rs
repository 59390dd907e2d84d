use crate::generate::dedup::dedup_schedule;
use crate::generate::outcome::GenerateOutcome;
use crate::model::{Project, ScheduleRow};
use crate::rules::{
    derive_room_number, sign, Category, KeywordTable, Preset, ELEV_BUNDLE_DOOR_ROOM,
    ELEV_BUNDLE_ROOM, ELEV_LOBBY, NOTE_AUTO, NOTE_DOOR_TO_LOBBY, NOTE_LEVEL_ONE_ONLY, STAIR,
};
use tracing::{debug, info};

/// Run the built-in keyword rules over `text`, append the generated rows to
/// the project's schedule and deduplicate the whole schedule.
pub fn apply(text: &str, project: &mut Project, preset: Preset) -> GenerateOutcome {
    apply_with_table(KeywordTable::builtin(), text, project, preset)
}

/// Same as [`apply`], against an explicit keyword table.
pub fn apply_with_table(
    table: &KeywordTable,
    text: &str,
    project: &mut Project,
    preset: Preset,
) -> GenerateOutcome {
    let before = project.schedule.len();
    let matched = table.matches(text);
    let room_number = derive_room_number(text);

    let mut generated = 0;
    for &category in &matched {
        let rows = rows_for(category, &room_number, project, preset);
        debug!(
            category = %category,
            rows = rows.len(),
            room_number = %room_number,
            "keyword matched"
        );
        generated += rows.len();
        project.schedule.extend(rows);
    }

    let removed_duplicates = dedup_schedule(&mut project.schedule);
    let net_delta = project.schedule.len() as i64 - before as i64;

    info!(
        preset = %preset,
        matched = matched.len(),
        generated,
        removed_duplicates,
        net_delta,
        "schedule generated from text"
    );

    GenerateOutcome {
        preset,
        matched,
        generated,
        removed_duplicates,
        net_delta,
    }
}

/// Rows produced by one matched category.
pub fn rows_for(
    category: Category,
    room_number: &str,
    project: &Project,
    preset: Preset,
) -> Vec<ScheduleRow> {
    let auto = |sign_type: &str, room_name: &str| {
        project.row(sign_type, room_number, room_name, NOTE_AUTO)
    };

    match category {
        Category::Elevator => match preset {
            Preset::Southwood => elevator_bundle(project, NOTE_AUTO, NOTE_DOOR_TO_LOBBY),
            Preset::Generic => vec![project.row(
                sign::ELEVATOR_LOBBY,
                "",
                sign::ELEVATOR_LOBBY,
                NOTE_AUTO,
            )],
        },
        Category::Stair => vec![auto(sign::INGRESS, STAIR), auto(sign::EGRESS, STAIR)],
        Category::WomensRr => vec![auto(sign::FOH, "WOMEN'S RESTROOM")],
        Category::MensRr => vec![auto(sign::FOH, "MEN'S RESTROOM")],
        Category::Restroom => vec![auto(sign::FOH, "RESTROOM")],
        Category::Electrical => vec![auto(sign::BOH, "ELECTRICAL")],
        Category::Data => vec![auto(sign::BOH, "DATA")],
        Category::Exit if project.is_level_one() => {
            vec![project.row(sign::EXIT, "", sign::EXIT, NOTE_LEVEL_ONE_ONLY)]
        }
        Category::Exit => Vec::new(),
        Category::Lobby => Vec::new(),
        Category::BohMisc => vec![auto(sign::BOH, "MECH/JANITORIAL")],
        Category::Yoga => vec![auto(sign::FOH, "YOGA")],
        Category::PrFit => vec![auto(sign::FOH, "PR FIT")],
    }
}

/// The three-sign elevator lobby bundle with its fixed room numbers.
pub(crate) fn elevator_bundle(project: &Project, note: &str, door_note: &str) -> Vec<ScheduleRow> {
    vec![
        project.row(sign::CALLBOX, ELEV_BUNDLE_ROOM, ELEV_LOBBY, note),
        project.row(sign::EVAC, ELEV_BUNDLE_ROOM, ELEV_LOBBY, note),
        project.row(sign::HALL_DIRECT, ELEV_BUNDLE_DOOR_ROOM, ELEV_LOBBY, door_note),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(level: &str) -> Project {
        let mut p = Project::new("Test");
        p.building = "Tower".into();
        p.level = level.into();
        p
    }

    fn signs(p: &Project) -> Vec<&str> {
        p.schedule.iter().map(|r| r.sign_type.as_str()).collect()
    }

    #[test]
    fn test_southwood_elevator_bundle() {
        let mut p = project("2");
        let outcome = apply("ELEVATOR", &mut p, Preset::Southwood);
        assert_eq!(outcome.generated, 3);
        assert_eq!(outcome.net_delta, 3);
        assert_eq!(signs(&p), vec!["CALLBOX", "EVAC", "HALL DIRECT"]);
        assert_eq!(p.schedule[0].room_number, "1-100");
        assert_eq!(p.schedule[2].room_number, "C1-100");
        assert_eq!(p.schedule[2].notes, "Door to lobby");
        assert!(p.schedule.iter().all(|r| r.room_name == "ELEV. LOBBY"));
        assert!(p.schedule.iter().all(|r| r.building == "Tower" && r.level == "2"));
    }

    #[test]
    fn test_generic_elevator_single_row() {
        let mut p = project("2");
        let outcome = apply("ELEV. 3", &mut p, Preset::Generic);
        assert_eq!(outcome.generated, 1);
        let row = &p.schedule[0];
        assert_eq!(row.sign_type, "ELEVATOR LOBBY");
        assert_eq!(row.room_number, "");
        assert_eq!(row.room_name, "ELEVATOR LOBBY");
        assert_eq!(row.notes, "Auto");
    }

    #[test]
    fn test_stair_uses_derived_number() {
        let mut p = project("2");
        apply("STAIR C2-210", &mut p, Preset::Generic);
        assert_eq!(signs(&p), vec!["INGRESS", "EGRESS"]);
        assert!(p.schedule.iter().all(|r| r.room_number == "C2-210"));
        assert!(p.schedule.iter().all(|r| r.room_name == "STAIR"));
    }

    #[test]
    fn test_exit_only_on_level_one() {
        let mut upper = project("2");
        let outcome = apply("EXIT", &mut upper, Preset::Southwood);
        assert_eq!(outcome.matched, vec![Category::Exit]);
        assert_eq!(outcome.generated, 0);
        assert!(upper.schedule.is_empty());

        let mut ground = project(" 1 ");
        apply("EXIT", &mut ground, Preset::Southwood);
        assert_eq!(ground.schedule.len(), 1);
        assert_eq!(ground.schedule[0].sign_type, "EXIT");
        assert_eq!(ground.schedule[0].room_name, "EXIT");
        assert_eq!(ground.schedule[0].notes, "Level 1 only");
    }

    #[test]
    fn test_lobby_is_inert() {
        let mut p = project("1");
        let outcome = apply("LOBBY", &mut p, Preset::Southwood);
        assert_eq!(outcome.matched, vec![Category::Lobby]);
        assert_eq!(outcome.generated, 0);
        assert!(p.schedule.is_empty());
    }

    #[test]
    fn test_no_match_is_zero_not_error() {
        let mut p = project("1");
        let outcome = apply("", &mut p, Preset::Southwood);
        assert!(!outcome.matched_anything());
        assert_eq!(outcome.net_delta, 0);
    }

    #[test]
    fn test_scenario_stair_and_elevator() {
        let mut p = project("2");
        let outcome = apply("STAIR A ELEVATOR LOBBY", &mut p, Preset::Southwood);
        assert_eq!(outcome.generated, 5);
        assert_eq!(outcome.net_delta, 5);
        assert!(!signs(&p).contains(&"EXIT"));
    }

    #[test]
    fn test_mens_restroom_also_fires_generic_restroom() {
        for preset in [Preset::Southwood, Preset::Generic] {
            let mut p = project("2");
            let outcome = apply("MEN'S RESTROOM 204", &mut p, preset);
            assert_eq!(outcome.matched, vec![Category::MensRr, Category::Restroom]);
            assert_eq!(outcome.generated, 2);

            let names: Vec<&str> = p.schedule.iter().map(|r| r.room_name.as_str()).collect();
            assert_eq!(names, vec!["MEN'S RESTROOM", "RESTROOM"]);

            let mens = &p.schedule[0];
            assert_eq!(mens.sign_type, "FOH");
            assert_eq!(mens.room_number, "204");
            assert_eq!(mens.notes, "Auto");
            assert_eq!(p.schedule[1].room_number, "204");
        }
    }

    #[test]
    fn test_plain_restroom_row() {
        let mut p = project("2");
        apply("TOILET 12", &mut p, Preset::Generic);
        assert_eq!(p.schedule.len(), 1);
        assert_eq!(p.schedule[0].room_name, "RESTROOM");
        assert_eq!(p.schedule[0].room_number, "12");
    }

    #[test]
    fn test_boh_rows() {
        let mut p = project("2");
        apply("ELECTRICAL 110", &mut p, Preset::Generic);
        assert_eq!(p.schedule.len(), 1);
        assert_eq!(p.schedule[0].sign_type, "BOH");
        assert_eq!(p.schedule[0].room_name, "ELECTRICAL");

        let mut p = project("2");
        apply("JANITOR", &mut p, Preset::Generic);
        assert_eq!(p.schedule[0].room_name, "MECH/JANITORIAL");
    }

    #[test]
    fn test_second_apply_is_absorbed() {
        let mut p = project("1");
        let text = "STAIR 12 ELEVATOR EXIT YOGA";
        let first = apply(text, &mut p, Preset::Southwood);
        let snapshot = p.schedule.clone();

        let second = apply(text, &mut p, Preset::Southwood);
        assert_eq!(second.generated, first.generated);
        assert_eq!(second.net_delta, 0);
        assert_eq!(second.removed_duplicates, first.generated);
        assert_eq!(p.schedule, snapshot);
    }

    #[test]
    fn test_pre_existing_duplicates_make_delta_negative() {
        let mut p = project("2");
        let manual = p.row("FOH", "9", "LOUNGE", "");
        p.schedule = vec![manual.clone(), manual.clone(), manual];
        let outcome = apply("nothing to see", &mut p, Preset::Southwood);
        assert_eq!(outcome.generated, 0);
        assert_eq!(outcome.removed_duplicates, 2);
        assert_eq!(outcome.net_delta, -2);
        assert_eq!(p.schedule.len(), 1);
    }

    #[test]
    fn test_generated_row_replaces_manual_row_notes() {
        let mut p = project("2");
        let manual = p.row("BOH", "", "DATA", "checked on site");
        p.schedule.push(manual);
        apply("DATA", &mut p, Preset::Generic);
        assert_eq!(p.schedule.len(), 1);
        assert_eq!(p.schedule[0].notes, "Auto");
    }
}
