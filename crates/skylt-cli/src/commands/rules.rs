use skylt_core::error::SkyltError;
use skylt_core::generate::engine::rows_for;
use skylt_core::model::Project;
use skylt_core::rules::builtin::{pin_palette, PRESETS};
use skylt_core::rules::{Bundle, Category, KeywordTable, PinAction, Preset};

pub fn list() -> Result<(), SkyltError> {
    println!("Keyword rules (matched case-insensitively, each at most once per page):\n");

    // Render rows against a level-1 sample project so EXIT shows up.
    let mut sample = Project::new("sample");
    sample.level = "1".into();

    for rule in KeywordTable::builtin().rules() {
        println!("  {:<11} /{}/", rule.category, rule.pattern.as_str());

        let by_preset: Vec<(Preset, Vec<String>)> = PRESETS
            .iter()
            .map(|&preset| {
                let rows: Vec<String> = rows_for(rule.category, "<room>", &sample, preset)
                    .iter()
                    .map(|r| format!("{} / {} / {}", r.sign_type, r.room_number, r.room_name))
                    .collect();
                (preset, rows)
            })
            .collect();

        let preset_independent = by_preset.windows(2).all(|w| w[0].1 == w[1].1);
        if preset_independent {
            print_rows(rule.category, &by_preset[0].1, None);
        } else {
            for (preset, rows) in &by_preset {
                print_rows(rule.category, rows, Some(*preset));
            }
        }
        println!();
    }
    Ok(())
}

fn print_rows(category: Category, rows: &[String], preset: Option<Preset>) {
    let prefix = preset.map(|p| format!("[{p}] ")).unwrap_or_default();
    if rows.is_empty() {
        println!("              {prefix}no rows");
    }
    for row in rows {
        println!("              {prefix}-> {row}");
    }
    if category == Category::Exit {
        println!("              only when the project level is 1");
    }
}

pub fn presets() -> Result<(), SkyltError> {
    println!("Row presets:\n");
    for preset in PRESETS {
        let marker = if *preset == Preset::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<10} {}{}", preset.name(), preset.description(), marker);
    }
    println!("  Any other preset name behaves like 'generic'.\n");

    println!("Pin palette:\n");
    for pin in pin_palette() {
        let action = match &pin.action {
            PinAction::Bundle(Bundle::Elevator) => {
                "CALLBOX, EVAC, HALL DIRECT for ELEV. LOBBY".to_string()
            }
            PinAction::Bundle(Bundle::Stair) => {
                "INGRESS and EGRESS, room number from page text".to_string()
            }
            PinAction::Payload(payload) => payload
                .fields
                .iter()
                .map(|(field, value)| format!("{field}={value}"))
                .collect::<Vec<_>>()
                .join(", "),
        };
        println!("  [{}] {:<16} {}", pin.key, pin.label, action);
    }
    Ok(())
}
