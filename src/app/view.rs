use std::fmt::Write as _;

use bevy::prelude::*;
use homestead_idle::Upgrade;

use super::input::{BUILD_KEYS, CLICK_KEYS, UPGRADE_KEYS, key_label};
use super::resources::{HudText, RuntimeConfig, SessionState};
use super::state::LoopState;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HudText"),
        HudText,
        Text::new("Initializing..."),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.93, 0.86)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(12.0),
            ..default()
        },
    ));
}

fn upgrade_line(key: KeyCode, upgrade: &Upgrade, bought: u32) -> String {
    let mut line = format!("  [{}] {} (bought {bought})", key_label(key), upgrade.name);
    if !upgrade.description.is_empty() {
        line.push_str(" - ");
        line.push_str(&upgrade.description);
    }
    line
}

pub fn refresh_hud(
    session: Res<SessionState>,
    config: Res<RuntimeConfig>,
    loop_state: Res<State<LoopState>>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut hud) = hud_query.get_single_mut() else {
        return;
    };

    let engine = &session.engine;
    let run_label = match loop_state.get() {
        LoopState::Running => "RUNNING",
        LoopState::Stopped => "STOPPED",
    };
    let rates = engine.production_per_second();

    // Writing to a String cannot fail.
    let mut out = String::new();
    let _ = writeln!(
        out,
        "FPS: {}  Loop: {}  Tick: {}",
        engine.fps(),
        run_label,
        engine.tick_index()
    );

    let _ = writeln!(out, "\nResources");
    for (key, resource) in CLICK_KEYS.iter().zip(engine.resources()) {
        let rate = rates.get(&resource.id).copied().unwrap_or(0.0);
        let _ = writeln!(
            out,
            "  [{}] {}: {} (+{:.1}/s)",
            key_label(*key),
            resource.name,
            resource.value.floor(),
            rate
        );
    }

    let _ = writeln!(out, "\nBuildings");
    for (key, building) in BUILD_KEYS.iter().zip(engine.buildings()) {
        let _ = writeln!(
            out,
            "  [{}] {} x{} ({:.2} {}/s each)",
            key_label(*key),
            building.name,
            building.amount,
            building.base_rate,
            building.produces
        );
    }

    let _ = writeln!(out, "\nUpgrades");
    for (key, upgrade) in UPGRADE_KEYS.iter().zip(engine.upgrades().values()) {
        let bought = engine.upgrade_catalog().times_applied(&upgrade.id);
        let _ = writeln!(out, "{}", upgrade_line(*key, upgrade, bought));
    }

    let _ = writeln!(out, "\nGame Log");
    let log = engine.log_messages();
    let skip = log.len().saturating_sub(config.visible_log_lines);
    for entry in log.iter().skip(skip) {
        let _ = writeln!(out, "  {}", entry.message);
    }

    let _ = write!(out, "\nSpace start/stop loop");
    *hud = Text::new(out);
}

#[cfg(test)]
mod tests {
    use bevy::prelude::KeyCode;
    use homestead_idle::{SeedData, UpgradeId};

    use super::upgrade_line;

    #[test]
    fn upgrade_line_shows_description() {
        let seed = SeedData::bundled().expect("bundled seed data");
        let upgrade = seed
            .upgrades
            .iter()
            .find(|upgrade| upgrade.id == UpgradeId::from("doubleFarms"))
            .expect("doubleFarms is seeded");

        assert_eq!(
            upgrade_line(KeyCode::KeyA, upgrade, 2),
            "  [A] Double Farm Production (bought 2) - Doubles the base rate of every farm."
        );
    }

    #[test]
    fn upgrade_line_without_description_stops_at_count() {
        let mut upgrade = SeedData::bundled().expect("bundled seed data").upgrades.remove(0);
        upgrade.description.clear();

        assert_eq!(
            upgrade_line(KeyCode::KeyS, &upgrade, 0),
            "  [S] Double Farm Production (bought 0)"
        );
    }
}
