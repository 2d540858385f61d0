mod loader;
mod seed_data;

pub use loader::{load_engine_config_from_path, load_seed_data_from_path, seed_data_path};
pub use seed_data::SeedData;

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{SeedData, load_engine_config_from_path, load_seed_data_from_path, seed_data_path};
    use crate::model::{Building, Resource, UpgradeEffect};

    #[test]
    fn bundled_seed_matches_starting_state() {
        let seed = SeedData::bundled().expect("bundled seed data should load");

        assert_eq!(
            seed.resources,
            vec![Resource::new("food", "Food"), Resource::new("stone", "Stone")]
        );
        assert_eq!(
            seed.buildings,
            vec![
                Building::new("farm", "Farm", "food", 1.0, 1),
                Building::new("quarry", "Quarry", "stone", 1.0, 1),
            ]
        );
        assert_eq!(seed.upgrades.len(), 1);
        assert_eq!(seed.upgrades[0].id.as_str(), "doubleFarms");
        assert_eq!(
            seed.upgrades[0].effect,
            UpgradeEffect::ScaleBuildingRate {
                building: "farm".into(),
                factor: 2.0,
            }
        );
    }

    #[test]
    fn seed_file_on_disk_loads() {
        let seed = load_seed_data_from_path(seed_data_path()).expect("seed.json should load");
        assert_eq!(seed, SeedData::bundled().expect("bundled seed data should load"));
    }

    #[test]
    fn dangling_references_are_rejected() {
        let mut seed = SeedData::bundled().expect("bundled seed data should load");
        seed.buildings.push(Building::new("mine", "Mine", "gold", 1.0, 0));

        let err = seed.validate().expect_err("gold is not a resource");
        assert!(err.to_string().contains("unknown resource 'gold'"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut seed = SeedData::bundled().expect("bundled seed data should load");
        seed.resources.push(Resource::new("food", "More Food"));

        let err = seed.validate().expect_err("food is listed twice");
        assert!(err.to_string().contains("duplicate resource id 'food'"));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("homestead_idle_missing_seed.json");
        let _ = fs::remove_file(&path);

        let err = load_seed_data_from_path(&path).expect_err("file does not exist");
        assert!(format!("{err:#}").contains("failed reading seed data file"));
    }

    #[test]
    fn engine_config_with_empty_log_is_rejected() {
        let path = std::env::temp_dir().join("homestead_idle_zero_log_config.json");
        fs::write(&path, r#"{ "max_log_entries": 0 }"#).expect("temp config written");

        let err = load_engine_config_from_path(&path).expect_err("zero capacity rejected");
        let _ = fs::remove_file(&path);
        assert!(format!("{err:#}").contains("max_log_entries must be at least 1"));
    }

    #[test]
    fn engine_config_file_loads() {
        let path = std::env::temp_dir().join("homestead_idle_valid_config.json");
        fs::write(&path, r#"{ "fps_window": 30, "rng_seed": 7 }"#).expect("temp config written");

        let config = load_engine_config_from_path(&path).expect("config loads");
        let _ = fs::remove_file(&path);
        assert_eq!(config.fps_window, 30);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.max_log_entries, 100);
    }
}
