use log::LevelFilter;
use seabattle::{level_from, ConfigError, Coordinate, GameConfig, MAX_BOARD_SIZE};

#[test]
fn test_default_config() {
    let config = GameConfig::default();
    assert_eq!(config, GameConfig::new(7, 3, 3));
    assert_eq!(config.fleet_cells(), 9);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_limits() {
    assert_eq!(GameConfig::new(0, 1, 1).validate(), Err(ConfigError::BoardTooSmall));
    assert_eq!(
        GameConfig::new(11, 1, 1).validate(),
        Err(ConfigError::BoardTooLarge { size: 11, max: MAX_BOARD_SIZE })
    );
    assert_eq!(GameConfig::new(7, 0, 3).validate(), Err(ConfigError::NoShips));
    assert_eq!(GameConfig::new(7, 3, 0).validate(), Err(ConfigError::EmptyShip));
    assert_eq!(
        GameConfig::new(4, 1, 5).validate(),
        Err(ConfigError::ShipTooLong { length: 5, board_size: 4 })
    );
    assert_eq!(
        GameConfig::new(2, 2, 2).validate(),
        Err(ConfigError::FleetTooLarge { cells: 4, capacity: 4 })
    );
    assert!(GameConfig::new(10, 3, 10).validate().is_ok());
    assert!(GameConfig::new(2, 3, 1).validate().is_ok());
}

#[test]
fn test_error_display() {
    let err = ConfigError::ShipTooLong { length: 5, board_size: 4 };
    assert_eq!(err.to_string(), "Ship length 5 does not fit on a 4x4 board");
}

#[test]
fn test_coordinate_display() {
    assert_eq!(Coordinate::new(1, 4).to_string(), "B4");
    assert_eq!(Coordinate::new(12, 3).to_string(), "(12, 3)");
    assert_ne!(Coordinate::new(1, 23), Coordinate::new(12, 3));
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
    assert_eq!(level_from(None), LevelFilter::Warn);
}
