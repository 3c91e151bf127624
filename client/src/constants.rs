/// Key bindings file, relative to the game folder.
pub const BINDS_PATH: &str = "binds.ron";
