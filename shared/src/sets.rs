use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameUpdateSet {
    /// Systems that turn clocks and devices into `GameInput` events
    Input,
    /// The session reducer
    Simulation,
    /// Mirrors session state onto entities
    Sync,
    Ui,
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameOnEnterSet {
    /// Builds the session and spawns its entities
    Session,
    /// HUD that reads the freshly built session
    Ui,
}
