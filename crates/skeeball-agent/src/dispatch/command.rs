use strum::{Display, EnumString};

/// Commands recognised in message payloads.
///
/// Parsing is exact: case-sensitive and without trimming, so `"Start"` and
/// `"start "` are not commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// Begin a game session.
    Start,
    /// End the current game session.
    Stop,
}
