//! Mode identity and the registry seam.

use crate::error::ModeError;
use crate::led::LedStrip;

/// Identifies a mode inside a registry and a server's route table.
///
/// Collaborators store this handle instead of a reference to the mode, so a
/// mode never has to be borrowed by the things that dispatch to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeId(pub usize);

impl From<usize> for ModeId {
    fn from(id: usize) -> Self {
        ModeId(id)
    }
}

impl From<ModeId> for usize {
    fn from(id: ModeId) -> Self {
        id.0
    }
}

/// Trait for the registry that decides which mode drives the LEDs.
///
/// At most one registered mode is active at a time.
pub trait ModeRegistry {
    /// Registers a mode so it can later be switched to.
    fn register_mode(&mut self, id: ModeId) -> Result<(), ModeError>;

    /// Makes `id` the active mode.
    fn switch_to_mode(&mut self, id: ModeId);
}

/// A behavior that can own the LED output while it is the active mode.
pub trait Mode {
    /// The handle this mode registered under.
    fn id(&self) -> ModeId;

    /// Renders one animation frame.
    fn animate<L: LedStrip>(&mut self, pixels: &mut L);
}
