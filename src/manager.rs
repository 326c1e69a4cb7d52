//! Fixed-capacity mode registry with a single active mode.

use heapless::Vec;

use crate::error::ModeError;
use crate::led::LedStrip;
use crate::mode::{Mode, ModeId, ModeRegistry};

/// A fixed-capacity registry of modes with a single active mode.
///
/// The manager only tracks identities. Modes stay owned by the application,
/// which asks the manager whether a given mode should render this frame.
/// Nothing is active until the first [`switch_to_mode`](ModeRegistry::switch_to_mode).
///
/// # Type Parameters
/// * `MAX_MODES` - Maximum number of modes that can be registered
#[derive(Debug, Clone)]
pub struct ModeManager<const MAX_MODES: usize> {
    modes: Vec<ModeId, MAX_MODES>,
    active: Option<ModeId>,
}

impl<const MAX_MODES: usize> ModeManager<MAX_MODES> {
    /// Creates an empty manager with no active mode.
    pub fn new() -> Self {
        Self {
            modes: Vec::new(),
            active: None,
        }
    }

    /// Returns the active mode, if any.
    pub fn active_mode(&self) -> Option<ModeId> {
        self.active
    }

    /// Returns true if `id` is the active mode.
    pub fn is_active(&self, id: ModeId) -> bool {
        self.active == Some(id)
    }

    /// Returns true if `id` has been registered.
    pub fn is_registered(&self, id: ModeId) -> bool {
        self.modes.contains(&id)
    }

    /// Returns the number of registered modes.
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    /// Renders one frame of `mode` if it is the active mode.
    ///
    /// # Returns
    /// `true` if the mode was animated.
    pub fn animate_active<M: Mode, L: LedStrip>(&self, mode: &mut M, pixels: &mut L) -> bool {
        if !self.is_active(mode.id()) {
            return false;
        }

        mode.animate(pixels);
        true
    }
}

impl<const MAX_MODES: usize> Default for ModeManager<MAX_MODES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_MODES: usize> ModeRegistry for ModeManager<MAX_MODES> {
    /// # Errors
    /// * `DuplicateMode` - `id` is already registered
    /// * `RegistryFull` - `MAX_MODES` modes are already registered
    fn register_mode(&mut self, id: ModeId) -> Result<(), ModeError> {
        if self.is_registered(id) {
            return Err(ModeError::DuplicateMode(id));
        }

        self.modes
            .push(id)
            .map_err(|_| ModeError::RegistryFull {
                capacity: MAX_MODES,
            })?;
        debug!("mode {} registered ({}/{})", id.0, self.modes.len(), MAX_MODES);
        Ok(())
    }

    /// Unregistered ids are logged and ignored.
    fn switch_to_mode(&mut self, id: ModeId) {
        if !self.is_registered(id) {
            warn!("switch to unregistered mode {} ignored", id.0);
            return;
        }

        if self.active != Some(id) {
            info!("switching to mode {}", id.0);
            self.active = Some(id);
        }
    }
}
