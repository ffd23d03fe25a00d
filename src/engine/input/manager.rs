// Input system - owns the device state and hands out handlers

use super::action::GamepadButton;
use super::devices::DeviceState;
use super::handler::Handler;
use super::keymap::Keymap;
use gilrs::{EventType, GamepadId, Gilrs};
use log::{error, info, warn};
use std::sync::Arc;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Main input system that tracks every physical device
pub struct InputSystem {
    /// Latest device snapshot, read by handlers
    devices: DeviceState,

    /// Gamepad backend, absent when it failed to start
    gilrs: Option<Gilrs>,

    /// Which gamepad owns which device slot
    gamepad_slots: SlotTable<GamepadId>,
}

impl InputSystem {
    /// Create the input system and start the gamepad backend
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(gilrs::Error::NotImplemented(gilrs)) => {
                warn!("Gamepad input is not implemented on this platform");
                Some(gilrs)
            }
            Err(err) => {
                error!("Failed to initialize gamepad input: {:?}", err);
                None
            }
        };

        let mut system = Self::without_gamepads();
        system.gilrs = gilrs;
        system.register_connected_gamepads();
        system
    }

    /// Create an input system with no gamepad backend
    pub fn without_gamepads() -> Self {
        Self {
            devices: DeviceState::new(),
            gilrs: None,
            gamepad_slots: SlotTable::new(),
        }
    }

    /// Create a handler reading `slot` through `keymap`
    ///
    /// Never fails: a slot without a device simply yields no input.
    pub fn new_handler(&self, slot: usize, keymap: Arc<Keymap>) -> Handler {
        info!(
            "Input handler created for {:?} slot {}",
            keymap.family(),
            slot
        );
        Handler::new(slot, keymap)
    }

    /// Get the current device snapshot
    pub fn devices(&self) -> &DeviceState {
        &self.devices
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                ElementState::Pressed => self.devices.press_key(key_code),
                ElementState::Released => self.devices.release_key(key_code),
            }
        }
    }

    /// Drop the presses latched for the tick that just ran
    /// Call this once per tick after every handler has been updated
    pub fn end_tick(&mut self) {
        self.devices.end_tick();
    }

    /// Release all keys when the window loses focus
    pub fn process_focus_lost(&mut self) {
        self.devices.clear_keyboard();
    }

    /// Drain pending gamepad events
    /// Call this once per frame before updating handlers
    pub fn poll_gamepads(&mut self) {
        let Some(gilrs) = &mut self.gilrs else {
            return;
        };

        while let Some(event) = gilrs.next_event() {
            if matches!(event.event, EventType::Disconnected) {
                if let Some(slot) = self.gamepad_slots.release(event.id) {
                    info!("Gamepad disconnected from slot {}", slot);
                    self.devices.disconnect_gamepad(slot);
                }
                continue;
            }

            let slot = self.gamepad_slots.acquire(event.id);
            match event.event {
                EventType::Connected => {
                    info!("Gamepad connected in slot {}", slot);
                    self.devices.connect_gamepad(slot);
                }
                EventType::ButtonPressed(button, _) => {
                    if let Some(button) = GamepadButton::from_gilrs(button) {
                        self.devices.connect_gamepad(slot).set_button(button, true);
                    }
                }
                EventType::ButtonReleased(button, _) => {
                    if let Some(button) = GamepadButton::from_gilrs(button) {
                        self.devices.connect_gamepad(slot).set_button(button, false);
                    }
                }
                EventType::AxisChanged(gilrs::Axis::LeftStickX, value, _) => {
                    self.devices.connect_gamepad(slot).set_left_stick_x(value);
                }
                EventType::AxisChanged(gilrs::Axis::LeftStickY, value, _) => {
                    self.devices.connect_gamepad(slot).set_left_stick_y(value);
                }
                _ => {
                    // repeats, other axes and force feedback are not used
                }
            }
        }
    }

    /// Assign slots to gamepads that were plugged in before startup
    fn register_connected_gamepads(&mut self) {
        let Some(gilrs) = &self.gilrs else {
            return;
        };

        let ids: Vec<GamepadId> = gilrs.gamepads().map(|(id, _)| id).collect();
        for id in ids {
            let slot = self.gamepad_slots.acquire(id);
            self.devices.connect_gamepad(slot);
        }
        info!(
            "{} gamepad(s) connected at startup",
            self.devices.connected_gamepads()
        );
    }

    /// Get mutable device state (for tests and replays)
    #[cfg(test)]
    pub fn devices_mut(&mut self) -> &mut DeviceState {
        &mut self.devices
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Device slot assignment for gamepads
///
/// A gamepad keeps its slot while it is connected and gets it back when it
/// reconnects, unless another gamepad took the slot in the meantime. New
/// gamepads fill the lowest slot whose owner is disconnected.
#[derive(Debug)]
struct SlotTable<T> {
    /// Last owner of each slot and whether it is still connected
    slots: Vec<(T, bool)>,
}

impl<T: Copy + PartialEq> SlotTable<T> {
    fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Find or assign the slot of `id`, marking it connected
    fn acquire(&mut self, id: T) -> usize {
        if let Some(slot) = self.slots.iter().position(|(owner, _)| *owner == id) {
            self.slots[slot].1 = true;
            return slot;
        }

        match self.slots.iter().position(|(_, connected)| !connected) {
            Some(slot) => {
                self.slots[slot] = (id, true);
                slot
            }
            None => {
                self.slots.push((id, true));
                self.slots.len() - 1
            }
        }
    }

    /// Mark `id` disconnected, returning its slot if it had one
    fn release(&mut self, id: T) -> Option<usize> {
        let slot = self.slots.iter().position(|(owner, _)| *owner == id)?;
        self.slots[slot].1 = false;
        Some(slot)
    }
}
