// Input handling system
//
// Abstract actions are bound to concrete keys per device family, and
// handlers read one physical device through one keymap.
//
// ## Architecture
//
// - `action`: Defines game actions and the key vocabulary
// - `keymap`: Immutable action -> key tables
// - `devices`: Raw keyboard and gamepad state
// - `handler`: Per-device, per-consumer input state
// - `manager`: Input system feeding device events and creating handlers
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, InputSystem, Key, Keymap};
//
// let keymap = Arc::new(Keymap::new([(Action::Confirm, Key::key(KeyCode::Space))]));
// let mut input = InputSystem::new();
// let mut player = input.new_handler(0, keymap);
//
// // In your event loop, feed keyboard events and poll gamepads
// input.process_keyboard_event(&key_event);
// input.poll_gamepads();
//
// // Once per tick, update the handler and query it
// player.update(input.devices());
// if player.just_pressed(Action::Confirm) {
//     // Confirm was just pressed!
// }
// input.end_tick();
// ```

pub mod action;
pub mod devices;
pub mod handler;
pub mod keymap;
pub mod manager;

// Re-export commonly used types
pub use action::{Action, DeviceFamily, GamepadButton, Key};
pub use devices::DeviceState;
pub use handler::Handler;
pub use keymap::{Keymap, KeymapError};
pub use manager::InputSystem;
