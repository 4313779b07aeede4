//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use trellis_platform::key_names::is_modifier_key;
use trellis_platform::KeyCombo;

use super::core::TrellisApp;
use super::init::{viewport_of, window_bounds_of};

impl ApplicationHandler for TrellisApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                if let Some(session) = self.session.as_mut() {
                    session.shutdown();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_window_geometry();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } | WindowEvent::Moved(_) => {
                self.sync_window_geometry();
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput {
                event,
                is_synthetic,
                ..
            } => {
                if !is_synthetic {
                    self.handle_keyboard_input(event);
                }
            }

            _ => {}
        }

        if self.session.as_ref().is_some_and(|s| s.should_exit()) {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl TrellisApp {
    /// Keys the window receives while no page holds focus.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };
        if is_modifier_key(&key_name) {
            return;
        }

        let combo = KeyCombo::from_flags(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            &key_name,
        );
        if let Some(session) = self.session.as_mut() {
            session.handle_window_key(&trellis_platform::KeyEvent::press(combo));
        }
    }

    /// Re-layout panes for the window's content size and remember where the
    /// window sits.
    fn sync_window_geometry(&mut self) {
        let (Some(window), Some(session)) = (self.window.as_ref(), self.session.as_mut()) else {
            return;
        };
        session.resize_viewport(viewport_of(window));
        session.set_window_bounds(window_bounds_of(window));
    }
}
