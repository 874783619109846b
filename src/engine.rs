//! Start/stop-able animation frame loop
//!
//! The engine doesn't hold its callback. The owner delivers each granted
//! frame through `begin_frame`, runs its own update when that returns true,
//! then calls `end_frame` so the loop re-arms unless it was stopped in
//! between. At most one frame request is ever outstanding.

use crate::platform::FrameSource;

/// Frame loop driver over a host frame source
#[derive(Debug)]
pub struct Engine<S> {
    frames: S,
    running: bool,
    /// A frame was requested and hasn't been delivered yet
    frame_outstanding: bool,
}

impl<S: FrameSource> Engine<S> {
    pub fn new(frames: S) -> Self {
        Self {
            frames,
            running: false,
            frame_outstanding: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_outstanding_frame(&self) -> bool {
        self.frame_outstanding
    }

    pub fn frames(&self) -> &S {
        &self.frames
    }

    /// Start the loop; no-op if already running
    pub fn start(&mut self) {
        if !self.running {
            log::debug!("engine start");
            self.running = true;
            self.request();
        }
    }

    /// Stop the loop. Any outstanding frame still arrives but does nothing.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("engine stop");
        }
        self.running = false;
    }

    /// Accept a delivered frame. Returns whether the callback should run.
    pub fn begin_frame(&mut self) -> bool {
        self.frame_outstanding = false;
        self.running
    }

    /// Re-arm after the callback ran, unless it stopped the loop
    pub fn end_frame(&mut self) {
        self.request();
    }

    /// Ask for the next frame while running, unless one is already in flight
    fn request(&mut self) {
        if self.running && !self.frame_outstanding {
            self.frame_outstanding = true;
            self.frames.request_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::ManualFrames;
    use proptest::prelude::*;

    fn engine() -> Engine<ManualFrames> {
        Engine::new(ManualFrames::new())
    }

    /// Deliver up to `n` frames, counting callbacks
    fn pump(engine: &mut Engine<ManualFrames>, n: usize) -> usize {
        let mut calls = 0;
        for _ in 0..n {
            if !engine.has_outstanding_frame() {
                break;
            }
            if engine.begin_frame() {
                calls += 1;
                engine.end_frame();
            }
        }
        calls
    }

    #[test]
    fn test_start_requests_one_frame() {
        let mut e = engine();
        assert!(!e.is_running());
        e.start();
        assert!(e.is_running());
        assert!(e.has_outstanding_frame());
        assert_eq!(e.frames().requested(), 1);
    }

    #[test]
    fn test_double_start_single_chain() {
        let mut e = engine();
        e.start();
        e.start();
        assert_eq!(e.frames().requested(), 1);
        assert_eq!(pump(&mut e, 10), 10);
        // One request per delivered frame plus the initial one
        assert_eq!(e.frames().requested(), 11);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut e = engine();
        e.stop();
        assert!(!e.is_running());
        e.start();
        e.stop();
        e.stop();
        assert!(!e.is_running());
    }

    #[test]
    fn test_stop_then_outstanding_frame_is_noop() {
        let mut e = engine();
        e.start();
        e.stop();
        assert!(e.has_outstanding_frame());
        assert!(!e.begin_frame());
        assert!(!e.has_outstanding_frame());
        assert_eq!(e.frames().requested(), 1);
    }

    #[test]
    fn test_stop_from_inside_callback() {
        let mut e = engine();
        e.start();
        assert!(e.begin_frame());
        e.stop();
        e.end_frame();
        assert!(!e.has_outstanding_frame());
        assert_eq!(pump(&mut e, 5), 0);
    }

    #[test]
    fn test_stop_clears_rearm() {
        let mut e = engine();
        e.start();
        assert!(e.begin_frame());
        e.end_frame();
        e.stop();
        // The in-flight frame is dropped and nothing new is requested
        assert!(!e.begin_frame());
        e.end_frame();
        assert!(!e.has_outstanding_frame());
        assert_eq!(e.frames().requested(), 2);
    }

    #[test]
    fn test_restart_while_frame_outstanding() {
        let mut e = engine();
        e.start();
        e.stop();
        e.start();
        // The first request is still in flight; no second one is issued
        assert_eq!(e.frames().requested(), 1);
        assert_eq!(pump(&mut e, 3), 3);
        assert!(e.is_running());
    }

    proptest! {
        #[test]
        fn prop_start_count_does_not_multiply_callbacks(starts in 1usize..8, frames in 1usize..64) {
            let mut e = engine();
            for _ in 0..starts {
                e.start();
            }
            prop_assert_eq!(pump(&mut e, frames), frames);
            prop_assert!(e.has_outstanding_frame());
        }
    }
}
