/// Terminal front end for the cube viewer
use anyhow::{Context, Result};
use std::io::Write;
use terminator_core::{render_frame, CameraState, FrameBuffer, VertexSet};

pub mod config;
pub mod input;
pub mod logging;
pub mod renderer;

pub use config::{AppConfig, CliAction, InputMode, USAGE};
pub use input::{command_for_key, KeySource, Keystroke, LineKeys, RawKeys};
pub use renderer::FramePrinter;

/// The render loop: draw a frame, wait for one key, update the camera.
pub struct TerminalApp<K, W> {
    vertices: VertexSet,
    camera: CameraState,
    buffer: FrameBuffer,
    printer: FramePrinter,
    keys: K,
    out: W,
    frame_count: u64,
}

impl<K: KeySource, W: Write> TerminalApp<K, W> {
    pub fn new(keys: K, out: W, printer: FramePrinter) -> Self {
        Self {
            vertices: VertexSet::cube(),
            camera: CameraState::new(),
            buffer: FrameBuffer::new(),
            printer,
            keys,
            out,
            frame_count: 0,
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run until the key source ends.
    pub fn run(&mut self) -> Result<()> {
        log::info!("render loop started");
        while self.step()? {}
        log::info!("input ended after {} frames", self.frame_count);
        Ok(())
    }

    /// Render and print one frame, then block for one key and apply it.
    ///
    /// Returns `false` once the key source is exhausted.
    pub fn step(&mut self) -> Result<bool> {
        self.render()?;

        let Some(key) = self.keys.next_key()? else {
            return Ok(false);
        };

        match key.command() {
            Some(command) => {
                log::trace!("{key:?} -> {command:?}");
                self.camera.apply(command);
            }
            None => log::trace!("{key:?} ignored"),
        }
        Ok(true)
    }

    fn render(&mut self) -> Result<()> {
        let visible = render_frame(&self.vertices, &self.camera, &mut self.buffer);
        self.frame_count += 1;
        log::debug!(
            "frame {}: {} visible, camera {:?}",
            self.frame_count,
            visible,
            self.camera
        );

        self.printer
            .draw(&self.buffer, &mut self.out)
            .context("failed to write frame")
    }
}
