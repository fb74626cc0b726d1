//! Renderer that streams one JSON snapshot per line

use std::io::Write;

use super::{Renderer, Snapshot};

pub struct JsonRenderer<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn present(&mut self, snapshot: &Snapshot) {
        if self.failed {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, snapshot)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = result {
            // Report once, then go quiet (e.g. closed pipe)
            log::warn!("Render error: {:?}", e);
            self.failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_writes_one_line_per_frame() {
        let state = GameState::new(1, &Tuning::default());
        let snap = Snapshot::capture(&state);
        let mut renderer = JsonRenderer::new(Vec::new());

        renderer.present(&snap);
        renderer.present(&snap);

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Snapshot = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, snap);
    }
}
