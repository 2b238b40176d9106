use anyhow::{bail, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::input::{DragTracker, Viewport};
use crate::trackball::{Trackball, TrackballSession};

/// Recorded pointer drags: each stroke is a list of pixel positions from
/// button press to release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragScript {
    pub viewport: Viewport,
    pub strokes: Vec<Vec<[f32; 2]>>,
}

impl DragScript {
    pub fn from_json(json: &str) -> Result<Self> {
        let script: DragScript =
            serde_json::from_str(json).context("Failed to parse drag script")?;
        if script.viewport.width <= 0.0 || script.viewport.height <= 0.0 {
            bail!(
                "Drag script viewport must be non-empty, got {}x{}",
                script.viewport.width,
                script.viewport.height
            );
        }
        Ok(script)
    }

    /// Replay every stroke through a fresh tracker and return the final session.
    pub fn replay(&self, trackball: Trackball) -> TrackballSession {
        let mut tracker = DragTracker::new(trackball, self.viewport);

        for (i, stroke) in self.strokes.iter().enumerate() {
            let Some((first, rest)) = stroke.split_first() else {
                warn!("Skipping empty stroke {}", i);
                continue;
            };
            if rest.is_empty() {
                warn!("Skipping stroke {} with a single point", i);
                continue;
            }

            tracker.begin(first[0], first[1]);
            for point in rest {
                tracker.drag_to(point[0], point[1]);
            }
            tracker.end();
        }

        *tracker.session()
    }
}

/// Loads a drag script from a JSON file
pub fn load_drag_script(path: impl AsRef<Path>) -> Result<DragScript> {
    let path = path.as_ref();
    info!("Loading drag script: {:?}", path);

    let json = std::fs::read_to_string(path)
        .context(format!("Failed to read drag script: {:?}", path))?;
    let script = DragScript::from_json(&json)
        .context(format!("Invalid drag script: {:?}", path))?;

    info!(
        "Loaded {} strokes ({} points) for a {}x{} viewport",
        script.strokes.len(),
        script.strokes.iter().map(Vec::len).sum::<usize>(),
        script.viewport.width,
        script.viewport.height
    );
    Ok(script)
}
