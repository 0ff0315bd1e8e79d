use crate::{frame::Frame, params::ChaserParams};

/// Horizontal region of the image a matched pixel falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Left,
    Center,
    Right,
}

/// Outcome of scanning a single frame for the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetObservation {
    NotFound,
    Found(Zone),
}

/// Scans raw image buffers for the bright target pattern.
pub struct FrameScanner {
    params: ChaserParams,
}

impl FrameScanner {
    pub fn new(params: ChaserParams) -> Self {
        Self { params }
    }

    /// Look for the first run of 3 consecutive target-valued bytes and
    /// classify its horizontal position.
    ///
    /// The scan walks linear byte indices, so a match window may straddle
    /// pixel or row boundaries. First match wins; the window is bounded so
    /// the last two byte offsets are never used as a window start.
    pub fn scan(&self, frame: &Frame) -> TargetObservation {
        let target = self.params.target_pixel;

        match frame
            .data()
            .windows(3)
            .position(|w| w[0] == target && w[1] == target && w[2] == target)
        {
            Some(idx) => {
                let offset = idx % frame.step();
                TargetObservation::Found(classify_offset(offset, frame.step()))
            }
            None => TargetObservation::NotFound,
        }
    }
}

/// Partition a row into three equal bands by byte offset. Offsets landing
/// exactly on a third boundary count as Center.
fn classify_offset(offset: usize, step: usize) -> Zone {
    let left_bound = step / 3;
    let right_bound = 2 * step / 3;

    if offset < left_bound {
        Zone::Left
    } else if offset > right_bound {
        Zone::Right
    } else {
        Zone::Center
    }
}
