use anyhow::{bail, Result};

/// Borrowed view over one raw camera image buffer.
///
/// `step` is the full row length in bytes and `data` packs 3 interleaved
/// 8-bit channels per pixel with no alpha, so a valid buffer holds exactly
/// `step * height` bytes. The frame is read-only and lives only for the
/// duration of one callback.
#[derive(Debug)]
pub struct Frame<'a> {
    step: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Wrap a raw buffer, rejecting it before any scan if its length does
    /// not match the advertised dimensions.
    pub fn new(step: usize, height: usize, data: &'a [u8]) -> Result<Self> {
        let expected = step * height;
        if data.len() != expected {
            bail!(
                "malformed frame: buffer holds {} bytes, step {} * height {} requires {}",
                data.len(),
                step,
                height,
                expected
            );
        }

        Ok(Self { step, height, data })
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        self.data
    }
}
