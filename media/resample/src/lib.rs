//! Sample rate conversion of 16-bit linear PCM using linear interpolation
//!
//! Every output sample is interpolated from the two nearest input samples. No anti-aliasing
//! filter is applied, so downsampling folds content above the new Nyquist frequency back into
//! the signal. Use this where cheap rate matching matters more than fidelity.

use std::borrow::Cow;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("PCM buffer must contain whole 16-bit samples, got {len} bytes")]
    InvalidBufferLength { len: usize },
    #[error("Cannot resample from {input_rate}Hz to {output_rate}Hz")]
    InvalidSampleRate { input_rate: u32, output_rate: u32 },
}

/// Converts mono i16 audio from one sample rate to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearResampler {
    input_rate: u32,
    output_rate: u32,
}

impl LinearResampler {
    /// Create a new resampler, both rates must be non-zero
    pub fn new(input_rate: u32, output_rate: u32) -> Result<Self, Error> {
        if input_rate == 0 || output_rate == 0 {
            return Err(Error::InvalidSampleRate {
                input_rate,
                output_rate,
            });
        }

        let this = Self {
            input_rate,
            output_rate,
        };

        log::trace!(
            "Created linear resampler {input_rate}Hz -> {output_rate}Hz, ratio={}",
            this.ratio()
        );

        Ok(this)
    }

    pub fn input_rate(&self) -> u32 {
        self.input_rate
    }

    pub fn output_rate(&self) -> u32 {
        self.output_rate
    }

    /// Output samples produced per input sample
    pub fn ratio(&self) -> f64 {
        f64::from(self.output_rate) / f64::from(self.input_rate)
    }

    pub fn is_passthrough(&self) -> bool {
        self.input_rate == self.output_rate
    }

    /// Number of samples [`resample`](Self::resample) produces for `input_samples` samples
    pub fn output_len(&self, input_samples: usize) -> usize {
        (input_samples as f64 * self.ratio()).floor() as usize
    }

    /// Resample the given samples
    ///
    /// Output samples positioned past the last pair of input samples repeat the last input sample.
    pub fn resample(&self, input: &[i16]) -> Vec<i16> {
        if self.is_passthrough() {
            return input.to_vec();
        }

        let ratio = self.ratio();
        let last = input.len().saturating_sub(1);

        (0..self.output_len(input.len()))
            .map(|k| {
                let position = k as f64 / ratio;
                let index = (position.floor() as usize).min(last);
                let frac = position - index as f64;

                match input.get(index + 1) {
                    Some(&next) => {
                        let current = f64::from(input[index]);
                        let next = f64::from(next);

                        (current * (1.0 - frac) + next * frac).round() as i16
                    }
                    None => input[index],
                }
            })
            .collect()
    }

    /// Resample a buffer of little-endian i16 samples
    pub fn resample_s16(&self, pcm: &[u8]) -> Result<Vec<u8>, Error> {
        let samples = read_samples(pcm)?;

        Ok(self
            .resample(&samples)
            .into_iter()
            .flat_map(i16::to_le_bytes)
            .collect())
    }
}

/// Resample a buffer of little-endian i16 samples from `input_rate` to `output_rate`
///
/// Returns the input unchanged when both rates are equal.
pub fn resample_pcm16(
    pcm: &[u8],
    input_rate: u32,
    output_rate: u32,
) -> Result<Cow<'_, [u8]>, Error> {
    check_len(pcm)?;

    if input_rate == output_rate {
        return Ok(Cow::Borrowed(pcm));
    }

    LinearResampler::new(input_rate, output_rate)?
        .resample_s16(pcm)
        .map(Cow::Owned)
}

fn check_len(pcm: &[u8]) -> Result<(), Error> {
    if pcm.len() % 2 != 0 {
        log::debug!("Rejecting PCM buffer with odd length {}", pcm.len());

        return Err(Error::InvalidBufferLength { len: pcm.len() });
    }

    Ok(())
}

fn read_samples(pcm: &[u8]) -> Result<Vec<i16>, Error> {
    check_len(pcm)?;

    Ok(pcm
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}
