//! Minimal RIFF/WAVE support: canonical 44-byte PCM header plus a tolerant chunk walker.

use crate::foundation::error::{LunaError, LunaResult};

pub const WAV_HEADER_LEN: usize = 44;
pub const WAV_MIME: &str = "audio/wav";

const FORMAT_PCM: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;

/// Convert one sample to signed 16-bit, clamping to `[-1, 1]` first.
///
/// Negative values scale by 32768 and non-negative by 32767, truncating toward zero, so
/// both rails map exactly onto `i16::MIN` / `i16::MAX`.
pub fn quantize_pcm16(sample: f32) -> i16 {
    let s = f64::from(sample.clamp(-1.0, 1.0));
    if s < 0.0 {
        (s * 32_768.0) as i16
    } else {
        (s * 32_767.0) as i16
    }
}

pub fn pcm16_to_f32(sample: i16) -> f32 {
    if sample < 0 {
        f32::from(sample) / 32_768.0
    } else {
        f32::from(sample) / 32_767.0
    }
}

/// Encode mono samples as a canonical 16-bit PCM WAV file.
pub fn encode_pcm16_mono(samples: &[f32], sample_rate: u32) -> LunaResult<Vec<u8>> {
    if sample_rate == 0 {
        return Err(LunaError::audio("sample rate must be > 0"));
    }
    let data_len = u32::try_from(samples.len() * 2)
        .ok()
        .filter(|len| len.checked_add(36).is_some())
        .ok_or_else(|| LunaError::audio("too many samples for a RIFF container"))?;
    let byte_rate = sample_rate
        .checked_mul(2)
        .ok_or_else(|| LunaError::audio("sample rate too large"))?;

    let mut out = Vec::<u8>::with_capacity(WAV_HEADER_LEN + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for &s in samples {
        out.extend_from_slice(&quantize_pcm16(s).to_le_bytes());
    }
    Ok(out)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Header fields of a PCM WAV container.
pub struct WavInfo {
    pub format_code: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub riff_len: u32,
    pub data_offset: usize,
    pub data_len: u32,
}

impl WavInfo {
    pub fn parse(bytes: &[u8]) -> LunaResult<Self> {
        if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
            return Err(LunaError::audio("not a RIFF/WAVE container"));
        }
        let riff_len = read_u32(bytes, 4)?;

        let mut fmt: Option<(u16, u16, u32, u32, u16, u16)> = None;
        let mut offset = 12;
        while offset + 8 <= bytes.len() {
            let chunk_id = &bytes[offset..offset + 4];
            let chunk_len = read_u32(bytes, offset + 4)?;
            let body = offset + 8;

            if chunk_id == b"fmt " {
                if chunk_len < FMT_CHUNK_LEN {
                    return Err(LunaError::audio("fmt chunk is truncated"));
                }
                fmt = Some((
                    read_u16(bytes, body)?,
                    read_u16(bytes, body + 2)?,
                    read_u32(bytes, body + 4)?,
                    read_u32(bytes, body + 8)?,
                    read_u16(bytes, body + 12)?,
                    read_u16(bytes, body + 14)?,
                ));
            } else if chunk_id == b"data" {
                let (format_code, channels, sample_rate, byte_rate, block_align, bits) =
                    fmt.ok_or_else(|| LunaError::audio("data chunk precedes fmt chunk"))?;
                if body + chunk_len as usize > bytes.len() {
                    return Err(LunaError::audio(format!(
                        "data chunk claims {chunk_len} bytes but only {} remain",
                        bytes.len() - body
                    )));
                }
                return Ok(Self {
                    format_code,
                    channels,
                    sample_rate,
                    byte_rate,
                    block_align,
                    bits_per_sample: bits,
                    riff_len,
                    data_offset: body,
                    data_len: chunk_len,
                });
            }

            offset = body + chunk_len as usize + (chunk_len as usize % 2);
        }

        Err(LunaError::audio("no data chunk found"))
    }

    pub fn frame_count(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_len as usize / usize::from(self.block_align)
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / f64::from(self.sample_rate)
    }
}

/// Decode the payload of a mono or interleaved 16-bit PCM container.
pub fn decode_pcm16(bytes: &[u8]) -> LunaResult<Vec<i16>> {
    let info = WavInfo::parse(bytes)?;
    if info.format_code != FORMAT_PCM || info.bits_per_sample != 16 {
        return Err(LunaError::audio(format!(
            "expected 16-bit PCM, found format {} with {} bits",
            info.format_code, info.bits_per_sample
        )));
    }
    let payload = &bytes[info.data_offset..info.data_offset + info.data_len as usize];
    Ok(payload
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

fn read_u16(bytes: &[u8], at: usize) -> LunaResult<u16> {
    bytes
        .get(at..at + 2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .ok_or_else(|| LunaError::audio("unexpected end of WAV header"))
}

fn read_u32(bytes: &[u8], at: usize) -> LunaResult<u32> {
    bytes
        .get(at..at + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| LunaError::audio("unexpected end of WAV header"))
}

#[cfg(test)]
#[path = "../../tests/unit/audio/wav.rs"]
mod tests;
