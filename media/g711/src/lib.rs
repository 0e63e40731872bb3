//! G.711 companding between 16-bit linear PCM and 8-bit A-law / μ-law
//!
//! Linear PCM buffers hold little-endian `i16` samples, companded buffers hold one byte per sample.

pub mod alaw;
pub mod mulaw;
mod segment;

pub use alaw::{decode as decode_alaw, encode as encode_alaw};
pub use mulaw::{decode as decode_ulaw, encode as encode_ulaw};
pub use segment::{SEG_END, segment_index};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("PCM buffer must contain whole 16-bit samples, got {len} bytes")]
    InvalidBufferLength { len: usize },
}

/// G.711 companding law
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// A-law aka. PCMA
    ALaw,
    /// μ-law aka. PCMU
    MuLaw,
}

impl Law {
    /// Static RTP payload type assigned to this law
    pub fn payload_type(self) -> u8 {
        match self {
            Law::ALaw => 8,
            Law::MuLaw => 0,
        }
    }

    /// Encoding name as used in SDP rtpmap attributes
    pub fn encoding_name(self) -> &'static str {
        match self {
            Law::ALaw => "PCMA",
            Law::MuLaw => "PCMU",
        }
    }

    pub fn from_payload_type(pt: u8) -> Option<Self> {
        match pt {
            8 => Some(Law::ALaw),
            0 => Some(Law::MuLaw),
            _ => None,
        }
    }

    pub fn encode(self, x: i16) -> u8 {
        match self {
            Law::ALaw => alaw::encode(x),
            Law::MuLaw => mulaw::encode(x),
        }
    }

    pub fn decode(self, y: u8) -> i16 {
        match self {
            Law::ALaw => alaw::decode(y),
            Law::MuLaw => mulaw::decode(y),
        }
    }

    /// Compand a little-endian PCM buffer, producing one byte per sample
    pub fn encode_buffer(self, pcm: &[u8]) -> Result<Vec<u8>, Error> {
        if pcm.len() % 2 != 0 {
            log::debug!(
                "Rejecting {} byte PCM buffer for {} encoding",
                pcm.len(),
                self.encoding_name()
            );

            return Err(Error::InvalidBufferLength { len: pcm.len() });
        }

        Ok(pcm
            .chunks_exact(2)
            .map(|pair| self.encode(i16::from_le_bytes([pair[0], pair[1]])))
            .collect())
    }

    /// Expand a companded buffer into little-endian PCM, two bytes per sample
    pub fn decode_buffer(self, data: &[u8]) -> Vec<u8> {
        let mut pcm = Vec::with_capacity(data.len() * 2);

        for &y in data {
            pcm.extend_from_slice(&self.decode(y).to_le_bytes());
        }

        pcm
    }
}

/// Encode the given samples, the encoded G.711 data will be appended to `out`
pub fn encode_samples(law: Law, samples: &[i16], out: &mut Vec<u8>) {
    out.extend(samples.iter().map(|&x| law.encode(x)));
}

/// Decode the given G.711 data, the decoded audio samples will be appended to `out`
pub fn decode_samples(law: Law, data: &[u8], out: &mut Vec<i16>) {
    out.extend(data.iter().map(|&y| law.decode(y)));
}

pub fn pcm_to_alaw(pcm: &[u8]) -> Result<Vec<u8>, Error> {
    Law::ALaw.encode_buffer(pcm)
}

pub fn alaw_to_pcm(data: &[u8]) -> Vec<u8> {
    Law::ALaw.decode_buffer(data)
}

pub fn pcm_to_ulaw(pcm: &[u8]) -> Result<Vec<u8>, Error> {
    Law::MuLaw.encode_buffer(pcm)
}

pub fn ulaw_to_pcm(data: &[u8]) -> Vec<u8> {
    Law::MuLaw.decode_buffer(data)
}

/// Transcode a single A-law byte to μ-law by way of linear PCM
pub fn alaw_to_ulaw(y: u8) -> u8 {
    mulaw::encode(alaw::decode(y))
}

/// Transcode a single μ-law byte to A-law by way of linear PCM
pub fn ulaw_to_alaw(y: u8) -> u8 {
    alaw::encode(mulaw::decode(y))
}

/// Transcode a companded buffer from one law to another
pub fn transcode(from: Law, to: Law, data: &[u8]) -> Vec<u8> {
    if from == to {
        return data.to_vec();
    }

    data.iter().map(|&y| to.encode(from.decode(y))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcm_bytes(samples: &[i16]) -> Vec<u8> {
        samples.iter().flat_map(|x| x.to_le_bytes()).collect()
    }

    #[test]
    fn buffer_lengths() {
        let pcm = pcm_bytes(&[0, 1000, -1000, i16::MAX, i16::MIN]);

        let alaw = pcm_to_alaw(&pcm).unwrap();
        let ulaw = pcm_to_ulaw(&pcm).unwrap();

        assert_eq!(alaw.len(), pcm.len() / 2);
        assert_eq!(ulaw.len(), pcm.len() / 2);
        assert_eq!(alaw_to_pcm(&alaw).len(), alaw.len() * 2);
        assert_eq!(ulaw_to_pcm(&ulaw).len(), ulaw.len() * 2);
    }

    #[test]
    fn buffers_map_each_sample() {
        let samples = [0, 1000, -1000, i16::MAX, i16::MIN, -5];
        let pcm = pcm_bytes(&samples);

        let alaw = pcm_to_alaw(&pcm).unwrap();
        let ulaw = pcm_to_ulaw(&pcm).unwrap();

        for (i, &x) in samples.iter().enumerate() {
            assert_eq!(alaw[i], encode_alaw(x));
            assert_eq!(ulaw[i], encode_ulaw(x));
        }

        assert_eq!(ulaw, [0xFF, 0xCE, 0x4E, 0x80, 0x00, 0x7E]);
    }

    #[test]
    fn decode_buffer_is_little_endian() {
        assert_eq!(ulaw_to_pcm(&[0x80, 0x00]), [0x7C, 0x7D, 0x84, 0x82]);
        assert_eq!(alaw_to_pcm(&[0xD5]), [0x08, 0x00]);
    }

    #[test]
    fn odd_length_pcm_is_rejected() {
        assert_eq!(
            pcm_to_alaw(&[0, 0, 0]),
            Err(Error::InvalidBufferLength { len: 3 })
        );
        assert_eq!(
            pcm_to_ulaw(&[0]),
            Err(Error::InvalidBufferLength { len: 1 })
        );
    }

    #[test]
    fn empty_buffers() {
        assert!(pcm_to_alaw(&[]).unwrap().is_empty());
        assert!(ulaw_to_pcm(&[]).is_empty());
    }

    #[test]
    fn payload_types() {
        for law in [Law::ALaw, Law::MuLaw] {
            assert_eq!(Law::from_payload_type(law.payload_type()), Some(law));
        }

        assert_eq!(Law::ALaw.encoding_name(), "PCMA");
        assert_eq!(Law::from_payload_type(9), None);
    }

    #[test]
    fn sample_slices() {
        let samples = [0, 1000, -1000];

        let mut encoded = vec![0xAB];
        encode_samples(Law::MuLaw, &samples, &mut encoded);
        assert_eq!(encoded, [0xAB, 0xFF, 0xCE, 0x4E]);

        let mut decoded = Vec::new();
        decode_samples(Law::MuLaw, &encoded[1..], &mut decoded);
        assert_eq!(decoded, [0, 988, -988]);
    }

    #[test]
    fn transcoding() {
        // μ-law silence is A-law silence
        assert_eq!(ulaw_to_alaw(0xFF), 0xD5);
        assert_eq!(alaw_to_ulaw(0xFA), encode_ulaw(1008));

        let ulaw = [0xFF, 0xCE, 0x80];
        assert_eq!(
            transcode(Law::MuLaw, Law::ALaw, &ulaw),
            ulaw.map(ulaw_to_alaw)
        );
        assert_eq!(transcode(Law::ALaw, Law::ALaw, &ulaw), ulaw);
    }
}
