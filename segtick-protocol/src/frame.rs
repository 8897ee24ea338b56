//! Transmission frames
//!
//! A frame is everything sent between one start and one stop condition:
//! a command byte, optionally followed by segment data. The TM1637 has six
//! display registers, so a frame never needs more than an address byte plus
//! six data bytes.

use heapless::Vec;

/// Maximum bytes in one frame (address + 6 display registers)
pub const MAX_FRAME_LEN: usize = 7;

/// Size of a frame's raw slot representation (length byte + payload)
pub const FRAME_SLOT_LEN: usize = MAX_FRAME_LEN + 1;

/// Errors that can occur while building a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// A frame must carry at least one byte
    Empty,
    /// Payload exceeds [`MAX_FRAME_LEN`]
    TooLong,
}

/// One bus transaction
///
/// Frames are small and `Copy`: they are copied into the queue on enqueue
/// and copied out again by the transmitter, so a caller's buffer is never
/// referenced after the call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; MAX_FRAME_LEN],
    len: u8,
}

impl Frame {
    /// Create a frame from a byte slice
    pub fn new(payload: &[u8]) -> Result<Self, FrameError> {
        if payload.is_empty() {
            return Err(FrameError::Empty);
        }
        if payload.len() > MAX_FRAME_LEN {
            return Err(FrameError::TooLong);
        }

        let mut bytes = [0u8; MAX_FRAME_LEN];
        bytes[..payload.len()].copy_from_slice(payload);

        Ok(Self {
            bytes,
            len: payload.len() as u8,
        })
    }

    /// Create a single-byte frame (commands)
    pub const fn byte(byte: u8) -> Self {
        let mut bytes = [0u8; MAX_FRAME_LEN];
        bytes[0] = byte;
        Self { bytes, len: 1 }
    }

    /// Create a frame of a leading command byte followed by data
    ///
    /// This is the shape of every display write: address, then segments.
    pub fn with_data(command: u8, data: &[u8]) -> Result<Self, FrameError> {
        let mut payload: Vec<u8, MAX_FRAME_LEN> = Vec::new();
        payload.push(command).map_err(|_| FrameError::TooLong)?;
        payload
            .extend_from_slice(data)
            .map_err(|_| FrameError::TooLong)?;
        Self::new(&payload)
    }

    /// Number of bytes in the frame (1..=7)
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Frames are never empty; provided for API symmetry
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bytes to transmit, in order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Byte at `index`, if inside the frame
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Flatten into a fixed-size slot: `[len, b0, b1, ..., b6]`
    ///
    /// Unused payload bytes are zero.
    pub const fn to_raw(&self) -> [u8; FRAME_SLOT_LEN] {
        let mut raw = [0u8; FRAME_SLOT_LEN];
        raw[0] = self.len;
        let mut i = 0;
        while i < MAX_FRAME_LEN {
            raw[i + 1] = self.bytes[i];
            i += 1;
        }
        raw
    }

    /// Rebuild a frame from its slot representation
    pub fn from_raw(raw: [u8; FRAME_SLOT_LEN]) -> Result<Self, FrameError> {
        let len = raw[0] as usize;
        if len == 0 {
            return Err(FrameError::Empty);
        }
        if len > MAX_FRAME_LEN {
            return Err(FrameError::TooLong);
        }
        Self::new(&raw[1..1 + len])
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = FrameError;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        Self::new(payload)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Frame({=[u8]:x})", self.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_byte_frame() {
        let frame = Frame::byte(0x40);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.as_bytes(), &[0x40]);
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_frame_limits() {
        assert_eq!(Frame::new(&[]), Err(FrameError::Empty));
        assert!(Frame::new(&[0u8; MAX_FRAME_LEN]).is_ok());
        assert_eq!(
            Frame::new(&[0u8; MAX_FRAME_LEN + 1]),
            Err(FrameError::TooLong)
        );
    }

    #[test]
    fn test_with_data_prepends_command() {
        let frame = Frame::with_data(0xC0, &[0x3F, 0x06]).unwrap();
        assert_eq!(frame.as_bytes(), &[0xC0, 0x3F, 0x06]);
        assert_eq!(frame.len(), 3);

        // Address plus six registers is the largest legal frame
        assert!(Frame::with_data(0xC0, &[0u8; 6]).is_ok());
        assert_eq!(
            Frame::with_data(0xC0, &[0u8; 7]),
            Err(FrameError::TooLong)
        );
    }

    #[test]
    fn test_raw_layout() {
        let frame = Frame::new(&[0xC1, 0x5B]).unwrap();
        assert_eq!(frame.to_raw(), [2, 0xC1, 0x5B, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_from_raw_rejects_bad_length() {
        assert_eq!(Frame::from_raw([0; FRAME_SLOT_LEN]), Err(FrameError::Empty));

        let mut raw = [0u8; FRAME_SLOT_LEN];
        raw[0] = 8;
        assert_eq!(Frame::from_raw(raw), Err(FrameError::TooLong));
    }

    #[test]
    fn test_get_out_of_range() {
        let frame = Frame::new(&[1, 2]).unwrap();
        assert_eq!(frame.get(1), Some(2));
        assert_eq!(frame.get(2), None);
    }

    proptest! {
        #[test]
        fn prop_raw_slot_preserves_frame(payload in prop::collection::vec(any::<u8>(), 1..=MAX_FRAME_LEN)) {
            let frame = Frame::new(&payload).unwrap();
            let restored = Frame::from_raw(frame.to_raw()).unwrap();
            prop_assert_eq!(restored.as_bytes(), payload.as_slice());
        }
    }
}
