use super::mime_type::MimeType;

/// Raw upload as received from the caller. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    bytes: Vec<u8>,
    mime_type: MimeType,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, mime_type: MimeType) -> Self {
        Self { bytes, mime_type }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &MimeType {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_parts(self) -> (Vec<u8>, MimeType) {
        (self.bytes, self.mime_type)
    }
}
