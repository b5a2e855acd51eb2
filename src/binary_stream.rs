/// Packs little-endian fields back to back into a fixed-size record
pub struct LittleEndianRecord<const N: usize> {
    /// the record being filled
    buffer: [u8; N],
    /// how many bytes have been written so far
    position: usize,
}

impl<const N: usize> LittleEndianRecord<N> {
    pub fn new() -> Self {
        Self {
            buffer: [0; N],
            position: 0,
        }
    }

    fn put(&mut self, bytes: &[u8]) -> &mut Self {
        let end = self.position + bytes.len();
        assert!(end <= N, "field does not fit into a {} byte record", N);
        self.buffer[self.position..end].copy_from_slice(bytes);
        self.position = end;
        self
    }

    pub fn put_u16(&mut self, value: u16) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    pub fn put_u32(&mut self, value: u32) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    pub fn put_i32(&mut self, value: i32) -> &mut Self {
        self.put(&value.to_le_bytes())
    }

    /// Returns the record; every byte must have been written.
    pub fn into_bytes(self) -> [u8; N] {
        assert_eq!(self.position, N, "record is incomplete");
        self.buffer
    }
}

impl<const N: usize> Default for LittleEndianRecord<N> {
    fn default() -> Self {
        Self::new()
    }
}
