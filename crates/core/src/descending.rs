//! Order-reversing byte encoding
//!
//! Object stores list keys in ascending byte order only. Encoding the id
//! portion of a key with [`encode_descending`] turns that ascending scan into
//! a newest-first scan: for `a < b`, `encode_descending(a) > encode_descending(b)`
//! whenever both inputs have the same length.
//!
//! The transform is the bytewise complement. It preserves length and is its
//! own inverse.

/// Reverse the order of a byte string.
pub fn encode_descending(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    invert_in_place(&mut out);
    out
}

/// Complement every byte of `buf` in place.
pub fn invert_in_place(buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = !*b;
    }
}
