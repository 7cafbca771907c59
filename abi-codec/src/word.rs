//! 32-byte word alignment helpers shared by every codec kind.

/// The size, in bytes, of one ABI word.
pub const WORD_SIZE: usize = 32;

/// Pads `src` on the left with zero bytes until its length is a multiple of
/// [`WORD_SIZE`]. An empty input produces a single zero word, matching the
/// convention that every static value occupies at least one word.
pub fn pad_left(src: &[u8]) -> Vec<u8> {
    let padded_len = padded_len(src.len());
    let mut out = vec![0u8; padded_len - src.len()];
    out.extend_from_slice(src);
    out
}

/// Pads `src` on the right with zero bytes until its length is a multiple of
/// [`WORD_SIZE`]. An empty input produces a single zero word.
pub fn pad_right(src: &[u8]) -> Vec<u8> {
    let padded_len = padded_len(src.len());
    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(src);
    out.resize(padded_len, 0);
    out
}

/// Rounds `len` up to the next multiple of [`WORD_SIZE`], with the single
/// exception that zero stays zero (used for variable-length payloads, where
/// an empty payload contributes no tail bytes at all).
pub fn ceil_words_len(len: usize) -> usize {
    (len + WORD_SIZE - 1) / WORD_SIZE * WORD_SIZE
}

fn padded_len(len: usize) -> usize {
    if len == 0 {
        WORD_SIZE
    } else {
        ceil_words_len(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_left_empty_is_one_word() {
        assert_eq!(pad_left(&[]).len(), WORD_SIZE);
    }

    #[test]
    fn pad_right_preserves_prefix() {
        let padded = pad_right(b"dave");
        assert_eq!(padded.len(), WORD_SIZE);
        assert_eq!(&padded[..4], b"dave");
        assert!(padded[4..].iter().all(|b| *b == 0));
    }

    #[test]
    fn pad_left_preserves_suffix() {
        let padded = pad_left(&[0x10]);
        assert_eq!(padded.len(), WORD_SIZE);
        assert_eq!(padded[WORD_SIZE - 1], 0x10);
    }

    #[test]
    fn ceil_words_len_allows_zero() {
        assert_eq!(ceil_words_len(0), 0);
        assert_eq!(ceil_words_len(1), WORD_SIZE);
        assert_eq!(ceil_words_len(32), WORD_SIZE);
        assert_eq!(ceil_words_len(33), 64);
    }
}
