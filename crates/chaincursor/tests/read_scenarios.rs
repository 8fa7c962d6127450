#![allow(missing_docs)]

use chaincursor::{Chain, ChainCursor, CursorError, SeekOrigin};

fn sample() -> Chain<'static> {
    let parts: [&[u8]; 2] = [b"hello ", b"world"];
    Chain::from_slices(&parts)
}

#[test]
fn sequential_read_with_seeks() {
    let chain = sample();
    let mut cursor = ChainCursor::new(&chain);

    let mut line = [0u8; 11];
    assert_eq!(cursor.seek(0, SeekOrigin::Start), Ok(0));
    assert_eq!(cursor.read_block(&mut line), 11);
    assert_eq!(&line, b"hello world");
    assert_eq!(cursor.read_block(&mut line), 0);

    assert_eq!(cursor.seek(-2, SeekOrigin::End), Ok(9));
    let mut tail = [0u8; 2];
    assert_eq!(cursor.read_block(&mut tail), 2);
    assert_eq!(&tail, b"ld");
}

#[test]
fn reread_after_absolute_seek() {
    let chain = sample();
    let mut cursor = ChainCursor::new(&chain);

    assert_eq!(cursor.seek_to(1), Ok(1));
    assert_eq!(cursor.read_byte(), Ok(b'e'));
    assert_eq!(cursor.read_byte(), Ok(b'l'));
    assert_eq!(cursor.position(), 3);

    let mut rest = [0u8; 8];
    assert_eq!(cursor.read_block(&mut rest), 8);
    assert_eq!(&rest, b"lo world");
}

#[test]
fn putback_walks_back_through_a_read() {
    let chain = sample();
    let mut cursor = ChainCursor::new(&chain);

    assert_eq!(cursor.seek_to(1), Ok(1));
    let mut mid = [0u8; 6];
    assert_eq!(cursor.read_block(&mut mid), 6);
    assert_eq!(&mid, b"ello w");
    assert_eq!(cursor.position(), 7);

    assert_eq!(cursor.putback_byte(b'w'), Ok(b'w'));
    assert_eq!(cursor.putback_byte(b' '), Ok(b' '));
    assert_eq!(
        cursor.putback_byte(b'z'),
        Err(CursorError::AtChainStart)
    );
    assert_eq!(cursor.position(), 5);

    let mut rest = [0u8; 6];
    assert_eq!(cursor.read_block(&mut rest), 6);
    assert_eq!(&rest, b" world");
}

#[test]
fn mismatched_putback_reports_both_bytes() {
    let chain = sample();
    let mut cursor = ChainCursor::new(&chain);
    assert_eq!(cursor.seek_to(3), Ok(3));

    let err = cursor.putback_byte(b'q').unwrap_err();
    assert_eq!(
        err,
        CursorError::Mismatch {
            expected: b'q',
            found: b'l',
        }
    );
    assert!(err.to_string().contains("0x71"));
    assert!(err.to_string().contains("0x6c"));
}

#[test]
fn two_cursors_share_one_chain() {
    let chain = sample();
    let mut front = ChainCursor::new(&chain);
    let mut back = ChainCursor::new(&chain);
    assert_eq!(back.seek(-5, SeekOrigin::End), Ok(6));

    let mut a = [0u8; 5];
    let mut b = [0u8; 5];
    assert_eq!(front.read_block(&mut a), 5);
    assert_eq!(back.read_block(&mut b), 5);
    assert_eq!(&a, b"hello");
    assert_eq!(&b, b"world");

    front.swap_with(&mut back);
    assert_eq!(front.position(), 11);
    assert_eq!(back.position(), 5);
    assert_eq!(back.read_byte(), Ok(b' '));
}

#[test]
fn heavily_fragmented_chain_reads_like_a_flat_buffer() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let parts: Vec<&[u8]> = data.chunks(3).collect();
    let chain = Chain::from_slices(&parts);
    let mut cursor = ChainCursor::new(&chain);

    let mut out = vec![0u8; data.len()];
    assert_eq!(cursor.read_block(&mut out), data.len());
    assert_eq!(out, data);

    assert_eq!(cursor.seek(-3, SeekOrigin::End), Ok(data.len() - 3));
    let mut word = [0u8; 3];
    assert_eq!(cursor.read_block(&mut word), 3);
    assert_eq!(&word, b"dog");
}
