#![no_main]
//! Replays arbitrary op sequences against a flat reference buffer.
//!
//! The cursor's view of a segmented chain must agree byte-for-byte with the
//! concatenation of its segments: reads return the same bytes, seeks land on
//! the same offsets, and `position() + bytes_available()` always equals the
//! total length. Backward movement out of a narrowed putback window is the
//! one documented divergence (the window hides its segment's unread prefix),
//! so exact-landing checks relax once a putback succeeds.

use arbitrary::Arbitrary;
use chaincursor::{Chain, ChainCursor, SeekOrigin};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Peek,
    ReadByte,
    ReadBlock(u16),
    Putback,
    PutbackWrong(u8),
    SeekStart(i16),
    SeekEnd(i16),
    SeekCurrent(i16),
    SeekTo(u16),
}

fuzz_target!(|input: (Vec<Vec<u8>>, Vec<Op>)| {
    let (segments, ops) = input;
    let flat: Vec<u8> = segments.iter().flatten().copied().collect();
    let parts: Vec<&[u8]> = segments.iter().map(Vec::as_slice).collect();
    let chain = Chain::from_slices(&parts);
    let total = flat.len();
    assert_eq!(chain.total_len(), total);

    let mut cursor = ChainCursor::new(&chain);
    let mut refpos = 0usize;
    let mut narrowed = false;

    for op in &ops {
        match *op {
            Op::Peek => {
                if let Ok(byte) = cursor.peek_byte() {
                    assert_eq!(byte, flat[refpos]);
                }
                assert_eq!(cursor.position(), refpos);
            }
            Op::ReadByte => {
                if let Ok(byte) = cursor.read_byte() {
                    assert_eq!(byte, flat[refpos]);
                    refpos += 1;
                }
                assert_eq!(cursor.position(), refpos);
            }
            Op::ReadBlock(n) => {
                let want = usize::from(n) % 64;
                let mut out = vec![0u8; want];
                let got = cursor.read_block(&mut out);
                assert_eq!(got, want.min(total - refpos));
                assert_eq!(&out[..got], &flat[refpos..refpos + got]);
                refpos += got;
            }
            Op::Putback | Op::PutbackWrong(_) => {
                let byte = match *op {
                    Op::PutbackWrong(b) => b,
                    _ => refpos.checked_sub(1).map_or(0, |p| flat[p]),
                };
                match cursor.putback_byte(byte) {
                    Ok(got) => {
                        let landed = cursor.position();
                        assert_eq!(got, byte);
                        assert_eq!(got, flat[landed]);
                        if !narrowed {
                            assert_eq!(landed, refpos - 1);
                        }
                        refpos = landed;
                        narrowed = true;
                    }
                    Err(_) => assert_eq!(cursor.position(), refpos),
                }
            }
            Op::SeekStart(off) => {
                let off = isize::from(off);
                let res = cursor.seek(off, SeekOrigin::Start);
                if off >= 0 && off.unsigned_abs() <= total {
                    assert_eq!(res, Ok(off.unsigned_abs()));
                    refpos = off.unsigned_abs();
                    narrowed = false;
                } else {
                    assert!(res.is_err());
                    assert_eq!(cursor.position(), refpos);
                }
            }
            Op::SeekEnd(off) => {
                let off = isize::from(off);
                let res = cursor.seek(off, SeekOrigin::End);
                if off <= 0 && off.unsigned_abs() <= total {
                    assert_eq!(res, Ok(total - off.unsigned_abs()));
                    refpos = total - off.unsigned_abs();
                    narrowed = false;
                } else {
                    assert!(res.is_err());
                    assert_eq!(cursor.position(), refpos);
                }
            }
            Op::SeekCurrent(off) => {
                let off = isize::from(off);
                match cursor.seek(off, SeekOrigin::Current) {
                    Ok(landed) => {
                        assert_eq!(landed, cursor.position());
                        if !narrowed {
                            assert_eq!(landed, refpos.checked_add_signed(off).unwrap());
                        }
                        refpos = landed;
                        if off != 0 {
                            narrowed = false;
                        }
                    }
                    Err(_) => assert_eq!(cursor.position(), refpos),
                }
            }
            Op::SeekTo(off) => {
                let off = usize::from(off);
                let res = cursor.seek_to(off);
                if off <= total {
                    assert_eq!(res, Ok(off));
                    refpos = off;
                    narrowed = false;
                } else {
                    assert!(res.is_err());
                    assert_eq!(cursor.position(), refpos);
                }
            }
        }
        assert_eq!(cursor.position() + cursor.bytes_available(), total);
    }
});
