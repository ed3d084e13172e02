//! 3x8 glyph table
//!
//! One entry per printable ASCII code from `0x20` to `0x7E`. Each glyph is
//! three columns of eight vertical pixels, least significant bit at the top,
//! which is the byte layout the PCD8544 expects in horizontal addressing.
//!
//! The `@` slot is blank on purpose. It and everything outside the printable
//! range are drawn with the `*` glyph instead.

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 3;

/// First code point in the table
pub const FIRST_CHAR: char = ' ';

/// Last code point in the table
pub const LAST_CHAR: char = '~';

/// Character substituted for anything the table cannot draw
pub const FALLBACK_CHAR: char = '*';

/// Number of glyphs in [`FONT`]
pub const GLYPH_COUNT: usize = LAST_CHAR as usize - FIRST_CHAR as usize + 1;

/// The glyph table, indexed by `code - 0x20`
pub static FONT: [[u8; GLYPH_WIDTH]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00], // 0x20 space
    [0x00, 0x2e, 0x00], // 0x21 !
    [0x06, 0x00, 0x06], // 0x22 "
    [0x3e, 0x14, 0x3e], // 0x23 #
    [0x2c, 0x7e, 0x34], // 0x24 $
    [0x12, 0x08, 0x24], // 0x25 %
    [0x14, 0x2a, 0x34], // 0x26 &
    [0x00, 0x06, 0x00], // 0x27 '
    [0x1c, 0x22, 0x00], // 0x28 (
    [0x00, 0x22, 0x1c], // 0x29 )
    [0x0a, 0x04, 0x0a], // 0x2a *
    [0x08, 0x1c, 0x08], // 0x2b +
    [0x40, 0x30, 0x00], // 0x2c ,
    [0x08, 0x08, 0x08], // 0x2d -
    [0x00, 0x60, 0x60], // 0x2e .
    [0x10, 0x08, 0x04], // 0x2f /
    [0x1c, 0x2a, 0x1c], // 0x30 0
    [0x04, 0x3e, 0x00], // 0x31 1
    [0x32, 0x2a, 0x24], // 0x32 2
    [0x2a, 0x2a, 0x14], // 0x33 3
    [0x18, 0x14, 0x3a], // 0x34 4
    [0x2e, 0x2a, 0x3a], // 0x35 5
    [0x3e, 0x2a, 0x3a], // 0x36 6
    [0x02, 0x3a, 0x06], // 0x37 7
    [0x3e, 0x2a, 0x3e], // 0x38 8
    [0x2e, 0x2a, 0x3e], // 0x39 9
    [0x00, 0x14, 0x00], // 0x3a :
    [0x20, 0x14, 0x00], // 0x3b ;
    [0x08, 0x1c, 0x14], // 0x3c <
    [0x14, 0x14, 0x14], // 0x3d =
    [0x14, 0x1c, 0x08], // 0x3e >
    [0x02, 0x2a, 0x04], // 0x3f ?
    [0x00, 0x00, 0x00], // 0x40 @ (gap, drawn as '*')
    [0x3c, 0x0a, 0x3c], // 0x41 A
    [0x3e, 0x2a, 0x14], // 0x42 B
    [0x1c, 0x22, 0x22], // 0x43 C
    [0x3e, 0x22, 0x1c], // 0x44 D
    [0x3e, 0x2a, 0x2a], // 0x45 E
    [0x3e, 0x0a, 0x0a], // 0x46 F
    [0x1c, 0x22, 0x3a], // 0x47 G
    [0x3e, 0x08, 0x3e], // 0x48 H
    [0x22, 0x3e, 0x22], // 0x49 I
    [0x10, 0x20, 0x1e], // 0x4a J
    [0x3e, 0x08, 0x36], // 0x4b K
    [0x3e, 0x20, 0x20], // 0x4c L
    [0x3e, 0x0c, 0x3e], // 0x4d M
    [0x3e, 0x1c, 0x3e], // 0x4e N
    [0x1c, 0x22, 0x1c], // 0x4f O
    [0x3e, 0x0a, 0x04], // 0x50 P
    [0x1c, 0x32, 0x3c], // 0x51 Q
    [0x3e, 0x0a, 0x34], // 0x52 R
    [0x24, 0x2a, 0x12], // 0x53 S
    [0x02, 0x3e, 0x02], // 0x54 T
    [0x3e, 0x20, 0x3e], // 0x55 U
    [0x0e, 0x30, 0x0e], // 0x56 V
    [0x3e, 0x18, 0x3e], // 0x57 W
    [0x36, 0x08, 0x36], // 0x58 X
    [0x06, 0x38, 0x06], // 0x59 Y
    [0x32, 0x2a, 0x26], // 0x5a Z
    [0x3e, 0x22, 0x00], // 0x5b [
    [0x04, 0x08, 0x10], // 0x5c \
    [0x00, 0x22, 0x3e], // 0x5d ]
    [0x06, 0x03, 0x06], // 0x5e ^
    [0x20, 0x20, 0x20], // 0x5f _
    [0x02, 0x04, 0x00], // 0x60 `
    [0x10, 0x28, 0x38], // 0x61 a
    [0x3e, 0x28, 0x10], // 0x62 b
    [0x30, 0x28, 0x28], // 0x63 c
    [0x10, 0x28, 0x3e], // 0x64 d
    [0x18, 0x2c, 0x2c], // 0x65 e
    [0x08, 0x3c, 0x0a], // 0x66 f
    [0x90, 0xa8, 0x78], // 0x67 g
    [0x3e, 0x08, 0x30], // 0x68 h
    [0x00, 0x3a, 0x00], // 0x69 i
    [0x40, 0x3a, 0x00], // 0x6a j
    [0x3e, 0x10, 0x28], // 0x6b k
    [0x00, 0x3e, 0x00], // 0x6c l
    [0x38, 0x18, 0x38], // 0x6d m
    [0x38, 0x08, 0x30], // 0x6e n
    [0x38, 0x28, 0x38], // 0x6f o
    [0xf8, 0x28, 0x10], // 0x70 p
    [0x10, 0x28, 0xf8], // 0x71 q
    [0x38, 0x08, 0x08], // 0x72 r
    [0x20, 0x38, 0x08], // 0x73 s
    [0x04, 0x3e, 0x24], // 0x74 t
    [0x38, 0x20, 0x38], // 0x75 u
    [0x18, 0x30, 0x18], // 0x76 v
    [0x38, 0x30, 0x38], // 0x77 w
    [0x28, 0x10, 0x28], // 0x78 x
    [0x98, 0x60, 0x18], // 0x79 y
    [0x08, 0x38, 0x20], // 0x7a z
    [0x08, 0x1c, 0x22], // 0x7b {
    [0x00, 0x7e, 0x00], // 0x7c |
    [0x22, 0x1c, 0x08], // 0x7d }
    [0x08, 0x18, 0x10], // 0x7e ~
];

/// Map a character onto one the table can draw
///
/// Anything outside `' '..='~'`, and `@`, becomes [`FALLBACK_CHAR`].
pub fn sanitize(ch: char) -> char {
    if ch == '@' || !(FIRST_CHAR..=LAST_CHAR).contains(&ch) {
        FALLBACK_CHAR
    } else {
        ch
    }
}

/// Table index of the glyph used to draw `ch`
///
/// The byte offset into a flat 3-byte-per-entry table is this value times
/// [`GLYPH_WIDTH`].
pub fn glyph_index(ch: char) -> usize {
    sanitize(ch) as usize - FIRST_CHAR as usize
}

/// Column bytes for `ch`, after substitution
pub fn glyph(ch: char) -> &'static [u8; GLYPH_WIDTH] {
    &FONT[glyph_index(ch)]
}
