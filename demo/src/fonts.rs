//! Bitmap font tables generated by `font-converter`.

use font::descriptor::{FontDescriptor, GlyphWidths};

/// Bitmaps of the `Small` font.
#[rustfmt::skip]
static SMALL_BITMAPS: [u8; 855] = [
    // ASCII: 32, char width: 3
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 33, char width: 2
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x00, // --......
    0x80, // O-......
    0x00, // --......
    0x00, // --......
    // ASCII: 34, char width: 4
    0xa0, // O-O-....
    0xa0, // O-O-....
    0xa0, // O-O-....
    0x00, // ----....
    0x00, // ----....
    0x00, // ----....
    0x00, // ----....
    0x00, // ----....
    0x00, // ----....
    // ASCII: 35, char width: 6
    0x50, // -O-O--..
    0x50, // -O-O--..
    0xf8, // OOOOO-..
    0x50, // -O-O--..
    0xf8, // OOOOO-..
    0x50, // -O-O--..
    0x50, // -O-O--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 36, char width: 6
    0x20, // --O---..
    0x78, // -OOOO-..
    0xa0, // O-O---..
    0x70, // -OOO--..
    0x28, // --O-O-..
    0xf0, // OOOO--..
    0x20, // --O---..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 37, char width: 6
    0xc0, // OO----..
    0xc8, // OO--O-..
    0x10, // ---O--..
    0x20, // --O---..
    0x40, // -O----..
    0x98, // O--OO-..
    0x18, // ---OO-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 38, char width: 6
    0x60, // -OO---..
    0x90, // O--O--..
    0xa0, // O-O---..
    0x40, // -O----..
    0xa8, // O-O-O-..
    0x90, // O--O--..
    0x68, // -OO-O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 39, char width: 2
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x00, // --......
    0x00, // --......
    0x00, // --......
    0x00, // --......
    0x00, // --......
    0x00, // --......
    // ASCII: 40, char width: 3
    0x40, // -O-.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x40, // -O-.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 41, char width: 3
    0x80, // O--.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x80, // O--.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 42, char width: 6
    0x00, // ------..
    0x20, // --O---..
    0xa8, // O-O-O-..
    0x70, // -OOO--..
    0xa8, // O-O-O-..
    0x20, // --O---..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 43, char width: 6
    0x00, // ------..
    0x20, // --O---..
    0x20, // --O---..
    0xf8, // OOOOO-..
    0x20, // --O---..
    0x20, // --O---..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 44, char width: 3
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x80, // O--.....
    0x00, // ---.....
    // ASCII: 45, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x00, // -----...
    0xf0, // OOOO-...
    0x00, // -----...
    0x00, // -----...
    0x00, // -----...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 46, char width: 2
    0x00, // --......
    0x00, // --......
    0x00, // --......
    0x00, // --......
    0x00, // --......
    0x80, // O-......
    0x80, // O-......
    0x00, // --......
    0x00, // --......
    // ASCII: 47, char width: 6
    0x08, // ----O-..
    0x08, // ----O-..
    0x10, // ---O--..
    0x20, // --O---..
    0x40, // -O----..
    0x80, // O-----..
    0x80, // O-----..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 48, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x98, // O--OO-..
    0xa8, // O-O-O-..
    0xc8, // OO--O-..
    0x88, // O---O-..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 49, char width: 6
    0x20, // --O---..
    0x60, // -OO---..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 50, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x08, // ----O-..
    0x10, // ---O--..
    0x20, // --O---..
    0x40, // -O----..
    0xf8, // OOOOO-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 51, char width: 6
    0xf8, // OOOOO-..
    0x10, // ---O--..
    0x20, // --O---..
    0x10, // ---O--..
    0x08, // ----O-..
    0x88, // O---O-..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 52, char width: 6
    0x10, // ---O--..
    0x30, // --OO--..
    0x50, // -O-O--..
    0x90, // O--O--..
    0xf8, // OOOOO-..
    0x10, // ---O--..
    0x10, // ---O--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 53, char width: 6
    0xf8, // OOOOO-..
    0x80, // O-----..
    0xf0, // OOOO--..
    0x08, // ----O-..
    0x08, // ----O-..
    0x88, // O---O-..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 54, char width: 6
    0x30, // --OO--..
    0x40, // -O----..
    0x80, // O-----..
    0xf0, // OOOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 55, char width: 6
    0xf8, // OOOOO-..
    0x08, // ----O-..
    0x10, // ---O--..
    0x20, // --O---..
    0x40, // -O----..
    0x40, // -O----..
    0x40, // -O----..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 56, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0x70, // -OOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 57, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0x78, // -OOOO-..
    0x08, // ----O-..
    0x10, // ---O--..
    0x60, // -OO---..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 58, char width: 2
    0x00, // --......
    0x80, // O-......
    0x80, // O-......
    0x00, // --......
    0x80, // O-......
    0x80, // O-......
    0x00, // --......
    0x00, // --......
    0x00, // --......
    // ASCII: 59, char width: 3
    0x00, // ---.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x00, // ---.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x80, // O--.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 60, char width: 5
    0x10, // ---O-...
    0x20, // --O--...
    0x40, // -O---...
    0x80, // O----...
    0x40, // -O---...
    0x20, // --O--...
    0x10, // ---O-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 61, char width: 5
    0x00, // -----...
    0x00, // -----...
    0xf0, // OOOO-...
    0x00, // -----...
    0xf0, // OOOO-...
    0x00, // -----...
    0x00, // -----...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 62, char width: 5
    0x80, // O----...
    0x40, // -O---...
    0x20, // --O--...
    0x10, // ---O-...
    0x20, // --O--...
    0x40, // -O---...
    0x80, // O----...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 63, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x08, // ----O-..
    0x10, // ---O--..
    0x20, // --O---..
    0x00, // ------..
    0x20, // --O---..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 64, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0xb8, // O-OOO-..
    0xa8, // O-O-O-..
    0xb8, // O-OOO-..
    0x80, // O-----..
    0x78, // -OOOO-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 65, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0xf8, // OOOOO-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 66, char width: 6
    0xf0, // OOOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0xf0, // OOOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0xf0, // OOOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 67, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x80, // O-----..
    0x80, // O-----..
    0x80, // O-----..
    0x88, // O---O-..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 68, char width: 6
    0xf0, // OOOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0xf0, // OOOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 69, char width: 6
    0xf8, // OOOOO-..
    0x80, // O-----..
    0x80, // O-----..
    0xf0, // OOOO--..
    0x80, // O-----..
    0x80, // O-----..
    0xf8, // OOOOO-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 70, char width: 6
    0xf8, // OOOOO-..
    0x80, // O-----..
    0x80, // O-----..
    0xf0, // OOOO--..
    0x80, // O-----..
    0x80, // O-----..
    0x80, // O-----..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 71, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x80, // O-----..
    0xb8, // O-OOO-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x78, // -OOOO-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 72, char width: 6
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0xf8, // OOOOO-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 73, char width: 4
    0xe0, // OOO-....
    0x40, // -O--....
    0x40, // -O--....
    0x40, // -O--....
    0x40, // -O--....
    0x40, // -O--....
    0xe0, // OOO-....
    0x00, // ----....
    0x00, // ----....
    // ASCII: 74, char width: 6
    0x38, // --OOO-..
    0x10, // ---O--..
    0x10, // ---O--..
    0x10, // ---O--..
    0x90, // O--O--..
    0x90, // O--O--..
    0x60, // -OO---..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 75, char width: 6
    0x88, // O---O-..
    0x90, // O--O--..
    0xa0, // O-O---..
    0xc0, // OO----..
    0xa0, // O-O---..
    0x90, // O--O--..
    0x88, // O---O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 76, char width: 6
    0x80, // O-----..
    0x80, // O-----..
    0x80, // O-----..
    0x80, // O-----..
    0x80, // O-----..
    0x80, // O-----..
    0xf8, // OOOOO-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 77, char width: 6
    0x88, // O---O-..
    0xd8, // OO-OO-..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 78, char width: 6
    0x88, // O---O-..
    0x88, // O---O-..
    0xc8, // OO--O-..
    0xa8, // O-O-O-..
    0x98, // O--OO-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 79, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 80, char width: 6
    0xf0, // OOOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0xf0, // OOOO--..
    0x80, // O-----..
    0x80, // O-----..
    0x80, // O-----..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 81, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0xa8, // O-O-O-..
    0x90, // O--O--..
    0x68, // -OO-O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 82, char width: 6
    0xf0, // OOOO--..
    0x88, // O---O-..
    0x88, // O---O-..
    0xf0, // OOOO--..
    0xa0, // O-O---..
    0x90, // O--O--..
    0x88, // O---O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 83, char width: 6
    0x78, // -OOOO-..
    0x80, // O-----..
    0x80, // O-----..
    0x70, // -OOO--..
    0x08, // ----O-..
    0x08, // ----O-..
    0xf0, // OOOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 84, char width: 6
    0xf8, // OOOOO-..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 85, char width: 6
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 86, char width: 6
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x50, // -O-O--..
    0x20, // --O---..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 87, char width: 6
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0x50, // -O-O--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 88, char width: 6
    0x88, // O---O-..
    0x88, // O---O-..
    0x50, // -O-O--..
    0x20, // --O---..
    0x50, // -O-O--..
    0x88, // O---O-..
    0x88, // O---O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 89, char width: 6
    0x88, // O---O-..
    0x88, // O---O-..
    0x50, // -O-O--..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 90, char width: 6
    0xf8, // OOOOO-..
    0x08, // ----O-..
    0x10, // ---O--..
    0x20, // --O---..
    0x40, // -O----..
    0x80, // O-----..
    0xf8, // OOOOO-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 91, char width: 3
    0xc0, // OO-.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0xc0, // OO-.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 92, char width: 6
    0x80, // O-----..
    0x80, // O-----..
    0x40, // -O----..
    0x20, // --O---..
    0x10, // ---O--..
    0x08, // ----O-..
    0x08, // ----O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 93, char width: 3
    0xc0, // OO-.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x40, // -O-.....
    0x40, // -O-.....
    0xc0, // OO-.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 94, char width: 6
    0x20, // --O---..
    0x50, // -O-O--..
    0x88, // O---O-..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 95, char width: 6
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    0xf8, // OOOOO-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 96, char width: 3
    0x80, // O--.....
    0x40, // -O-.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 97, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x60, // -OO--...
    0x10, // ---O-...
    0x70, // -OOO-...
    0x90, // O--O-...
    0x70, // -OOO-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 98, char width: 5
    0x80, // O----...
    0x80, // O----...
    0xe0, // OOO--...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0xe0, // OOO--...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 99, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x70, // -OOO-...
    0x80, // O----...
    0x80, // O----...
    0x80, // O----...
    0x70, // -OOO-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 100, char width: 5
    0x10, // ---O-...
    0x10, // ---O-...
    0x70, // -OOO-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x70, // -OOO-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 101, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x60, // -OO--...
    0x90, // O--O-...
    0xf0, // OOOO-...
    0x80, // O----...
    0x70, // -OOO-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 102, char width: 5
    0x30, // --OO-...
    0x40, // -O---...
    0xf0, // OOOO-...
    0x40, // -O---...
    0x40, // -O---...
    0x40, // -O---...
    0x40, // -O---...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 103, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x70, // -OOO-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x70, // -OOO-...
    0x10, // ---O-...
    0x60, // -OO--...
    // ASCII: 104, char width: 5
    0x80, // O----...
    0x80, // O----...
    0xe0, // OOO--...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 105, char width: 2
    0x80, // O-......
    0x00, // --......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x00, // --......
    0x00, // --......
    // ASCII: 106, char width: 4
    0x20, // --O-....
    0x00, // ----....
    0x20, // --O-....
    0x20, // --O-....
    0x20, // --O-....
    0x20, // --O-....
    0x20, // --O-....
    0xa0, // O-O-....
    0x40, // -O--....
    // ASCII: 107, char width: 5
    0x80, // O----...
    0x80, // O----...
    0x90, // O--O-...
    0xa0, // O-O--...
    0xc0, // OO---...
    0xa0, // O-O--...
    0x90, // O--O-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 108, char width: 3
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x40, // -O-.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 109, char width: 6
    0x00, // ------..
    0x00, // ------..
    0xf0, // OOOO--..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 110, char width: 5
    0x00, // -----...
    0x00, // -----...
    0xe0, // OOO--...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 111, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x60, // -OO--...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x60, // -OO--...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 112, char width: 5
    0x00, // -----...
    0x00, // -----...
    0xe0, // OOO--...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0xe0, // OOO--...
    0x80, // O----...
    0x80, // O----...
    // ASCII: 113, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x70, // -OOO-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x70, // -OOO-...
    0x10, // ---O-...
    0x10, // ---O-...
    // ASCII: 114, char width: 5
    0x00, // -----...
    0x00, // -----...
    0xb0, // O-OO-...
    0xc0, // OO---...
    0x80, // O----...
    0x80, // O----...
    0x80, // O----...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 115, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x70, // -OOO-...
    0x80, // O----...
    0x60, // -OO--...
    0x10, // ---O-...
    0xe0, // OOO--...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 116, char width: 5
    0x40, // -O---...
    0x40, // -O---...
    0xf0, // OOOO-...
    0x40, // -O---...
    0x40, // -O---...
    0x40, // -O---...
    0x30, // --OO-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 117, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x70, // -OOO-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 118, char width: 6
    0x00, // ------..
    0x00, // ------..
    0x88, // O---O-..
    0x88, // O---O-..
    0x88, // O---O-..
    0x50, // -O-O--..
    0x20, // --O---..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 119, char width: 6
    0x00, // ------..
    0x00, // ------..
    0x88, // O---O-..
    0x88, // O---O-..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0x50, // -O-O--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 120, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x90, // O--O-...
    0x90, // O--O-...
    0x60, // -OO--...
    0x90, // O--O-...
    0x90, // O--O-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 121, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x70, // -OOO-...
    0x10, // ---O-...
    0x60, // -OO--...
    // ASCII: 122, char width: 5
    0x00, // -----...
    0x00, // -----...
    0xf0, // OOOO-...
    0x10, // ---O-...
    0x60, // -OO--...
    0x80, // O----...
    0xf0, // OOOO-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 123, char width: 4
    0x20, // --O-....
    0x40, // -O--....
    0x40, // -O--....
    0x80, // O---....
    0x40, // -O--....
    0x40, // -O--....
    0x20, // --O-....
    0x00, // ----....
    0x00, // ----....
    // ASCII: 124, char width: 2
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x00, // --......
    0x00, // --......
    // ASCII: 125, char width: 4
    0x80, // O---....
    0x40, // -O--....
    0x40, // -O--....
    0x20, // --O-....
    0x40, // -O--....
    0x40, // -O--....
    0x80, // O---....
    0x00, // ----....
    0x00, // ----....
    // ASCII: 126, char width: 6
    0x00, // ------..
    0x00, // ------..
    0x40, // -O----..
    0xa8, // O-O-O-..
    0x10, // ---O--..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
    0x00, // ------..
];

/// Glyph widths of the `Small` font.
#[rustfmt::skip]
static SMALL_WIDTHS: [u8; 95] = [
      3,   2,   4,   6,   6,   6,   6,   2,
      3,   3,   6,   6,   3,   5,   2,   6,
      6,   6,   6,   6,   6,   6,   6,   6,
      6,   6,   2,   3,   5,   5,   5,   6,
      6,   6,   6,   6,   6,   6,   6,   6,
      6,   4,   6,   6,   6,   6,   6,   6,
      6,   6,   6,   6,   6,   6,   6,   6,
      6,   6,   6,   3,   6,   3,   6,   6,
      3,   5,   5,   5,   5,   5,   5,   5,
      5,   2,   4,   5,   3,   6,   5,   5,
      5,   5,   5,   5,   5,   5,   6,   6,
      5,   5,   5,   4,   2,   4,   6,
];

/// The `Small` font.
pub static SMALL: FontDescriptor<'static> = FontDescriptor::new(
    32, // First ascii code
    95, // Glyph count
    1, // Glyph width (bytes)
    9, // Glyph height (pixels)
    GlyphWidths::Variable(&SMALL_WIDTHS),
    &SMALL_BITMAPS,
    None,
);

/// Bitmaps of the `SmallStrings` font.
#[rustfmt::skip]
static SMALL_STRINGS_BITMAPS: [u8; 117] = [
    // ASCII: 32, char width: 3
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 33, char width: 2
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x00, // --......
    0x80, // O-......
    0x00, // --......
    0x00, // --......
    // ASCII: 49, char width: 6
    0x20, // --O---..
    0x60, // -OO---..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x20, // --O---..
    0x70, // -OOO--..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 50, char width: 6
    0x70, // -OOO--..
    0x88, // O---O-..
    0x08, // ----O-..
    0x10, // ---O--..
    0x20, // --O---..
    0x40, // -O----..
    0xf8, // OOOOO-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 101, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x60, // -OO--...
    0x90, // O--O-...
    0xf0, // OOOO-...
    0x80, // O----...
    0x70, // -OOO-...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 105, char width: 2
    0x80, // O-......
    0x00, // --......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x80, // O-......
    0x00, // --......
    0x00, // --......
    // ASCII: 108, char width: 3
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x80, // O--.....
    0x40, // -O-.....
    0x00, // ---.....
    0x00, // ---.....
    // ASCII: 109, char width: 6
    0x00, // ------..
    0x00, // ------..
    0xf0, // OOOO--..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0xa8, // O-O-O-..
    0x00, // ------..
    0x00, // ------..
    // ASCII: 111, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x60, // -OO--...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x60, // -OO--...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 112, char width: 5
    0x00, // -----...
    0x00, // -----...
    0xe0, // OOO--...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0xe0, // OOO--...
    0x80, // O----...
    0x80, // O----...
    // ASCII: 114, char width: 5
    0x00, // -----...
    0x00, // -----...
    0xb0, // O-OO-...
    0xc0, // OO---...
    0x80, // O----...
    0x80, // O----...
    0x80, // O----...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 115, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x70, // -OOO-...
    0x80, // O----...
    0x60, // -OO--...
    0x10, // ---O-...
    0xe0, // OOO--...
    0x00, // -----...
    0x00, // -----...
    // ASCII: 117, char width: 5
    0x00, // -----...
    0x00, // -----...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x90, // O--O-...
    0x70, // -OOO-...
    0x00, // -----...
    0x00, // -----...
];

/// Glyph widths of the `SmallStrings` font.
#[rustfmt::skip]
static SMALL_STRINGS_WIDTHS: [u8; 13] = [
      3,   2,   6,   6,   5,   2,   3,   6,
      5,   5,   5,   5,   5,
];

/// Glyph offsets of the `SmallStrings` font, `0xff` marks absent characters.
#[rustfmt::skip]
static SMALL_STRINGS_OFFSETS: [u8; 95] = [
      0,   1, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff,   2,   3, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff,   4, 0xff, 0xff,
    0xff,   5, 0xff, 0xff,   6,   7, 0xff,   8,
      9, 0xff,  10,  11, 0xff,  12, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

/// The `SmallStrings` font.
pub static SMALL_STRINGS: FontDescriptor<'static> = FontDescriptor::new(
    32, // First ascii code
    95, // Glyph count
    1, // Glyph width (bytes)
    9, // Glyph height (pixels)
    GlyphWidths::Variable(&SMALL_STRINGS_WIDTHS),
    &SMALL_STRINGS_BITMAPS,
    Some(&SMALL_STRINGS_OFFSETS),
);
