//! Byte positions and sizes of every field read from an archive.
//!
//! All integers are stored big-endian and unsigned. Texture-relative positions are measured from the texture's offset
//! as listed in the index table.

/// Represents the absolute position of the texture count.
pub const COUNT_OFFSET: u64 = 16;

/// Represents the absolute position of the index table offset.
pub const INDEX_OFFSET: u64 = 20;

/// Represents the size of a single index table entry.
pub const INDEX_ENTRY_SIZE: u64 = 4;

/// Represents the position of the type tag, relative to the texture.
pub const TAG_OFFSET: u64 = 4;

/// Represents the size of the type tag.
pub const TAG_SIZE: usize = 4;

/// Represents the position of the width, relative to the texture.
pub const WIDTH_OFFSET: u64 = 16;

/// Represents the position of the height, relative to the texture.
pub const HEIGHT_OFFSET: u64 = 18;

/// Represents the position of the data offset, relative to the texture.
pub const DATA_OFFSET: u64 = 20;

/// Represents the assumed size of every palette, which precedes the bitmap.
pub const PALETTE_SIZE: u64 = 128;

/// Represents the type tag of a compressed texture.
pub const TAG_COMPRESSED: [u8; TAG_SIZE] = [0x00, 0x00, 0x00, 0x21];

/// Represents the type tag of a simple texture.
pub const TAG_SIMPLE: [u8; TAG_SIZE] = [0x80, 0x00, 0x00, 0x01];

/// Represents the type tag of a basic texture.
pub const TAG_BASIC: [u8; TAG_SIZE] = [0x00, 0x00, 0x00, 0x01];

/// Represents the type tag of an unverified variant, seen alongside compressed textures.
pub const TAG_VARIANT: [u8; TAG_SIZE] = [0x00, 0x00, 0x00, 0x22];
