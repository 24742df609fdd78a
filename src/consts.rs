//! ESC/POS control sequences and print-mode bits.
//!
//! This table is data, not logic, but its bytes are load-bearing: the
//! printer acts on exact byte values, so a transposed byte prints the wrong
//! thing with no software-visible error. Sequences are kept byte-for-byte
//! as the hardware expects them, reserved bytes included.

// Feed control sequences

/// LF - Print and line feed
pub const CTL_LF: &[u8] = &[0x0a];
/// CR - Carriage return
pub const CTL_CR: &[u8] = &[0x0d];
/// HT - Horizontal tab
pub const CTL_HT: &[u8] = &[0x09];

// Printer hardware

/// ESC @ - Initialize printer, clear data in the print buffer and set print
/// mode to the default mode when powered on.
///
/// ASCII    ESC   @
/// Hex      1b   40
/// Decimal  27   64
///
/// Notes:
///   - The data in the receive buffer is not cleared
///   - The macro definition is not cleared
pub const HW_INIT: &[u8] = &[0x1b, 0x40];

/// ESC = 1 - Select printer to which the host computer sends data
pub const HW_SELECT: &[u8] = &[0x1b, 0x3d, 0x01];

// Cash drawer

/// ESC p 0 - Pulse to drawer pin 2; on/off times are appended in 2ms units
pub const CD_KICK_2: &[u8] = &[0x1b, 0x70, 0x00];
/// ESC p 1 - Pulse to drawer pin 5
pub const CD_KICK_5: &[u8] = &[0x1b, 0x70, 0x01];

// Paper

/// GS V B 0 - Full cut paper. The third byte could be 0x66 on some
/// firmware; the trailing 0x00 is required either way.
pub const PAPER_FULL_CUT: &[u8] = &[0x1d, 0x56, 0x42, 0x00];
/// GS V 1 - Partial cut paper
pub const PAPER_PART_CUT: &[u8] = &[0x1d, 0x56, 0x01];
/// ESC J 255, twice - feed far enough to push printed content past the cutter
pub const PAPER_ADVANCE: &[u8] = &[0x1b, 0x4a, 0xff, 0x1b, 0x4a, 0xff];

// Print modes

/// ESC ! n - Select print mode. The mode byte n is the bitwise OR of the
/// TXT_* bit values below and gets appended when the sequence is emitted.
pub const TXT_MODE: &[u8] = &[0x1b, 0x21];

/// Normal text, every mode bit clear
pub const TXT_NORMAL: u8 = 0x00;
/// Font type A
pub const TXT_FONT_A: u8 = 0x00;
/// Font type B
pub const TXT_FONT_B: u8 = 0x01;
/// Bold font ON
pub const TXT_BOLD_ON: u8 = 0x08;
/// Double height text ON
pub const TXT_2HEIGHT: u8 = 0x10;
/// Double width text ON
pub const TXT_2WIDTH: u8 = 0x20;
/// Underline font 1-dot ON
pub const TXT_UNDERL_ON: u8 = 0x80;

// Text format

/// ESC a 0 - Left justification
pub const TXT_ALIGN_LT: &[u8] = &[0x1b, 0x61, 0x00];
/// ESC a 1 - Centering
pub const TXT_ALIGN_CT: &[u8] = &[0x1b, 0x61, 0x01];
/// ESC a 2 - Right justification
pub const TXT_ALIGN_RT: &[u8] = &[0x1b, 0x61, 0x02];

// Barcode format. Carried for command-table completeness; nothing in this
// crate emits them.

/// HRI barcode chars OFF
pub const BARCODE_TXT_OFF: &[u8] = &[0x1d, 0x48, 0x00];
/// HRI barcode chars above
pub const BARCODE_TXT_ABV: &[u8] = &[0x1d, 0x48, 0x01];
/// HRI barcode chars below
pub const BARCODE_TXT_BLW: &[u8] = &[0x1d, 0x48, 0x02];
/// HRI barcode chars both above and below
pub const BARCODE_TXT_BTH: &[u8] = &[0x1d, 0x48, 0x03];
/// Font type A for HRI barcode chars
pub const BARCODE_FONT_A: &[u8] = &[0x1d, 0x66, 0x00];
/// Font type B for HRI barcode chars
pub const BARCODE_FONT_B: &[u8] = &[0x1d, 0x66, 0x01];
/// Barcode height [1-255]
pub const BARCODE_HEIGHT: &[u8] = &[0x1d, 0x68, 0x64];
/// Barcode width [2-6]
pub const BARCODE_WIDTH: &[u8] = &[0x1d, 0x77, 0x03];
/// Barcode type UPC-A
pub const BARCODE_UPC_A: &[u8] = &[0x1d, 0x6b, 0x00, 0x00];
/// Barcode type UPC-E
pub const BARCODE_UPC_E: &[u8] = &[0x1d, 0x6b, 0x01, 0x00];
/// Barcode type EAN13
pub const BARCODE_EAN13: &[u8] = &[0x1d, 0x6b, 0x02, 0x00];
/// Barcode type EAN8
pub const BARCODE_EAN8: &[u8] = &[0x1d, 0x6b, 0x03, 0x00];
/// Barcode type CODE39
pub const BARCODE_CODE39: &[u8] = &[0x1d, 0x6b, 0x04, 0x00];
/// Barcode type ITF
pub const BARCODE_ITF: &[u8] = &[0x1d, 0x6b, 0x05, 0x00];

// Image format. Same carry-through as the barcode block above.

/// Set raster image normal size
pub const S_RASTER_N: &[u8] = &[0x1d, 0x76, 0x30, 0x00];
/// Set raster image double width
pub const S_RASTER_2W: &[u8] = &[0x1d, 0x76, 0x30, 0x01];
/// Set raster image double height
pub const S_RASTER_2H: &[u8] = &[0x1d, 0x76, 0x30, 0x02];
/// Set raster image quadruple
pub const S_RASTER_Q: &[u8] = &[0x1d, 0x76, 0x30, 0x03];
