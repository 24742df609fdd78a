use std::str::FromStr;

use codepage_437::{ToCp437, CP437_CONTROL};

use crate::consts;
use crate::error::Error;

/// Column width of the line drawn by [`PrintJob::separator`].
const SEPARATOR_COLUMNS: usize = 42;

/// Upper bound for cash drawer pulse timings, in milliseconds.
const PULSE_MS_MAX: u16 = 242;

/// Text formats selectable through [`PrintJob::set_text_format`].
///
/// `Normal` clears every attribute flag; every other value sets exactly the
/// flag(s) its name implies and leaves the rest alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFormat {
    Normal,
    Tall,
    Wide,
    Quad,
    Bold,
    Underlined,
}

impl FromStr for TextFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_ref() {
            "normal" => Ok(TextFormat::Normal),
            "tall" => Ok(TextFormat::Tall),
            "wide" => Ok(TextFormat::Wide),
            "quad" => Ok(TextFormat::Quad),
            "bold" => Ok(TextFormat::Bold),
            "underlined" => Ok(TextFormat::Underlined),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_ref() {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            _ => Err(Error::InvalidAlignment(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    A,
    B,
}

impl FromStr for Font {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_uppercase().as_ref() {
            "A" => Ok(Font::A),
            "B" => Ok(Font::B),
            _ => Err(Error::InvalidFont(s.to_string())),
        }
    }
}

/// Independent print-mode toggles.
///
/// The wire form is a single byte, the bitwise OR of the bit value of every
/// flag that is currently set. Flags only change through the format, font,
/// bold and underline calls on [`PrintJob`]; nothing clears them implicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub font_b: bool,
    pub bold: bool,
    pub double_height: bool,
    pub double_width: bool,
    pub underline: bool,
}

impl TextStyle {
    /// Combined ESC ! mode byte for the current flags.
    pub fn mode_byte(&self) -> u8 {
        let mut mode = consts::TXT_NORMAL;
        if self.font_b {
            mode |= consts::TXT_FONT_B;
        }
        if self.bold {
            mode |= consts::TXT_BOLD_ON;
        }
        if self.double_height {
            mode |= consts::TXT_2HEIGHT;
        }
        if self.double_width {
            mode |= consts::TXT_2WIDTH;
        }
        if self.underline {
            mode |= consts::TXT_UNDERL_ON;
        }
        mode
    }
}

/// A print job assembled from semantic print operations.
///
/// Every call appends one or more byte fragments to an ordered queue; the
/// queue is never reordered or deduplicated, since all printer state depends
/// on byte position. [`PrintJob::print_data`] is a pure read of the current
/// queue and may be called any number of times; the job stays mutable
/// afterwards and later calls simply affect subsequent reads.
///
/// Fallible operations fail before touching the queue, so a caller may catch
/// the error, skip that call and keep composing.
#[derive(Debug, Default)]
pub struct PrintJob {
    queue: Vec<Vec<u8>>,
    style: TextStyle,
}

impl PrintJob {
    pub fn new() -> Self {
        PrintJob::default()
    }

    /// Current attribute flags, as of the last format/font/bold/underline
    /// call.
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Appends `content`, encoded under code page 437, as one fragment.
    ///
    /// A character without a CP437 mapping rejects the whole call with
    /// [`Error::Encoding`]; nothing is appended in that case.
    pub fn text(&mut self, content: &str) -> Result<&mut Self, Error> {
        let encoded = content
            .to_cp437(&CP437_CONTROL)
            .map_err(|err| Error::Encoding {
                at: err.representable_up_to,
            })?;
        self.queue.push(encoded.into_owned());
        Ok(self)
    }

    /// Appends `count` carriage-return + line-feed pairs. A count below one
    /// feeds a single line.
    pub fn new_line(&mut self, count: usize) -> &mut Self {
        let count = if count < 1 { 1 } else { count };
        let crlf = [consts::CTL_CR, consts::CTL_LF].concat();
        for _ in 0..count {
            self.queue.push(crlf.clone());
        }
        self
    }

    /// Feeds blank paper, `count` times, to push content past the cutter.
    pub fn pad(&mut self, count: usize) -> &mut Self {
        let count = if count < 1 { 1 } else { count };
        for _ in 0..count {
            self.queue.push(consts::PAPER_ADVANCE.to_vec());
        }
        self
    }

    /// Appends a horizontal tab.
    pub fn tab(&mut self) -> &mut Self {
        self.queue.push(consts::CTL_HT.to_vec());
        self
    }

    /// Applies a named text format and emits the recomputed mode byte.
    pub fn set_text_format(&mut self, format: TextFormat) -> &mut Self {
        match format {
            TextFormat::Normal => self.style = TextStyle::default(),
            TextFormat::Tall => self.style.double_height = true,
            TextFormat::Wide => self.style.double_width = true,
            TextFormat::Quad => {
                self.style.double_height = true;
                self.style.double_width = true;
            }
            TextFormat::Bold => self.style.bold = true,
            TextFormat::Underlined => self.style.underline = true,
        }
        self.push_mode()
    }

    pub fn set_text_alignment(&mut self, align: Alignment) -> &mut Self {
        let cmd = match align {
            Alignment::Left => consts::TXT_ALIGN_LT,
            Alignment::Center => consts::TXT_ALIGN_CT,
            Alignment::Right => consts::TXT_ALIGN_RT,
        };
        self.queue.push(cmd.to_vec());
        self
    }

    pub fn set_underline(&mut self, underline: bool) -> &mut Self {
        self.style.underline = underline;
        self.push_mode()
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.style.bold = bold;
        self.push_mode()
    }

    /// Selects the character font face by toggling the font-B flag.
    pub fn set_font(&mut self, font: Font) -> &mut Self {
        self.style.font_b = font == Font::B;
        self.push_mode()
    }

    /// Horizontal rule: a line break, 42 columns of `-`, a line break.
    pub fn separator(&mut self) -> Result<&mut Self, Error> {
        let line = "-".repeat(SEPARATOR_COLUMNS);
        self.new_line(1).text(&line)?.new_line(1);
        Ok(self)
    }

    /// Appends the full paper cut sequence.
    pub fn cut(&mut self) -> &mut Self {
        self.queue.push(consts::PAPER_FULL_CUT.to_vec());
        self
    }

    /// Appends the partial paper cut sequence.
    pub fn partial_cut(&mut self) -> &mut Self {
        self.queue.push(consts::PAPER_PART_CUT.to_vec());
        self
    }

    /// Kicks the cash drawer.
    ///
    /// `pin` selects the kick pulse opcode (2 or 5). The pulse ON/OFF times
    /// are given in milliseconds, encoded on the wire in 2ms increments, and
    /// must each lie in `0..=242`. Common defaults are `(2, 110, 242)`, from
    /// the Epson TM-88V.
    pub fn cashdraw(&mut self, pin: u8, on_ms: u16, off_ms: u16) -> Result<&mut Self, Error> {
        let kick = match pin {
            2 => consts::CD_KICK_2,
            5 => consts::CD_KICK_5,
            _ => return Err(Error::InvalidPin(pin)),
        };
        if on_ms > PULSE_MS_MAX {
            return Err(Error::InvalidTiming(on_ms));
        }
        if off_ms > PULSE_MS_MAX {
            return Err(Error::InvalidTiming(off_ms));
        }
        let mut fragment = kick.to_vec();
        fragment.push((on_ms / 2) as u8);
        fragment.push((off_ms / 2) as u8);
        self.queue.push(fragment);
        Ok(self)
    }

    /// Assembles the finished command stream: the hardware init sequence,
    /// then every fragment in append order.
    pub fn print_data(&self) -> Vec<u8> {
        let body: usize = self.queue.iter().map(Vec::len).sum();
        let mut data = Vec::with_capacity(consts::HW_INIT.len() + body);
        data.extend_from_slice(consts::HW_INIT);
        for fragment in &self.queue {
            data.extend_from_slice(fragment);
        }
        data
    }

    fn push_mode(&mut self) -> &mut Self {
        let mut fragment = consts::TXT_MODE.to_vec();
        fragment.push(self.style.mode_byte());
        self.queue.push(fragment);
        self
    }
}
