//! ESC/POS command streams for USB thermal receipt printers.
//!
//! A [`PrintJob`] collects semantic print operations (text, alignment,
//! emphasis, feed, cut, cash drawer kick) into an ordered byte stream, and
//! the [`transfer`] module moves the finished stream to a printer in
//! endpoint-sized USB packets.
//!
//! ```no_run
//! use posjet::printer::{DEFAULT_PRODUCT_ID, DEFAULT_VENDOR_ID};
//! use posjet::{Alignment, PrintJob, Printer, TextFormat};
//!
//! fn main() -> Result<(), posjet::Error> {
//!     let mut job = PrintJob::new();
//!     job.set_text_alignment(Alignment::Center)
//!         .set_text_format(TextFormat::Quad)
//!         .text("Hello world!")?
//!         .new_line(2)
//!         .cut();
//!
//!     let mut printer = Printer::new(DEFAULT_VENDOR_ID, DEFAULT_PRODUCT_ID)?;
//!     let ticket = printer.print(&job)?;
//!     ticket.wait()?;
//!     Ok(())
//! }
//! ```
//!
//! Anything that talks to hardware lives in [`printer`]; the builder and
//! packetizer have no USB dependency of their own and can be driven against
//! any [`transfer::Transport`] implementation.

pub mod consts;
mod error;
pub mod job;
pub mod printer;
pub mod transfer;

pub use error::Error;
pub use job::{Alignment, Font, PrintJob, TextFormat, TextStyle};
pub use printer::{Printer, UsbInfo};
pub use transfer::{JobOutcome, JobTicket, Transport};
