use std::error::Error;

use posjet::printer::{DEFAULT_PRODUCT_ID, DEFAULT_VENDOR_ID};
use posjet::{Alignment, PrintJob, Printer, TextFormat};

/// Prints a small three-line page on the first attached printer matching
/// the default Epson ids. Run with RUST_LOG=debug to watch the packets go
/// out.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut job = PrintJob::new();
    job.set_text_format(TextFormat::Quad)
        .pad(1)
        .text("This is line 1")?
        .set_text_alignment(Alignment::Center)
        .separator()?
        .set_text_alignment(Alignment::Right)
        .text("This is line 2")?
        .set_text_alignment(Alignment::Center)
        .separator()?
        .text("And line 3")?
        .pad(1)
        .cut();

    let mut printer = Printer::new(DEFAULT_VENDOR_ID, DEFAULT_PRODUCT_ID)?;
    if let Ok(info) = printer.info() {
        println!("printing to {} {}", info.manufacturer, info.product);
    }

    let ticket = printer.print(&job)?;
    let packets = ticket.wait()?;
    println!("done, {} packets", packets);

    printer.release()?;
    Ok(())
}
