use posjet::printer::{DEFAULT_PRODUCT_ID, DEFAULT_VENDOR_ID};

/// Lists attached USB devices to help you find the vendor/product ids for
/// your printer. Alternatively you can use lsusb.
fn main() -> Result<(), rusb::Error> {
    for device in rusb::devices()?.iter() {
        let desc = match device.device_descriptor() {
            Ok(desc) => desc,
            Err(_) => continue,
        };
        let marker = if desc.vendor_id() == DEFAULT_VENDOR_ID
            && desc.product_id() == DEFAULT_PRODUCT_ID
        {
            "  <- default printer ids"
        } else {
            ""
        };
        println!(
            "Bus {:03} Device {:03} ID {:04x}:{:04x}{}",
            device.bus_number(),
            device.address(),
            desc.vendor_id(),
            desc.product_id(),
            marker,
        );
    }
    Ok(())
}
