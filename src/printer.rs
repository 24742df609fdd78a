use std::collections::VecDeque;
use std::time::Duration;

use crate::error::Error;
use crate::job::PrintJob;
use crate::transfer::{self, JobTicket, Transport};

/// Timeout for sending USB messages
pub const TIMEOUT: u64 = 400;

/// USB vendor id most receipt printers of this family ship with (Epson)
pub const DEFAULT_VENDOR_ID: u16 = 0x04b8;
/// USB product id matching [`DEFAULT_VENDOR_ID`] (TM-T88 series)
pub const DEFAULT_PRODUCT_ID: u16 = 0x0202;

#[derive(Clone, Debug)]
pub struct UsbInfo {
    /// vendor_id is the USB vendor id used when initializing the printer
    pub vendor_id: u16,
    /// product_id is the USB product id used when initializing the printer
    pub product_id: u16,
    /// manufacturer is a string as defined in libusb for the device
    pub manufacturer: String,
    /// product is a string as defined in libusb for the device
    pub product: String,
}

/// A claimed USB receipt printer.
///
/// This is a thin shell over `rusb`: enumeration, kernel driver
/// detachment, interface claim and the bulk-out endpoint lookup. The
/// command stream itself comes from [`PrintJob`] and goes out through
/// [`transfer::send`].
///
/// Only one job may be in flight against a device at a time; callers are
/// responsible for serializing [`Printer::print`] calls.
pub struct Printer {
    device: rusb::Device<rusb::GlobalContext>,
    handle: rusb::DeviceHandle<rusb::GlobalContext>,
    descriptor: rusb::DeviceDescriptor,
    timeout: Duration,

    /// USB Vendor ID
    vid: u16,
    /// USB Product ID
    pid: u16,
    /// USB Command Endpoint (output)
    cmd_ep: u8,
    /// wMaxPacketSize reported for the command endpoint
    packet_size: u16,
}

impl Printer {
    /// Finds the printer matching `vid`/`pid`, opens it, detaches any
    /// kernel driver and claims the interface carrying a bulk output
    /// endpoint.
    pub fn new(vid: u16, pid: u16) -> Result<Self, Error> {
        // Iterate over the devices to find the printer
        let mut matches: VecDeque<_> = rusb::devices()?
            .iter()
            // Filter out the devices that match the vendor_id and product_id (should only be 1)
            .filter_map(|d| {
                let desc = match d.device_descriptor() {
                    Ok(desc) => desc,
                    Err(_) => {
                        return None;
                    }
                };
                if desc.vendor_id() == vid && desc.product_id() == pid {
                    Some((d, desc))
                } else {
                    None
                }
            })
            .collect();
        let (device, descriptor) = match matches.pop_front() {
            Some((device, descriptor)) => (device, descriptor),
            None => return Err(Error::NotFound),
        };

        let mut handle = device.open()?;
        let _ = handle.set_auto_detach_kernel_driver(true);

        let config_desc = device.config_descriptor(0)?;
        let interface = match config_desc.interfaces().next() {
            Some(interface) => interface,
            None => return Err(Error::InvalidEndpoints),
        };

        let mut cmd_ep = None;
        for interface_desc in interface.descriptors() {
            for endpoint_desc in interface_desc.endpoint_descriptors() {
                if let (rusb::TransferType::Bulk, rusb::Direction::Out) =
                    (endpoint_desc.transfer_type(), endpoint_desc.direction())
                {
                    cmd_ep = Some((endpoint_desc.address(), endpoint_desc.max_packet_size()));
                }
            }
        }
        let (cmd_ep, packet_size) = match cmd_ep {
            Some(found) => found,
            None => return Err(Error::InvalidEndpoints),
        };

        match handle.kernel_driver_active(interface.number())? {
            true => {
                handle.detach_kernel_driver(interface.number())?;
            }
            false => {
                log::trace!("Kernel driver inactive");
            }
        }
        handle.claim_interface(interface.number())?;

        log::debug!(
            "claimed {:04x}:{:04x}, bulk-out endpoint {:#04x}, packet size {}",
            vid,
            pid,
            cmd_ep,
            packet_size
        );

        Ok(Printer {
            device,
            handle,
            descriptor,
            timeout: Duration::from_millis(TIMEOUT),
            vid,
            pid,
            cmd_ep,
            packet_size,
        })
    }

    /// Releases the claimed interface. Open a fresh [`Printer`] to talk to
    /// the device again.
    pub fn release(&mut self) -> Result<(), Error> {
        let config_desc = self.device.config_descriptor(0)?;
        let interface = match config_desc.interfaces().next() {
            Some(interface) => interface,
            None => return Err(Error::InvalidEndpoints),
        };
        let _ = self.handle.release_interface(interface.number());
        Ok(())
    }

    pub fn info(&mut self) -> Result<UsbInfo, Error> {
        let languages = self.handle.read_languages(self.timeout)?;
        let language = match languages.first() {
            Some(&language) => language,
            None => return Err(Error::NoLanguages),
        };

        let manufacturer = self
            .handle
            .read_manufacturer_string(language, &self.descriptor, self.timeout)
            .unwrap_or("".to_string());
        let product = self
            .handle
            .read_product_string(language, &self.descriptor, self.timeout)
            .unwrap_or("".to_string());
        Ok(UsbInfo {
            vendor_id: self.vid,
            product_id: self.pid,
            manufacturer,
            product,
        })
    }

    /// Finalizes `job` and streams it to the device in endpoint-sized
    /// packets. The ticket delivers the job's completion or failure.
    pub fn print(&mut self, job: &PrintJob) -> Result<JobTicket, Error> {
        let data = job.print_data();
        transfer::send(self, &data)
    }
}

impl Transport for Printer {
    fn max_packet_size(&self) -> Option<usize> {
        Some(self.packet_size as usize)
    }

    fn write_packet(&mut self, packet: &[u8]) -> Result<(), Error> {
        let n_bytes = self.handle.write_bulk(self.cmd_ep, packet, self.timeout)?;
        if n_bytes != packet.len() {
            return Err(Error::Timeout);
        }
        Ok(())
    }
}
