/// Everything that can fail while composing a job or moving it to the
/// printer. Builder errors are synchronous and leave previously queued
/// fragments intact; transfer errors arrive through the job's completion
/// channel and end only that job.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),

    #[error("no code page 437 mapping for text past position {at}")]
    Encoding { at: usize },

    #[error("text format must be one of: normal, tall, wide, quad, bold, underlined (got {0:?})")]
    InvalidFormat(String),

    #[error("text alignment must be one of: left, center, right (got {0:?})")]
    InvalidAlignment(String),

    #[error("font must be one of: A, B (got {0:?})")]
    InvalidFont(String),

    #[error("cash drawer pin must be one of: 2, 5 (got {0})")]
    InvalidPin(u8),

    #[error("pulse timings must be between 0 and 242 inclusive (got {0})")]
    InvalidTiming(u16),

    #[error("endpoint reported an unusable packet size of {0}")]
    InvalidPacketSize(usize),

    #[error("Printer Not Found")]
    NotFound,

    #[error("Unable to locate expected endpoints")]
    InvalidEndpoints,

    #[error("No supported languages")]
    NoLanguages,

    #[error("Operation timeout")]
    Timeout,

    #[error("transfer failed at packet {packet}")]
    Transfer {
        packet: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("completion channel closed before an outcome was delivered")]
    ChannelClosed,
}
