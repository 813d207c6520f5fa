//! Messages sent from background tasks to the UI thread. Both binaries own
//! one mpsc pair and drain it at the top of every frame.

#[derive(Debug, Clone)]
pub enum Msg {
    /// An image finished downloading and decoding; ready for texture upload.
    ImageDecoded {
        url: String,
        rgba: Vec<u8>,
        width: u32,
        height: u32,
    },
    /// Fetch or decode failed. The card keeps its placeholder; no retry.
    ImageFailed { url: String },
}
