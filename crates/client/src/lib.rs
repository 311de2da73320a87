//! FormCase Client
//!
//! Wires user actions to the test case generation endpoint: submit HTML,
//! render the returned JSON with a summary, then copy or download it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  FormController                                          │
//! │    ├── request_sample_notice()                           │
//! │    ├── generate(html) ──► GenerationTransport (HTTP)     │
//! │    ├── copy_output()    ──► Clipboard                    │
//! │    └── download_output() ──► FileSaver                   │
//! ├──────────────────────────────────────────────────────────┤
//! │  Surface: OutputView + Notifier + Clipboard + FileSaver  │
//! │  CachedOutput: last rendered JSON, shared by clones      │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod cache;
pub mod controller;
pub mod highlight;
pub mod surface;
pub mod transport;

pub use cache::CachedOutput;
pub use controller::{ActionOutcome, FormController, GenerationReport, Surface};
pub use highlight::{highlight, Span, TokenKind};
pub use surface::{Clipboard, FileSaver, Notifier, OutputView};
pub use transport::{GenerationTransport, HttpTransport};
