//! Small demos that accompany the specter filtering crate.
//!
//! - [`journal`]: a journal that only keeps entries, and a separate
//!   [`Persistence`] type that writes it to disk
//! - [`devices`]: narrow printer/scanner/fax roles composed into a
//!   multi-function machine
//! - [`shapes`]: rectangles and squares as separate immutable values

pub mod devices;
mod error;
pub mod journal;
pub mod shapes;

pub use devices::{
    Document, Fax, FaxMachine, MultiFunctionDevice, MultiMachine, OldFashionedPrinter, Printer,
    Receipt, Scanner, SimplePrinter, SimpleScanner,
};
pub use error::{JournalError, Result};
pub use journal::{Journal, Persistence};
pub use shapes::{Rectangle, Shape, Square};
