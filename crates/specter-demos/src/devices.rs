//! Office devices with one trait per capability.
//!
//! A device implements only the roles it supports. [`MultiFunctionDevice`]
//! is the combination of [`Printer`] and [`Scanner`], and [`MultiMachine`]
//! assembles one from separate parts by delegation.

use std::fmt;

/// A document handed to a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// What a device did with a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub device: &'static str,
    pub action: &'static str,
    pub title: String,
}

impl Receipt {
    fn new(device: &'static str, action: &'static str, doc: &Document) -> Self {
        Self {
            device,
            action,
            title: doc.title().to_string(),
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.device, self.action, self.title)
    }
}

pub trait Printer {
    fn print(&self, doc: &Document) -> Receipt;
}

pub trait Scanner {
    fn scan(&self, doc: &Document) -> Receipt;
}

pub trait Fax {
    fn fax(&self, doc: &Document) -> Receipt;
}

/// A device that can both print and scan.
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<D: Printer + Scanner> MultiFunctionDevice for D {}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePrinter;

impl Printer for SimplePrinter {
    fn print(&self, doc: &Document) -> Receipt {
        Receipt::new("printer", "printed", doc)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleScanner;

impl Scanner for SimpleScanner {
    fn scan(&self, doc: &Document) -> Receipt {
        Receipt::new("scanner", "scanned", doc)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FaxMachine;

impl Fax for FaxMachine {
    fn fax(&self, doc: &Document) -> Receipt {
        Receipt::new("fax", "faxed", doc)
    }
}

/// Only prints; it has no scanning or faxing to stub out.
#[derive(Debug, Clone, Copy, Default)]
pub struct OldFashionedPrinter;

impl Printer for OldFashionedPrinter {
    fn print(&self, doc: &Document) -> Receipt {
        Receipt::new("old-fashioned printer", "printed", doc)
    }
}

/// A multi-function device built from a scanner and a printer.
///
/// ```
/// use specter_demos::{Document, MultiMachine, Printer, Scanner, SimplePrinter, SimpleScanner};
///
/// let machine = MultiMachine::new(SimpleScanner, SimplePrinter);
/// let doc = Document::new("report");
///
/// assert_eq!(machine.print(&doc).to_string(), "printer printed 'report'");
/// assert_eq!(machine.scan(&doc).to_string(), "scanner scanned 'report'");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MultiMachine<S, P> {
    scanner: S,
    printer: P,
}

impl<S: Scanner, P: Printer> MultiMachine<S, P> {
    pub fn new(scanner: S, printer: P) -> Self {
        Self { scanner, printer }
    }
}

impl<S: Scanner, P: Printer> Printer for MultiMachine<S, P> {
    fn print(&self, doc: &Document) -> Receipt {
        self.printer.print(doc)
    }
}

impl<S: Scanner, P: Printer> Scanner for MultiMachine<S, P> {
    fn scan(&self, doc: &Document) -> Receipt {
        self.scanner.scan(doc)
    }
}
