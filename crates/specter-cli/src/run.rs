//! Subcommand execution.

use std::io::Write;

use anyhow::{Context, Result};
use specter::{filter, Catalog, Criteria, Product, Specification};
use specter_demos::{
    Document, Fax, FaxMachine, Journal, MultiMachine, OldFashionedPrinter, Persistence, Printer,
    Rectangle, Scanner, Shape, SimplePrinter, SimpleScanner, Square,
};
use tracing::info;

use crate::args::{Command, DevicesArgs, FilterArgs, JournalArgs, OutputFormat, ShapesArgs};

/// Runs `command`, writing its output to `out`.
pub fn execute(command: Command, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Filter(args) => run_filter(args, out),
        Command::Journal(args) => run_journal(args, out),
        Command::Shapes(args) => run_shapes(args, out),
        Command::Devices(args) => run_devices(args, out),
    }
}

fn run_filter(args: FilterArgs, out: &mut dyn Write) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::sample(),
    };

    let criteria = args.and.into_iter().fold(Criteria::new(), Criteria::and);
    let criteria = args.or.into_iter().fold(criteria, Criteria::or);
    let criteria = args.not.into_iter().fold(criteria, Criteria::not);

    let spec = criteria
        .build()
        .context("no filter criteria; pass --where, --any or --exclude")?;

    info!(spec = %spec.describe(), products = catalog.len(), "filtering catalog");
    let matches: Vec<&Product> = filter(&catalog, &*spec).collect();
    info!(matched = matches.len(), "filter finished");

    match args.format {
        OutputFormat::Text => {
            writeln!(out, "Products matching {}:", spec.describe())?;
            for product in &matches {
                writeln!(out, " - {product}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &matches)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_journal(args: JournalArgs, out: &mut dyn Write) -> Result<()> {
    let mut journal = Journal::new();
    for entry in &args.entries {
        journal.add_entry(entry);
    }
    for index in args.remove {
        journal.remove_entry(index)?;
    }

    writeln!(out, "{journal}")?;

    if let Some(path) = &args.save {
        if Persistence::new().save_to_file(&journal, path, args.overwrite)? {
            writeln!(out, "Saved journal to {}", path.display())?;
        } else {
            writeln!(
                out,
                "Kept existing {} (pass --overwrite to replace it)",
                path.display()
            )?;
        }
    }
    Ok(())
}

fn run_shapes(args: ShapesArgs, out: &mut dyn Write) -> Result<()> {
    let rectangle = Rectangle::new(args.width, args.height);
    writeln!(out, "{rectangle} has an area of {}", rectangle.area())?;

    let square = Square::new(args.side);
    writeln!(out, "{square} has an area of {}", square.area())?;

    let as_rectangle = Rectangle::from(square);
    writeln!(
        out,
        "{square} as a rectangle ({as_rectangle}) has an area of {}",
        as_rectangle.area()
    )?;
    Ok(())
}

fn run_devices(args: DevicesArgs, out: &mut dyn Write) -> Result<()> {
    let doc = Document::new(args.title);
    let machine = MultiMachine::new(SimpleScanner, SimplePrinter);

    let receipts = [
        machine.scan(&doc),
        machine.print(&doc),
        OldFashionedPrinter.print(&doc),
        FaxMachine.fax(&doc),
    ];
    for receipt in receipts {
        writeln!(out, "{receipt}")?;
    }
    Ok(())
}
