pub mod diagnostic;
pub mod lexing;
pub mod parsing;
pub mod source;

use diagnostic::*;
use log::debug;
use parsing::*;
pub use source::*;
use std::rc::Rc;

pub fn run(source: Source) -> Result<(), &'static str> {
    let reporter: Rc<dyn Reporter> = diagnostic::DefaultReporter::new();
    run_with_reporter(source, reporter)
}

pub fn run_with_reporter(source: Source, reporter: Rc<dyn Reporter>) -> Result<(), &'static str> {
    debug!(target: "monkey", "Parsing {}", source.short_name());

    let (program, diagnostics) = parsing::parse(&source);

    debug!(
        target: "monkey",
        "Parsed {} statements with {} diagnostics",
        program.statements.len(),
        diagnostics.len()
    );

    let failed = !diagnostics.is_empty();
    for diagnostic in diagnostics {
        reporter.report(diagnostic);
    }
    if failed {
        return Err("Parsing failed");
    }

    let mut printer = ASTPrinter::new();
    printer.print(&program);
    println!("{}", program.compose_string());

    Ok(())
}
