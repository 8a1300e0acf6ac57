//! Emit the `SBMLErrorCodes` Java interface.
//!
//! The layout (tabs, trailing blanks) matches the file the toolkit has
//! always shipped, so regenerating it produces a minimal diff.

use std::io::{self, Write};

use crate::config::{CODES_INTERFACE, GeneratorConfig};
use crate::model::{ErrorConstant, ProcessedTable};

pub fn write_interface<W: Write + ?Sized>(
    w: &mut W,
    table: &ProcessedTable,
    config: &GeneratorConfig,
) -> io::Result<()> {
    writeln!(w, "package {};", config.codes_package)?;
    writeln!(w)?;
    writeln!(w)?;
    writeln!(w, "public interface {CODES_INTERFACE} {{ ")?;
    writeln!(w, " ")?;

    for constant in &table.constants {
        writeln!(w)?;
        write_constant(w, constant)?;
    }

    writeln!(w, "}}")?;
    Ok(())
}

fn write_constant<W: Write + ?Sized>(w: &mut W, constant: &ErrorConstant) -> io::Result<()> {
    writeln!(w, "\t /**")?;
    writeln!(w, "\t  * Error code {}:", constant.code)?;
    for line in &constant.comment {
        writeln!(w, "\t  * {line} ")?;
    }
    writeln!(w, "\t  */")?;
    writeln!(
        w,
        " \t public static final int {} = {}; ",
        constant.name, constant.code
    )?;
    Ok(())
}
