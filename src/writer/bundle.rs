//! Emit the Java `ResourceBundle` classes holding error messages.
//!
//! Every bundle key is `Integer.toString(SBMLErrorCodes.<NAME>)`, so the
//! bundle only compiles against the interface generated from the same table.

use std::io::{self, Write};

use crate::config::{CODES_INTERFACE, GeneratorConfig};
use crate::model::{ErrorConstant, ProcessedTable};

/// License block the JSBML sources open with.
const LICENSE_HEADER: &str = "\
/*
 * ----------------------------------------------------------------------------
 * This file is part of JSBML. Please visit <http://sbml.org/Software/JSBML>
 * for the latest version of JSBML and more information about SBML.
 *
 * Copyright (C) 2009-2018 jointly by the following organizations:
 * 1. The University of Tuebingen, Germany
 * 2. EMBL European Bioinformatics Institute (EBML-EBI), Hinxton, UK
 * 3. The California Institute of Technology, Pasadena, CA, USA
 * 4. The University of California, San Diego, La Jolla, CA, USA
 * 5. The Babraham Institute, Cambridge, UK
 *
 * This library is free software; you can redistribute it and/or modify it
 * under the terms of the GNU Lesser General Public License as published by
 * the Free Software Foundation. A copy of the license agreement is provided
 * in the file named \"LICENSE.txt\" included with this software distribution
 * and also available online as <http://sbml.org/Software/JSBML/License>.
 * ----------------------------------------------------------------------------
 */
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleKind {
    Message,
    ShortMessage,
}

impl BundleKind {
    pub fn class_name(self) -> &'static str {
        match self {
            BundleKind::Message => "SBMLErrorMessage",
            BundleKind::ShortMessage => "SBMLErrorShortMessage",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.java", self.class_name())
    }

    /// Padding after each `contents.put(...);` line.
    fn line_end(self) -> &'static str {
        match self {
            BundleKind::Message => "  ",
            BundleKind::ShortMessage => "",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            BundleKind::Message => "message",
            BundleKind::ShortMessage => "short message",
        }
    }

    /// Text of `constant` for this bundle, `None` when it has none.
    pub fn text(self, constant: &ErrorConstant) -> Option<&str> {
        match self {
            BundleKind::Message => Some(constant.message.as_str()),
            BundleKind::ShortMessage => constant.short_message.as_deref(),
        }
    }
}

pub fn write_bundle<W: Write + ?Sized>(
    w: &mut W,
    kind: BundleKind,
    table: &ProcessedTable,
    config: &GeneratorConfig,
) -> io::Result<()> {
    write_header(w, kind, config)?;

    let mut first = true;
    for constant in &table.constants {
        let Some(text) = kind.text(constant) else {
            continue;
        };
        if !first {
            writeln!(w)?;
        }
        first = false;
        writeln!(
            w,
            "        contents.put(Integer.toString({CODES_INTERFACE}.{}), \"{text}\");{}",
            constant.name,
            kind.line_end()
        )?;
    }

    write_footer(w)
}

fn write_header<W: Write + ?Sized>(
    w: &mut W,
    kind: BundleKind,
    config: &GeneratorConfig,
) -> io::Result<()> {
    let noun = kind.noun();

    w.write_all(LICENSE_HEADER.as_bytes())?;
    writeln!(w)?;
    writeln!(w, "package {};", config.bundle_package)?;
    writeln!(w)?;
    writeln!(w)?;
    writeln!(w, "import java.util.Enumeration;")?;
    writeln!(w, "import java.util.HashMap;")?;
    writeln!(w, "import java.util.Map;")?;
    writeln!(w, "import java.util.ResourceBundle;")?;
    writeln!(w)?;
    writeln!(w, "import org.sbml.jsbml.SBMLError;")?;
    writeln!(w, "import {}.{CODES_INTERFACE};", config.codes_package)?;
    writeln!(w)?;
    writeln!(w)?;
    writeln!(w, "/**")?;
    writeln!(
        w,
        " * Contains the {noun}s for each {{@link SBMLError}} in the English language."
    )?;
    writeln!(w, " * ")?;
    writeln!(
        w,
        " * <p>The key for each {noun} is the integer defined for each {{@link SBMLError}} in {{@link {CODES_INTERFACE}}}.</p>"
    )?;
    writeln!(w, " * ")?;
    writeln!(
        w,
        " * <p>Automatically generated file, using sbml-errgen on the error table json file.</p>"
    )?;
    writeln!(w, " *")?;
    writeln!(w, " * @see ResourceBundle")?;
    writeln!(w, " * @since 1.3")?;
    writeln!(w, " */")?;
    writeln!(w, "public class {} extends ResourceBundle {{ ", kind.class_name())?;
    writeln!(w, " ")?;
    writeln!(w)?;
    writeln!(w, "  /**")?;
    writeln!(w, "   * ")?;
    writeln!(w, "   */")?;
    writeln!(
        w,
        "  private static final Map<String, String> contents = new HashMap<String, String>();"
    )?;
    writeln!(w, "  ")?;
    writeln!(w, "  static {{")?;
    writeln!(w, "      ")?;
    Ok(())
}

fn write_footer<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    writeln!(w, "  }} ")?;
    writeln!(w)?;
    writeln!(w)?;
    writeln!(w, "  @Override")?;
    writeln!(w, "  protected Object handleGetObject(String key) {{")?;
    writeln!(w)?;
    writeln!(w, "    return contents.get(key);")?;
    writeln!(w, "  }}")?;
    writeln!(w)?;
    writeln!(w, "  @Override")?;
    writeln!(w, "  public Enumeration<String> getKeys() {{")?;
    writeln!(w, "    ")?;
    writeln!(w, "    return java.util.Collections.enumeration(contents.keySet());")?;
    writeln!(w, "  }}")?;
    writeln!(w)?;
    writeln!(w, "}}")?;
    Ok(())
}
