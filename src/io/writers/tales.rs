use std::io::Write;

use crate::types::Tale;

/// Write one tale block, followed by a blank line.
pub fn write_tale<W: Write>(out: &mut W, tale: &Tale) -> std::io::Result<()> {
    writeln!(out, "- name: {}", tale.name)?;
    writeln!(out, "  type: {}", tale.tale_type)?;
    writeln!(out, "  length: {}", tale.length())?;
    writeln!(out, "  parts:")?;
    for id in &tale.parts {
        writeln!(out, "    - {}", id)?;
    }
    writeln!(out)
}

pub fn write_tales<W: Write>(out: &mut W, tales: &[Tale]) -> std::io::Result<()> {
    for tale in tales {
        write_tale(out, tale)?;
    }
    Ok(())
}

/// Diagnostic tokens go on their own lines.
pub fn write_diagnostics<'a, W, I>(out: &mut W, tokens: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}
