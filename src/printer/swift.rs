use std::io;

use crate::{
    model::Theme,
    naming::{escape_literal, swift_member, theme_symbol},
};

use super::{write_banner, Printer};

pub fn generate(
    p: &mut Printer<impl io::Write>,
    theme: &Theme,
    prefix: &str,
) -> io::Result<()> {
    write_banner(p, theme.source.as_deref())?;
    p.write_line("import Foundation")?;
    p.new_line()?;

    writeln!(
        p,
        "public let {} = \"{}\"",
        theme_symbol(prefix, &theme.name, "Name"),
        escape_literal(&theme.name)
    )?;

    for (group, symbols) in theme.groups() {
        p.new_line()?;
        writeln!(
            p,
            "public enum {}: String {{",
            theme_symbol(prefix, &theme.name, group.suffix())
        )?;
        p.indent();
        for symbol in symbols {
            writeln!(
                p,
                "case {} = \"{}\"",
                swift_member(symbol),
                escape_literal(symbol)
            )?;
        }
        p.dedent();
        p.write_line("}")?;
    }

    Ok(())
}
