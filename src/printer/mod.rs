use std::io;

pub mod objc;
pub mod swift;
pub mod umbrella;

pub struct Printer<'i, W> {
    writer: W,
    indentation: &'i str,
    indent: usize,
}

impl<'i, W> Printer<'i, W> {
    pub fn new(writer: W, indentation: &'i str) -> Self {
        Self {
            writer,
            indentation,
            indent: 0,
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent == 0 {
            panic!("Cannot dedent - indent was 0");
        }
        self.indent -= 1;
    }
}

impl<'i, W> Printer<'i, W>
where
    W: io::Write,
{
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.begin_line()?;
        self.write(line)?;
        writeln!(self.writer)
    }

    /// Writes an empty line (without indentation).
    pub fn new_line(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    pub fn begin_line(&mut self) -> io::Result<()> {
        for _ in 0..self.indent {
            self.writer.write_all(self.indentation.as_bytes())?;
        }
        Ok(())
    }

    pub fn write(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())?;
        Ok(())
    }

    pub fn write_fmt(&mut self, args: std::fmt::Arguments) -> io::Result<()> {
        self.begin_line()?;
        self.writer.write_fmt(args)?;
        Ok(())
    }
}

/// The "do not modify" comment at the top of every generated file.
pub fn write_banner<W: io::Write>(
    p: &mut Printer<W>,
    source: Option<&str>,
) -> io::Result<()> {
    match source {
        Some(source) => writeln!(
            p,
            "// WARNING: Do not modify. This file is machine-generated from '{source}'."
        )?,
        None => p.write_line("// WARNING: Do not modify. This file is machine-generated.")?,
    }
    p.new_line()
}

/// Renders into a buffer using `f`.
pub fn render<F>(indentation: &str, f: F) -> io::Result<Vec<u8>>
where
    F: FnOnce(&mut Printer<&mut Vec<u8>>) -> io::Result<()>,
{
    let mut buf = Vec::new();
    let mut printer = Printer::new(&mut buf, indentation);
    f(&mut printer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_with_given_string() {
        let out = render("--", |p| {
            p.write_line("a {")?;
            p.indent();
            writeln!(p, "b = {};", 1)?;
            p.indent();
            p.write_line("c")?;
            p.dedent();
            p.new_line()?;
            p.dedent();
            p.write_line("}")
        })
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a {\n--b = 1;\n----c\n\n}\n");
    }

    #[test]
    fn tab_indentation() {
        let out = render("\t", |p| {
            p.indent();
            p.write_line("x")
        })
        .unwrap();
        assert_eq!(out, b"\tx\n");
    }

    #[test]
    #[should_panic(expected = "Cannot dedent")]
    fn dedent_below_zero() {
        let mut buf = Vec::<u8>::new();
        Printer::new(&mut buf, "  ").dedent();
    }

    #[test]
    fn banner() {
        let out = render("", |p| write_banner(p, Some("ButtonsTheme.yaml"))).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "// WARNING: Do not modify. This file is machine-generated from 'ButtonsTheme.yaml'.\n\n"
        );
    }
}
