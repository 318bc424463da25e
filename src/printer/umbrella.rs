use std::io;

use crate::{model::Theme, naming::symbols_stem};

use super::{write_banner, Printer};

/// Imports the symbol header of every theme, in the given order.
pub fn generate(
    p: &mut Printer<impl io::Write>,
    themes: &[Theme],
    prefix: &str,
) -> io::Result<()> {
    write_banner(p, None)?;
    for theme in themes {
        writeln!(p, "#import \"{}.h\"", symbols_stem(prefix, &theme.name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::render;

    #[test]
    fn imports_in_order() {
        let themes = [Theme::new("Zebra"), Theme::new("Apple"), Theme::new("Mango")];
        let out = render("    ", |p| generate(p, &themes, "MTF")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\
// WARNING: Do not modify. This file is machine-generated.

#import \"MTFZebraThemeSymbols.h\"
#import \"MTFAppleThemeSymbols.h\"
#import \"MTFMangoThemeSymbols.h\"
"
        );
    }
}
