use std::io;

use crate::{
    model::Theme,
    naming::{escape_literal, objc_member, symbols_stem, theme_symbol},
};

use super::{write_banner, Printer};

pub fn generate_header(
    p: &mut Printer<impl io::Write>,
    theme: &Theme,
    prefix: &str,
) -> io::Result<()> {
    write_banner(p, theme.source.as_deref())?;
    p.write_line("#import <Foundation/Foundation.h>")?;
    p.new_line()?;
    p.write_line("NS_ASSUME_NONNULL_BEGIN")?;
    p.new_line()?;

    writeln!(
        p,
        "extern NSString * const {};",
        theme_symbol(prefix, &theme.name, "Name")
    )?;

    for (group, symbols) in theme.groups() {
        let struct_name = theme_symbol(prefix, &theme.name, group.suffix());
        p.new_line()?;
        writeln!(p, "extern const struct {struct_name} {{")?;
        p.indent();
        for symbol in symbols {
            writeln!(p, "__unsafe_unretained NSString *{};", objc_member(symbol))?;
        }
        p.dedent();
        writeln!(p, "}} {struct_name};")?;
    }

    p.new_line()?;
    p.write_line("NS_ASSUME_NONNULL_END")?;

    Ok(())
}

pub fn generate_impl(
    p: &mut Printer<impl io::Write>,
    theme: &Theme,
    prefix: &str,
) -> io::Result<()> {
    write_banner(p, theme.source.as_deref())?;
    writeln!(p, "#import \"{}.h\"", symbols_stem(prefix, &theme.name))?;
    p.new_line()?;

    writeln!(
        p,
        "NSString * const {} = @\"{}\";",
        theme_symbol(prefix, &theme.name, "Name"),
        escape_literal(&theme.name)
    )?;

    for (group, symbols) in theme.groups() {
        let struct_name = theme_symbol(prefix, &theme.name, group.suffix());
        p.new_line()?;
        writeln!(p, "const struct {struct_name} {struct_name} = {{")?;
        p.indent();
        for symbol in symbols {
            writeln!(
                p,
                ".{} = @\"{}\",",
                objc_member(symbol),
                escape_literal(symbol)
            )?;
        }
        p.dedent();
        p.write_line("};")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::render;

    fn buttons() -> Theme {
        Theme {
            name: "Buttons".to_owned(),
            source: Some("ButtonsTheme.yaml".to_owned()),
            constant_keys: vec!["BlueColor".to_owned()],
            class_names: vec!["Button".to_owned(), "ButtonText".to_owned()],
            properties: vec!["background-color".to_owned()],
        }
    }

    #[test]
    fn header() {
        let out =
            render("    ", |p| generate_header(p, &buttons(), "MTF")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\
// WARNING: Do not modify. This file is machine-generated from 'ButtonsTheme.yaml'.

#import <Foundation/Foundation.h>

NS_ASSUME_NONNULL_BEGIN

extern NSString * const MTFButtonsThemeName;

extern const struct MTFButtonsThemeConstantValues {
    __unsafe_unretained NSString *BlueColor;
} MTFButtonsThemeConstantValues;

extern const struct MTFButtonsThemeClassNames {
    __unsafe_unretained NSString *Button;
    __unsafe_unretained NSString *ButtonText;
} MTFButtonsThemeClassNames;

extern const struct MTFButtonsThemeProperties {
    __unsafe_unretained NSString *background_color;
} MTFButtonsThemeProperties;

NS_ASSUME_NONNULL_END
"
        );
    }

    #[test]
    fn implementation() {
        let out = render("\t", |p| generate_impl(p, &buttons(), "")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\
// WARNING: Do not modify. This file is machine-generated from 'ButtonsTheme.yaml'.

#import \"ButtonsThemeSymbols.h\"

NSString * const ButtonsThemeName = @\"Buttons\";

const struct ButtonsThemeConstantValues ButtonsThemeConstantValues = {
\t.BlueColor = @\"BlueColor\",
};

const struct ButtonsThemeClassNames ButtonsThemeClassNames = {
\t.Button = @\"Button\",
\t.ButtonText = @\"ButtonText\",
};

const struct ButtonsThemeProperties ButtonsThemeProperties = {
\t.background_color = @\"background-color\",
};
"
        );
    }

    #[test]
    fn empty_theme() {
        let theme = Theme::new("Empty");
        let header = render("  ", |p| generate_header(p, &theme, "")).unwrap();
        let header = String::from_utf8(header).unwrap();
        assert!(header.contains("extern NSString * const EmptyThemeName;"));
        assert!(!header.contains("struct"));

        let imp = render("  ", |p| generate_impl(p, &theme, "")).unwrap();
        assert!(!String::from_utf8(imp).unwrap().contains("struct"));
    }

    #[test]
    fn reserved_members() {
        let mut theme = Theme::new("Words");
        theme.properties = vec!["class".to_owned(), "default".to_owned()];

        let header = render("  ", |p| generate_header(p, &theme, "")).unwrap();
        let header = String::from_utf8(header).unwrap();
        assert!(header.contains("  __unsafe_unretained NSString *class_;\n"));
        assert!(header.contains("  __unsafe_unretained NSString *default_;\n"));

        let imp = render("  ", |p| generate_impl(p, &theme, "")).unwrap();
        let imp = String::from_utf8(imp).unwrap();
        assert!(imp.contains("  .class_ = @\"class\",\n"));
        assert!(imp.contains("  .default_ = @\"default\",\n"));
    }
}
