/// Turns a theme entry into a valid C and Swift identifier.
pub fn identifier(name: &str) -> String {
    let mut ident = name
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => c,
            _ => '_',
        })
        .collect::<String>();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

// C, Objective-C and the C++ words that break Objective-C++ consumers.
const OBJC_RESERVED: &[&str] = &[
    "BOOL", "Class", "IMP", "NO", "SEL", "YES", "_Bool", "_Complex",
    "_Imaginary", "auto", "bool", "break", "bycopy", "byref", "case", "catch",
    "char", "class", "const", "continue", "default", "delete", "do", "double",
    "else", "enum", "explicit", "extern", "false", "float", "for", "friend",
    "goto", "id", "if", "in", "inline", "inout", "int", "long", "mutable",
    "namespace", "new", "nil", "oneway", "operator", "out", "private",
    "protected", "public", "register", "restrict", "return", "self", "short",
    "signed", "sizeof", "static", "struct", "super", "switch", "template",
    "this", "throw", "true", "try", "typedef", "typename", "union", "unsigned",
    "using", "virtual", "void", "volatile", "while",
];

const SWIFT_RESERVED: &[&str] = &[
    "Any", "Self", "_", "as", "associatedtype", "await", "break", "case",
    "catch", "class", "continue", "default", "defer", "deinit", "do", "else",
    "enum", "extension", "fallthrough", "false", "fileprivate", "for", "func",
    "guard", "if", "import", "in", "init", "inout", "internal", "is", "let",
    "nil", "open", "operator", "precedencegroup", "private", "protocol",
    "public", "repeat", "rethrows", "return", "self", "static", "struct",
    "subscript", "super", "switch", "throw", "throws", "true", "try",
    "typealias", "var", "where", "while",
];

fn unreserved(mut ident: String, reserved: &[&str]) -> String {
    if reserved.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Struct member name of `name` in the generated Objective-C.
pub fn objc_member(name: &str) -> String {
    unreserved(identifier(name), OBJC_RESERVED)
}

/// Enum case name of `name` in the generated Swift.
pub fn swift_member(name: &str) -> String {
    unreserved(identifier(name), SWIFT_RESERVED)
}

/// Whether `prefix` can be put in front of an identifier.
pub fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.starts_with(|c: char| c.is_ascii_digit())
        && prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `{prefix}{theme}Theme{suffix}`, the leading segment of all top-level symbols.
pub fn theme_symbol(prefix: &str, theme_name: &str, suffix: &str) -> String {
    format!("{prefix}{}Theme{suffix}", identifier(theme_name))
}

/// File stem of the per-theme symbol files.
pub fn symbols_stem(prefix: &str, theme_name: &str) -> String {
    theme_symbol(prefix, theme_name, "Symbols")
}

/// File stem of the umbrella header.
pub fn umbrella_stem(prefix: &str) -> String {
    format!("{prefix}ThemeSymbols")
}

pub fn escape_literal(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            x => escaped.push(x),
        }
    }
    escaped
}
