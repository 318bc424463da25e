use std::path::Path;

/// The symbols of a single theme.
///
/// Each sequence is emitted in the order it is stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// File name the theme was read from (used in the generated banner).
    pub source: Option<String>,
    pub constant_keys: Vec<String>,
    pub class_names: Vec<String>,
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolGroup {
    ConstantValues,
    ClassNames,
    Properties,
}

impl SymbolGroup {
    pub const ALL: [SymbolGroup; 3] = [
        SymbolGroup::ConstantValues,
        SymbolGroup::ClassNames,
        SymbolGroup::Properties,
    ];

    /// Suffix appended to `{prefix}{Name}Theme` for this group.
    pub fn suffix(self) -> &'static str {
        match self {
            SymbolGroup::ConstantValues => "ConstantValues",
            SymbolGroup::ClassNames => "ClassNames",
            SymbolGroup::Properties => "Properties",
        }
    }
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn symbols(&self, group: SymbolGroup) -> &[String] {
        match group {
            SymbolGroup::ConstantValues => &self.constant_keys,
            SymbolGroup::ClassNames => &self.class_names,
            SymbolGroup::Properties => &self.properties,
        }
    }

    /// All non-empty groups, in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = (SymbolGroup, &[String])> {
        SymbolGroup::ALL
            .into_iter()
            .map(|g| (g, self.symbols(g)))
            .filter(|(_, symbols)| !symbols.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.groups().next().is_none()
    }
}

/// Derives a theme name from its file: `ButtonsTheme.yaml` becomes `Buttons`.
pub fn theme_name_for(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    match stem.strip_suffix("Theme") {
        Some(name) if !name.is_empty() => Some(name.to_owned()),
        _ => Some(stem.to_owned()),
    }
}
