use std::collections::{BTreeMap, BTreeSet};

use serde::{de::IgnoredAny, Deserialize};
use tracing::warn;

use crate::model::Theme;

const CONSTANT_SIGIL: char = '$';
const CLASS_SIGIL: char = '.';

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YamlEntry {
    Class(BTreeMap<String, IgnoredAny>),
    Other(IgnoredAny),
}

// Only the keys are read, values belong to the theming library.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct YamlTheme(BTreeMap<String, YamlEntry>);

#[derive(Default)]
struct ThemeParserState {
    constant_keys: BTreeSet<String>,
    class_names: BTreeSet<String>,
    properties: BTreeSet<String>,
}

impl ThemeParserState {
    fn accept(&mut self, key: &str, entry: &YamlEntry) {
        if let Some(name) = key.strip_prefix(CONSTANT_SIGIL) {
            if name.is_empty() {
                warn!("Skipping constant without a name ('{key}')");
                return;
            }
            self.constant_keys.insert(name.to_owned());
        } else if let Some(name) = key.strip_prefix(CLASS_SIGIL) {
            if name.is_empty() {
                warn!("Skipping class without a name ('{key}')");
                return;
            }
            let YamlEntry::Class(properties) = entry else {
                warn!("Skipping class '{name}', it isn't a mapping of properties");
                return;
            };
            self.class_names.insert(name.to_owned());
            self.properties.extend(properties.keys().cloned());
        } else {
            warn!(
                "Skipping '{key}', it is neither a constant ('{CONSTANT_SIGIL}') nor a class ('{CLASS_SIGIL}')"
            );
        }
    }
}

/// Enumerates the constants, classes and properties of a theme file.
///
/// Accepts YAML and JSON. All three sequences come out sorted and without
/// duplicates, so the generated files don't depend on the key order in the
/// theme file.
pub fn parse(name: &str, source: &str) -> Result<Theme, serde_yaml::Error> {
    let yaml: YamlTheme = serde_yaml::from_str(source)?;

    let mut state = ThemeParserState::default();
    for (key, entry) in yaml.0.iter() {
        state.accept(key, entry);
    }

    let mut theme = Theme::new(name);
    theme.constant_keys = state.constant_keys.into_iter().collect();
    theme.class_names = state.class_names.into_iter().collect();
    theme.properties = state.properties.into_iter().collect();
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn enumerates_yaml() {
        let theme = parse(
            "Buttons",
            r#"
$RedColor: '#f00'
$BlueColor: '#00f'
.Button:
  backgroundColor: $BlueColor
  titleText: .ButtonText
.ButtonText:
  textColor: $RedColor
  backgroundColor: $RedColor
"#,
        )
        .unwrap();

        assert_eq!(theme.name, "Buttons");
        assert_eq!(theme.constant_keys, strings(&["BlueColor", "RedColor"]));
        assert_eq!(theme.class_names, strings(&["Button", "ButtonText"]));
        assert_eq!(
            theme.properties,
            strings(&["backgroundColor", "textColor", "titleText"])
        );
    }

    #[test]
    fn enumerates_json() {
        let theme = parse(
            "Colors",
            r##"{ "$Accent": "#abcdef", ".Label": { "textColor": "$Accent" } }"##,
        )
        .unwrap();

        assert_eq!(theme.constant_keys, strings(&["Accent"]));
        assert_eq!(theme.class_names, strings(&["Label"]));
        assert_eq!(theme.properties, strings(&["textColor"]));
    }

    #[test]
    fn skips_invalid_entries() {
        let theme = parse(
            "Broken",
            r#"
$: 1
.: {}
Unprefixed: 2
.NotAMapping: 3
.Empty: {}
$Kept: 4
"#,
        )
        .unwrap();

        assert_eq!(theme.constant_keys, strings(&["Kept"]));
        assert_eq!(theme.class_names, strings(&["Empty"]));
        assert!(theme.properties.is_empty());
    }

    #[test]
    fn empty_mapping() {
        let theme = parse("Nothing", "{}").unwrap();
        assert!(theme.is_empty());
    }

    #[test]
    fn reports_location() {
        let err = parse("Bad", "$A: 1\n$B: [1, 2\n").unwrap_err();
        assert!(err.location().is_some());

        assert!(parse("List", "- 1\n- 2\n").is_err());
    }
}
