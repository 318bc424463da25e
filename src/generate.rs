use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ahash::{AHashMap, AHashSet};
use tracing::{debug, info};

use crate::{
    model::Theme,
    naming::{
        is_valid_prefix, objc_member, swift_member, symbols_stem,
        umbrella_stem,
    },
    printer::{self, render},
};

/// Language of the generated symbol files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    ObjC,
    Swift,
}

/// Everything that controls how the symbol files of a theme are generated.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub directory: PathBuf,
    pub indentation: String,
    pub prefix: String,
    /// Skip writing files whose content wouldn't change.
    pub check_for_modification: bool,
    pub language: Language,
}

impl GenerateOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            indentation: "    ".to_owned(),
            prefix: String::new(),
            check_for_modification: true,
            language: Language::default(),
        }
    }
}

/// A generated file that hasn't been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Whether a file was written or already had the generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Where an artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Couldn't create the output directory '{}'", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Couldn't read '{}' to check for modifications", path.display())]
    ReadExisting {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Couldn't write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The printer failed while writing into its in-memory buffer.
    #[error("Failed to render symbols: {0}")]
    Render(#[from] io::Error),
    #[error("'{first}' and '{second}' in theme '{theme}' both map to the symbol '{symbol}'")]
    SymbolCollision {
        theme: String,
        first: String,
        second: String,
        symbol: String,
    },
    #[error("Found duplicate theme ('{0}')")]
    DuplicateTheme(String),
    #[error("'{0}' can't be used as a symbol prefix")]
    InvalidPrefix(String),
}

/// Renders the symbol files of `theme` without touching the file system.
pub fn render_symbols(
    theme: &Theme,
    indentation: &str,
    prefix: &str,
    language: Language,
) -> Result<Vec<Artifact>, GenerateError> {
    check_prefix(prefix)?;
    check_collisions(theme, language)?;

    let stem = symbols_stem(prefix, &theme.name);
    let artifacts = match language {
        Language::ObjC => vec![
            Artifact {
                file_name: format!("{stem}.h"),
                contents: render(indentation, |p| {
                    printer::objc::generate_header(p, theme, prefix)
                })?,
            },
            Artifact {
                file_name: format!("{stem}.m"),
                contents: render(indentation, |p| {
                    printer::objc::generate_impl(p, theme, prefix)
                })?,
            },
        ],
        Language::Swift => vec![Artifact {
            file_name: format!("{stem}.swift"),
            contents: render(indentation, |p| {
                printer::swift::generate(p, theme, prefix)
            })?,
        }],
    };
    Ok(artifacts)
}

/// Generates the symbol files of a single theme into `options.directory`.
///
/// Nothing is written if the theme can't be rendered.
pub fn generate_symbols_files(
    theme: &Theme,
    options: &GenerateOptions,
) -> Result<Vec<WrittenFile>, GenerateError> {
    let artifacts = render_symbols(
        theme,
        &options.indentation,
        &options.prefix,
        options.language,
    )?;
    write_artifacts(
        &options.directory,
        artifacts,
        options.check_for_modification,
    )
}

pub fn render_umbrella_header(
    themes: &[Theme],
    prefix: &str,
) -> Result<Artifact, GenerateError> {
    check_unique_themes(themes, prefix)?;

    Ok(Artifact {
        file_name: format!("{}.h", umbrella_stem(prefix)),
        contents: render("", |p| printer::umbrella::generate(p, themes, prefix))?,
    })
}

/// Fails if two themes would generate files with the same name.
///
/// Call this before generating any symbol files, otherwise the later theme
/// overwrites the files of the earlier one.
pub fn check_unique_themes(
    themes: &[Theme],
    prefix: &str,
) -> Result<(), GenerateError> {
    check_prefix(prefix)?;

    let mut seen = AHashSet::with_capacity(themes.len());
    for theme in themes {
        if !seen.insert(symbols_stem(prefix, &theme.name)) {
            return Err(GenerateError::DuplicateTheme(theme.name.clone()));
        }
    }
    Ok(())
}

/// Generates a header importing the symbol headers of all `themes`.
pub fn generate_umbrella_header(
    themes: &[Theme],
    directory: &Path,
    prefix: &str,
    check_for_modification: bool,
) -> Result<WrittenFile, GenerateError> {
    let artifact = render_umbrella_header(themes, prefix)?;
    let mut written =
        write_artifacts(directory, vec![artifact], check_for_modification)?;
    Ok(written.remove(0))
}

/// Writes `contents` to `path`.
///
/// With `check_for_modification`, an existing file with the same content is
/// left alone.
pub fn write_artifact(
    path: &Path,
    contents: &[u8],
    check_for_modification: bool,
) -> Result<WriteOutcome, GenerateError> {
    if check_for_modification {
        match fs::read(path) {
            Ok(existing) if existing == contents => {
                debug!("'{}' is up to date", path.display());
                return Ok(WriteOutcome::Unchanged);
            }
            Ok(_) => (),
            Err(e) if e.kind() == io::ErrorKind::NotFound => (),
            Err(source) => {
                return Err(GenerateError::ReadExisting {
                    path: path.to_owned(),
                    source,
                })
            }
        }
    }

    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_owned(),
        source,
    })?;
    info!("Wrote '{}'", path.display());
    Ok(WriteOutcome::Written)
}

fn write_artifacts(
    directory: &Path,
    artifacts: Vec<Artifact>,
    check_for_modification: bool,
) -> Result<Vec<WrittenFile>, GenerateError> {
    fs::create_dir_all(directory).map_err(|source| {
        GenerateError::CreateDirectory {
            path: directory.to_owned(),
            source,
        }
    })?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = directory.join(&artifact.file_name);
        let outcome =
            write_artifact(&path, &artifact.contents, check_for_modification)?;
        written.push(WrittenFile { path, outcome });
    }
    Ok(written)
}

fn check_prefix(prefix: &str) -> Result<(), GenerateError> {
    if is_valid_prefix(prefix) {
        Ok(())
    } else {
        Err(GenerateError::InvalidPrefix(prefix.to_owned()))
    }
}

fn check_collisions(
    theme: &Theme,
    language: Language,
) -> Result<(), GenerateError> {
    let member: fn(&str) -> String = match language {
        Language::ObjC => objc_member,
        Language::Swift => swift_member,
    };
    for (_, symbols) in theme.groups() {
        let mut seen: AHashMap<String, &str> =
            AHashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let name = member(symbol);
            if let Some(first) = seen.insert(name.clone(), symbol) {
                return Err(GenerateError::SymbolCollision {
                    theme: theme.name.clone(),
                    first: first.to_owned(),
                    second: symbol.clone(),
                    symbol: name,
                });
            }
        }
    }
    Ok(())
}
