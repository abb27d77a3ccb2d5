//! Tile-set text syntax and typed configuration
//!
//! A specification is a whitespace-separated list of forms plus optional
//! named options, e.g. `B-Aa-- b--Aa- name=Ribbons`. Each form is one edge
//! symbol per slot; `form@count` sets its selection weight. Form length
//! picks the topology: 4 edges for the square grid, 6 for the hexagonal
//! one. An appearance suffix (`form/color`) from the legacy syntax is
//! accepted and ignored; appearance is not this crate's concern.

use crate::io::error::{AssemblyError, Result};
use crate::spatial::topology::Topology;
use crate::tiles::alphabet::Alphabet;
use crate::tiles::table::BaseForm;

/// Typed result of parsing a tile-set specification
#[derive(Clone, Debug)]
pub struct TileSetConfig {
    /// Optional display name from `name=`
    pub name: String,
    /// Requested region width in cells from `width=`, if any
    pub width: Option<i32>,
    /// Requested region height in cells from `height=`, if any
    pub height: Option<i32>,
    /// Validated base forms with selection weights
    pub forms: Vec<BaseForm>,
    /// Topology selected by form length
    pub topology: Topology,
    /// The standard edge alphabet
    pub alphabet: Alphabet,
}

/// Working state accumulated while parsing tokens
#[derive(Default)]
struct Draft {
    name: String,
    width: Option<i32>,
    height: Option<i32>,
    raw_forms: Vec<String>,
}

/// One named option: its key and how to apply a value to the draft
struct OptionParser {
    key: &'static str,
    apply: fn(&mut Draft, &str) -> Result<()>,
}

/// Declarative table of recognized named options
const OPTION_PARSERS: &[OptionParser] = &[
    OptionParser {
        key: "name",
        apply: |draft, value| {
            draft.name = value.to_string();
            Ok(())
        },
    },
    OptionParser {
        key: "width",
        apply: |draft, value| {
            draft.width = Some(parse_dimension("width", value)?);
            Ok(())
        },
    },
    OptionParser {
        key: "height",
        apply: |draft, value| {
            draft.height = Some(parse_dimension("height", value)?);
            Ok(())
        },
    },
];

fn parse_dimension(option: &str, value: &str) -> Result<i32> {
    let parsed = value
        .parse::<i32>()
        .map_err(|parse_error| AssemblyError::InvalidOption {
            option: option.to_string(),
            value: value.to_string(),
            reason: parse_error.to_string(),
        })?;
    if parsed <= 0 {
        return Err(AssemblyError::InvalidOption {
            option: option.to_string(),
            value: value.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(parsed)
}

impl TileSetConfig {
    /// Parse a tile-set specification
    ///
    /// # Errors
    ///
    /// Returns an error if the specification contains no forms, a form's
    /// length has no topology or disagrees with the first form, a form uses
    /// a symbol outside the standard alphabet, or a named option is unknown
    /// or malformed.
    pub fn parse(text: &str) -> Result<Self> {
        let mut draft = Draft::default();

        for token in text.split_whitespace() {
            if let Some((key, value)) = token.split_once('=') {
                let parser = OPTION_PARSERS
                    .iter()
                    .find(|parser| parser.key == key)
                    .ok_or_else(|| AssemblyError::UnknownOption {
                        option: key.to_string(),
                    })?;
                (parser.apply)(&mut draft, value)?;
            } else {
                draft.raw_forms.push(token.to_string());
            }
        }

        if draft.raw_forms.is_empty() {
            return Err(AssemblyError::EmptyTileSet);
        }

        let alphabet = Alphabet::standard();
        let mut forms = Vec::with_capacity(draft.raw_forms.len());
        for (position, raw) in draft.raw_forms.iter().enumerate() {
            forms.push(parse_form(raw, position + 1, &alphabet)?);
        }

        let edge_count = forms.first().map_or(0, |form| form.edges.len());
        let topology = Topology::for_edge_count(edge_count)
            .ok_or(AssemblyError::UnsupportedEdgeCount { length: edge_count })?;

        for (position, form) in forms.iter().enumerate() {
            if form.edges.len() != topology.edge_count() {
                return Err(AssemblyError::FormLength {
                    index: position + 1,
                    form: String::from_utf8_lossy(&form.edges).into_owned(),
                    expected: topology.edge_count(),
                });
            }
        }

        Ok(Self {
            name: draft.name,
            width: draft.width,
            height: draft.height,
            forms,
            topology,
            alphabet,
        })
    }

    /// Look up a catalogue entry and parse it
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the entry fails to
    /// parse (the catalogue is fixed, so the latter indicates a programming
    /// mistake rather than user input).
    pub fn from_catalogue(index: usize) -> Result<Self> {
        let entry = crate::io::configuration::CATALOGUE.get(index).ok_or(
            AssemblyError::CatalogueIndex {
                index,
                size: crate::io::configuration::CATALOGUE.len(),
            },
        )?;
        Self::parse(entry)
    }
}

/// Parse one form token: symbols, optional `@weight`, ignored `/suffix`
fn parse_form(token: &str, index: usize, alphabet: &Alphabet) -> Result<BaseForm> {
    let without_suffix = token.split('/').next().unwrap_or(token);

    let (symbols, weight) = match without_suffix.split_once('@') {
        Some((symbols, count)) => {
            let weight =
                count
                    .parse::<u32>()
                    .map_err(|parse_error| AssemblyError::InvalidOption {
                        option: "@weight".to_string(),
                        value: count.to_string(),
                        reason: parse_error.to_string(),
                    })?;
            (symbols, f64::from(weight))
        }
        None => (without_suffix, 1.0),
    };

    for symbol in symbols.bytes() {
        if !alphabet.is_edge(symbol) {
            return Err(AssemblyError::UnknownEdgeSymbol {
                index,
                form: symbols.to_string(),
                symbol: symbol as char,
            });
        }
    }

    Ok(BaseForm {
        edges: symbols.bytes().collect(),
        weight,
    })
}
