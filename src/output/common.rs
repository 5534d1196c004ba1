use crate::error::Error;

/// Indentation: the unit written once per depth level.
///
/// The renderer treats the unit as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indentation {
    unit: String,
}

impl Indentation {
    /// Indent with `width` spaces, or `width` tabs if `tab` is set.
    ///
    /// ```rust
    /// use h5pretty::output::Indentation;
    ///
    /// assert_eq!(Indentation::new(2, false).unwrap().unit(), "  ");
    /// assert_eq!(Indentation::new(1, true).unwrap().unit(), "\t");
    /// assert!(Indentation::new(0, false).is_err());
    /// ```
    pub fn new(width: i64, tab: bool) -> Result<Self, Error> {
        if width <= 0 {
            return Err(Error::Config(format!(
                "indent width must be positive, got {}",
                width
            )));
        }
        let c = if tab { "\t" } else { " " };
        let width = usize::try_from(width)
            .map_err(|_| Error::Config(format!("indent width {} is too large", width)))?;
        Ok(Indentation {
            unit: c.repeat(width),
        })
    }

    /// Use an arbitrary string as the indent unit.
    ///
    /// ```rust
    /// use h5pretty::output::Indentation;
    ///
    /// let indentation = Indentation::from_unit("| ");
    /// assert_eq!(indentation.pad(2), "| | ");
    /// assert_eq!(Indentation::from_unit("").pad(3), "");
    /// ```
    pub fn from_unit<S: Into<String>>(unit: S) -> Self {
        Indentation { unit: unit.into() }
    }

    /// The indent unit.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The indent unit repeated `depth` times.
    pub fn pad(&self, depth: usize) -> String {
        self.unit.repeat(depth)
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Indentation {
            unit: "    ".to_string(),
        }
    }
}

/// Parameters for pretty printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// The indent unit.
    pub indentation: Indentation,
    /// If the input is a fragment, render only the fragment and not the
    /// `<html>`, `<head>` and `<body>` elements the parser synthesized
    /// around it.
    pub unwrap_fragment: bool,
    /// Reproduce the parsed doctype instead of always writing
    /// `<!DOCTYPE html>`.
    pub preserve_doctype: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            indentation: Indentation::default(),
            unwrap_fragment: true,
            preserve_doctype: false,
        }
    }
}
