// crates/phoebusgen/src/error.rs

use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PhoebusError>;

/// Errors that can occur while loading definitions or building a display.
#[derive(Debug)]
pub enum PhoebusError {
    /// An underlying I/O error (e.g., writing a `.bob` file).
    Io(io::Error),

    /// A configured definition file could not be read.
    DefinitionFile { path: PathBuf, source: io::Error },

    /// An error from the underlying `quick-xml` writer.
    XmlWriting(XmlError),

    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// The serialized document was not valid UTF-8.
    Utf8(FromUtf8Error),

    /// A line of a color or font definition file could not be understood.
    InvalidDefinition { line: usize, reason: String },

    /// An alias entry referenced a name that was not defined above it.
    UndefinedAlias {
        line: usize,
        name: String,
        target: String,
    },

    /// The requested color name is not in the loaded color table.
    UnknownColor(String),

    /// The requested font name is not in the loaded font table.
    UnknownFont(String),

    /// A color component was not an integer between 0 and 255.
    ///
    /// `line` is set when the component came from a definition file.
    InvalidColorComponent {
        component: &'static str,
        value: String,
        line: Option<usize>,
    },

    /// A property value did not have the expected primitive type.
    InvalidProperty {
        property: String,
        value: String,
        expected: &'static str,
    },

    /// A string did not name a member of an option set (alignment, line style, ...).
    InvalidOption { option: &'static str, value: String },

    /// A macro name is not usable as an XML element name.
    InvalidMacroName(String),

    /// A property tag is not usable as an XML element name.
    InvalidTag(String),

    /// A tabs widget has no tab with the given name.
    UnknownTab(String),
}

impl From<io::Error> for PhoebusError {
    fn from(e: io::Error) -> Self {
        PhoebusError::Io(e)
    }
}

impl From<XmlError> for PhoebusError {
    fn from(e: XmlError) -> Self {
        PhoebusError::XmlWriting(e)
    }
}

impl From<DeError> for PhoebusError {
    fn from(e: DeError) -> Self {
        PhoebusError::XmlParsing(e)
    }
}

impl From<FromUtf8Error> for PhoebusError {
    fn from(e: FromUtf8Error) -> Self {
        PhoebusError::Utf8(e)
    }
}

impl fmt::Display for PhoebusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoebusError::Io(e) => write!(f, "I/O error: {}", e),
            PhoebusError::DefinitionFile { path, source } => {
                write!(f, "Cannot read definition file {}: {}", path.display(), source)
            }
            PhoebusError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            PhoebusError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            PhoebusError::Utf8(e) => write!(f, "Generated XML is not valid UTF-8: {}", e),
            PhoebusError::InvalidDefinition { line, reason } => {
                write!(f, "Invalid definition on line {}: {}", line, reason)
            }
            PhoebusError::UndefinedAlias { line, name, target } => write!(
                f,
                "Line {}: '{}' aliases '{}', which is not defined above it",
                line, name, target
            ),
            PhoebusError::UnknownColor(name) => write!(f, "Color name is undefined: {}", name),
            PhoebusError::UnknownFont(name) => write!(f, "Font name is undefined: {}", name),
            PhoebusError::InvalidColorComponent {
                component,
                value,
                line,
            } => {
                if let Some(line) = line {
                    write!(f, "Line {}: ", line)?;
                }
                write!(
                    f,
                    "Color component {} must be an integer between 0 and 255, not: {}",
                    component, value
                )
            }
            PhoebusError::InvalidProperty {
                property,
                value,
                expected,
            } => write!(f, "Property {} must be {}! Not: {}", property, expected, value),
            PhoebusError::InvalidOption { option, value } => {
                write!(f, "'{}' is not a valid {}", value, option)
            }
            PhoebusError::InvalidMacroName(name) => {
                write!(f, "Macro name is not a valid XML element name: {:?}", name)
            }
            PhoebusError::InvalidTag(tag) => {
                write!(f, "Property tag is not a valid XML element name: {:?}", tag)
            }
            PhoebusError::UnknownTab(name) => write!(f, "No tab named: {}", name),
        }
    }
}

impl std::error::Error for PhoebusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhoebusError::Io(e) => Some(e),
            PhoebusError::DefinitionFile { source, .. } => Some(source),
            PhoebusError::XmlWriting(e) => Some(e),
            PhoebusError::XmlParsing(e) => Some(e),
            PhoebusError::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhoebusError;
    use crate::outline::DisplayOutline;
    use std::error::Error;

    #[test]
    fn test_from_de_error() {
        let xml_err =
            quick_xml::de::from_str::<DisplayOutline>("<display><width>wide</width></display>")
                .unwrap_err();
        let err: PhoebusError = xml_err.into();
        assert!(matches!(err, PhoebusError::XmlParsing(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PhoebusError = io_err.into();
        assert!(matches!(err, PhoebusError::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xFF, 0xFE]).unwrap_err();
        let err: PhoebusError = utf8_err.into();
        assert!(matches!(err, PhoebusError::Utf8(_)));
    }

    #[test]
    fn test_display_messages() {
        let err = PhoebusError::UndefinedAlias {
            line: 3,
            name: "Alarm".to_string(),
            target: "MAJOR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 3: 'Alarm' aliases 'MAJOR', which is not defined above it"
        );

        let err = PhoebusError::InvalidProperty {
            property: "x".to_string(),
            value: "abc".to_string(),
            expected: "an integer",
        };
        assert_eq!(err.to_string(), "Property x must be an integer! Not: abc");
        assert!(err.source().is_none());

        let err = PhoebusError::InvalidColorComponent {
            component: "blue",
            value: "999".to_string(),
            line: Some(4),
        };
        assert_eq!(
            err.to_string(),
            "Line 4: Color component blue must be an integer between 0 and 255, not: 999"
        );
    }
}
