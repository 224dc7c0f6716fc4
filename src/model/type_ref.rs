//! Type references as the host's program model reports them
//!
//! A [`TypeRef`] is the declared type of a field, parameter or return value.
//! It round-trips through the Java-style canonical text used in snapshots,
//! e.g. `java.util.List<com.acme.Tag>` or `int[]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Primitive (non-class) types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    /// Keyword used for this primitive in source text
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }

    /// Look up a primitive by its keyword
    pub fn from_name(name: &str) -> Option<Self> {
        let primitive = match name {
            "boolean" => PrimitiveType::Boolean,
            "byte" => PrimitiveType::Byte,
            "char" => PrimitiveType::Char,
            "short" => PrimitiveType::Short,
            "int" => PrimitiveType::Int,
            "long" => PrimitiveType::Long,
            "float" => PrimitiveType::Float,
            "double" => PrimitiveType::Double,
            "void" => PrimitiveType::Void,
            _ => return None,
        };
        Some(primitive)
    }
}

/// Declared type of a field, parameter or return value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    Primitive(PrimitiveType),
    /// A class type with its (possibly empty) generic arguments
    Class {
        name: String,
        arguments: Vec<TypeRef>,
    },
    Array(Box<TypeRef>),
    /// An unbounded or lower-bounded wildcard (`?`, `? super T`)
    Wildcard,
}

impl TypeRef {
    pub fn primitive(primitive: PrimitiveType) -> Self {
        TypeRef::Primitive(primitive)
    }

    /// A non-generic class type
    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// A parameterized class type
    pub fn generic(name: impl Into<String>, arguments: Vec<TypeRef>) -> Self {
        TypeRef::Class {
            name: name.into(),
            arguments,
        }
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    /// Name with generic arguments erased (`java.util.List` for `java.util.List<X>`)
    pub fn erased_name(&self) -> String {
        match self {
            TypeRef::Primitive(p) => p.name().to_string(),
            TypeRef::Class { name, .. } => name.clone(),
            TypeRef::Array(element) => format!("{}[]", element.erased_name()),
            TypeRef::Wildcard => "?".to_string(),
        }
    }

    /// Generic arguments of a class type; empty for everything else
    pub fn arguments(&self) -> &[TypeRef] {
        match self {
            TypeRef::Class { arguments, .. } => arguments,
            _ => &[],
        }
    }

    /// `void` and `java.lang.Void` both mean "no payload"
    pub fn is_void(&self) -> bool {
        match self {
            TypeRef::Primitive(PrimitiveType::Void) => true,
            TypeRef::Class { name, .. } => name == "java.lang.Void" || name == "Void",
            _ => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => write!(f, "{}", p.name()),
            TypeRef::Class { name, arguments } => {
                write!(f, "{name}")?;
                if !arguments.is_empty() {
                    write!(f, "<")?;
                    for (i, argument) in arguments.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{argument}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeRef::Array(element) => write!(f, "{element}[]"),
            TypeRef::Wildcard => write!(f, "?"),
        }
    }
}

/// Errors raised while parsing type text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("Empty type reference")]
    Empty,

    #[error("Unexpected character '{found}' at offset {offset} in type '{input}'")]
    Unexpected {
        found: char,
        offset: usize,
        input: String,
    },

    #[error("Unexpected end of type '{0}'")]
    UnexpectedEnd(String),
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(TypeParseError::Empty);
        }

        let mut parser = TypeParser::new(s);
        let ty = parser.parse_type()?;
        parser.skip_whitespace();
        match parser.peek() {
            None => Ok(ty),
            Some(c) => Err(parser.unexpected(c)),
        }
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

/// Recursive-descent parser over Java-style type text
struct TypeParser<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn unexpected(&self, found: char) -> TypeParseError {
        TypeParseError::Unexpected {
            found,
            offset: self.pos,
            input: self.input.to_string(),
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TypeParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(TypeParseError::UnexpectedEnd(self.input.to_string())),
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef, TypeParseError> {
        self.skip_whitespace();
        let base = match self.peek() {
            None => return Err(TypeParseError::UnexpectedEnd(self.input.to_string())),
            Some('?') => {
                self.pos += 1;
                return self.parse_wildcard_bound();
            }
            Some(c) if is_identifier_start(c) => self.parse_named()?,
            Some(c) => return Err(self.unexpected(c)),
        };
        self.parse_dimensions(base)
    }

    /// `? extends T` reads as `T`; `?` and `? super T` stay wildcards
    fn parse_wildcard_bound(&mut self) -> Result<TypeRef, TypeParseError> {
        self.skip_whitespace();
        let start = self.pos;
        let keyword = self.read_identifier();
        match keyword.as_str() {
            "extends" => self.parse_type(),
            "super" => {
                self.parse_type()?;
                Ok(TypeRef::Wildcard)
            }
            _ => {
                self.pos = start;
                Ok(TypeRef::Wildcard)
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut identifier = String::new();
        while let Some(c) = self.peek() {
            if identifier.is_empty() && !is_identifier_start(c) {
                break;
            }
            if !is_identifier_part(c) {
                break;
            }
            identifier.push(c);
            self.pos += 1;
        }
        identifier
    }

    fn parse_named(&mut self) -> Result<TypeRef, TypeParseError> {
        let mut name = self.read_identifier();
        while self.peek() == Some('.') && !self.at_varargs() {
            self.pos += 1;
            let segment = self.read_identifier();
            if segment.is_empty() {
                return match self.peek() {
                    Some(c) => Err(self.unexpected(c)),
                    None => Err(TypeParseError::UnexpectedEnd(self.input.to_string())),
                };
            }
            name.push('.');
            name.push_str(&segment);
        }

        self.skip_whitespace();
        let mut arguments = Vec::new();
        if self.peek() == Some('<') {
            self.pos += 1;
            self.skip_whitespace();
            if self.peek() == Some('>') {
                // diamond
                self.pos += 1;
            } else {
                loop {
                    arguments.push(self.parse_type()?);
                    self.skip_whitespace();
                    match self.peek() {
                        Some(',') => self.pos += 1,
                        Some('>') => {
                            self.pos += 1;
                            break;
                        }
                        Some(c) => return Err(self.unexpected(c)),
                        None => return Err(TypeParseError::UnexpectedEnd(self.input.to_string())),
                    }
                }
            }
        }

        if arguments.is_empty() {
            if let Some(primitive) = PrimitiveType::from_name(&name) {
                return Ok(TypeRef::Primitive(primitive));
            }
        }
        Ok(TypeRef::Class { name, arguments })
    }

    fn at_varargs(&self) -> bool {
        self.chars[self.pos..].starts_with(&['.', '.', '.'])
    }

    fn parse_dimensions(&mut self, mut ty: TypeRef) -> Result<TypeRef, TypeParseError> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('[') => {
                    self.pos += 1;
                    self.expect(']')?;
                    ty = TypeRef::array(ty);
                }
                Some('.') if self.at_varargs() => {
                    self.pos += 3;
                    ty = TypeRef::array(ty);
                }
                _ => return Ok(ty),
            }
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
