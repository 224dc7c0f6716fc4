//! Type classification by canonical name
//!
//! A single immutable table maps standard-library type names to the semantic
//! bucket the field documenter cares about. Classification never looks at a
//! class's structure; enums are the one bucket that needs a resolved class and
//! are handled by the [`TypeResolver`](crate::model::TypeResolver).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::simple_name;

/// Semantic bucket of a type name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCategory {
    Character,
    Numeric,
    Boolean,
    Temporal,
    Collection,
}

impl TypeCategory {
    /// Categories documented as a single leaf without looking inside the type
    pub fn is_common_leaf(self) -> bool {
        !matches!(self, TypeCategory::Collection)
    }
}

#[derive(Debug, Clone, Copy)]
enum TypePattern {
    Exact(&'static str),
    /// Matches every qualified name under a package
    Prefix(&'static str),
}

impl TypePattern {
    fn matches(self, type_name: &str) -> bool {
        match self {
            TypePattern::Exact(entry) => {
                entry == type_name || (!type_name.contains('.') && simple_name(entry) == type_name)
            }
            TypePattern::Prefix(prefix) => type_name.starts_with(prefix),
        }
    }
}

use TypeCategory::*;
use TypePattern::*;

static TYPE_TABLE: &[(TypePattern, TypeCategory)] = &[
    (Exact("char"), Character),
    (Exact("java.lang.Character"), Character),
    (Exact("java.lang.String"), Character),
    (Exact("java.lang.CharSequence"), Character),
    (Exact("java.util.UUID"), Character),
    (Exact("byte"), Numeric),
    (Exact("short"), Numeric),
    (Exact("int"), Numeric),
    (Exact("long"), Numeric),
    (Exact("float"), Numeric),
    (Exact("double"), Numeric),
    (Exact("java.lang.Byte"), Numeric),
    (Exact("java.lang.Short"), Numeric),
    (Exact("java.lang.Integer"), Numeric),
    (Exact("java.lang.Long"), Numeric),
    (Exact("java.lang.Float"), Numeric),
    (Exact("java.lang.Double"), Numeric),
    (Exact("java.lang.Number"), Numeric),
    (Exact("java.math.BigDecimal"), Numeric),
    (Exact("java.math.BigInteger"), Numeric),
    (Exact("java.util.concurrent.atomic.AtomicInteger"), Numeric),
    (Exact("java.util.concurrent.atomic.AtomicLong"), Numeric),
    (Exact("boolean"), Boolean),
    (Exact("java.lang.Boolean"), Boolean),
    (Exact("java.util.concurrent.atomic.AtomicBoolean"), Boolean),
    (Prefix("java.time."), Temporal),
    (Exact("java.time.LocalDate"), Temporal),
    (Exact("java.time.LocalDateTime"), Temporal),
    (Exact("java.time.LocalTime"), Temporal),
    (Exact("java.time.Instant"), Temporal),
    (Exact("java.time.ZonedDateTime"), Temporal),
    (Exact("java.time.OffsetDateTime"), Temporal),
    (Exact("java.time.OffsetTime"), Temporal),
    (Exact("java.time.YearMonth"), Temporal),
    (Exact("java.time.Year"), Temporal),
    (Exact("java.time.MonthDay"), Temporal),
    (Exact("java.time.Duration"), Temporal),
    (Exact("java.time.Period"), Temporal),
    (Exact("java.util.Date"), Temporal),
    (Exact("java.util.Calendar"), Temporal),
    (Exact("java.sql.Date"), Temporal),
    (Exact("java.sql.Timestamp"), Temporal),
    (Exact("java.sql.Time"), Temporal),
    (Exact("java.lang.Iterable"), Collection),
    (Exact("java.util.Collection"), Collection),
    (Exact("java.util.List"), Collection),
    (Exact("java.util.ArrayList"), Collection),
    (Exact("java.util.LinkedList"), Collection),
    (Exact("java.util.Set"), Collection),
    (Exact("java.util.HashSet"), Collection),
    (Exact("java.util.LinkedHashSet"), Collection),
    (Exact("java.util.TreeSet"), Collection),
    (Exact("java.util.SortedSet"), Collection),
    (Exact("java.util.NavigableSet"), Collection),
    (Exact("java.util.Queue"), Collection),
    (Exact("java.util.Deque"), Collection),
    (Exact("java.util.ArrayDeque"), Collection),
];

/// Bucket for a canonical or simple type name; generic arguments are ignored
pub fn classify(type_name: &str) -> Option<TypeCategory> {
    let erased = type_name.split('<').next().unwrap_or(type_name).trim();
    if erased.is_empty() {
        return None;
    }
    TYPE_TABLE
        .iter()
        .find(|(pattern, _)| pattern.matches(erased))
        .map(|&(_, category)| category)
}

pub fn is_character(type_name: &str) -> bool {
    classify(type_name) == Some(TypeCategory::Character)
}

pub fn is_numeric(type_name: &str) -> bool {
    classify(type_name) == Some(TypeCategory::Numeric)
}

pub fn is_boolean(type_name: &str) -> bool {
    classify(type_name) == Some(TypeCategory::Boolean)
}

pub fn is_temporal(type_name: &str) -> bool {
    classify(type_name) == Some(TypeCategory::Temporal)
}

pub fn is_collection(type_name: &str) -> bool {
    classify(type_name) == Some(TypeCategory::Collection)
}

/// Character, numeric, boolean or temporal
pub fn is_common_leaf(type_name: &str) -> bool {
    classify(type_name).is_some_and(TypeCategory::is_common_leaf)
}

/// REST Docs `JsonFieldType` constant for a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JsonFieldType {
    Number,
    Boolean,
    String,
}

impl JsonFieldType {
    /// Numeric and boolean names map to their JSON types; everything else is a string
    pub fn for_type_name(type_name: &str) -> Self {
        match classify(type_name) {
            Some(TypeCategory::Numeric) => JsonFieldType::Number,
            Some(TypeCategory::Boolean) => JsonFieldType::Boolean,
            _ => JsonFieldType::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonFieldType::Number => "NUMBER",
            JsonFieldType::Boolean => "BOOLEAN",
            JsonFieldType::String => "STRING",
        }
    }
}

impl fmt::Display for JsonFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
