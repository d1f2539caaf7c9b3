//! Built-in converter tables.
//!
//! Each [`Profile`] owns an immutable default table built once on first use.
//! Dispatchers copy the table they start from, so overrides installed on one
//! dispatcher are never seen by another.

use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::node::TypeKind;

use super::finalize::DRAFT4;
use super::traits::TypeConverter;
use super::types::{
    BaseKeywords, DecimalPattern, FixedFormat, Items, KindConverter, Properties, RequiredMinLength,
};
use super::validators::{
    convert_enum, convert_range, convert_regex, LengthConverter, OneOfConverter,
    ValidatorDispatcher,
};

/// Mapping from node kind to the converter responsible for it.
pub type ConverterTable = IndexMap<TypeKind, Arc<dyn TypeConverter>>;

/// A family of default converters plus the output conventions that go with
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// JSON Schema draft-04 with nullable unions and implicit `minLength`.
    #[default]
    Draft4,
    /// Draft-04 that also renders `Decimal` and `Money` as numeric strings.
    Draft4DecimalString,
    /// Swagger 2.0 schema objects: definitions hoisted, no dialect stamp.
    Swagger2,
}

static DRAFT4_TABLE: Lazy<ConverterTable> = Lazy::new(draft4_table);
static DRAFT4_DECIMAL_STRING_TABLE: Lazy<ConverterTable> = Lazy::new(draft4_decimal_string_table);
static SWAGGER2_TABLE: Lazy<ConverterTable> = Lazy::new(swagger2_table);

impl Profile {
    /// Returns the profile's shared default table.
    pub fn converters(self) -> &'static ConverterTable {
        match self {
            Profile::Draft4 => &DRAFT4_TABLE,
            Profile::Draft4DecimalString => &DRAFT4_DECIMAL_STRING_TABLE,
            Profile::Swagger2 => &SWAGGER2_TABLE,
        }
    }

    /// Returns the dialect stamped on finished documents, if any.
    pub fn dialect(self) -> Option<&'static str> {
        match self {
            Profile::Draft4 | Profile::Draft4DecimalString => Some(DRAFT4),
            Profile::Swagger2 => None,
        }
    }

    /// Returns whether objects are hoisted into `definitions` by default.
    pub fn extracts_definitions(self) -> bool {
        matches!(self, Profile::Swagger2)
    }
}

fn entry(converter: KindConverter) -> Arc<dyn TypeConverter> {
    Arc::new(converter)
}

fn draft4_string_validators() -> ValidatorDispatcher {
    ValidatorDispatcher::new()
        .with(LengthConverter::string())
        .with(convert_regex)
        .with(OneOfConverter::string())
}

fn draft4_string(format: Option<&'static str>) -> KindConverter {
    let converter = KindConverter::new("string")
        .with(BaseKeywords::draft4())
        .with(RequiredMinLength)
        .with(draft4_string_validators());
    match format {
        Some(format) => converter.with(FixedFormat(format)),
        None => converter,
    }
}

fn draft4_number(type_name: &'static str) -> KindConverter {
    KindConverter::new(type_name)
        .with(BaseKeywords::draft4())
        .with(
            ValidatorDispatcher::new()
                .with(convert_range)
                .with(OneOfConverter::numeric()),
        )
}

fn draft4_decimal(pattern: DecimalPattern) -> KindConverter {
    KindConverter::new("string")
        .with(BaseKeywords::draft4())
        .with(RequiredMinLength)
        .with(pattern)
        .with(draft4_string_validators())
}

fn draft4_table() -> ConverterTable {
    let mut table = ConverterTable::new();
    table.insert(
        TypeKind::Boolean,
        entry(KindConverter::new("boolean").with(BaseKeywords::draft4())),
    );
    table.insert(TypeKind::Date, entry(draft4_string(Some("date"))));
    table.insert(TypeKind::DateTime, entry(draft4_string(Some("date-time"))));
    table.insert(TypeKind::Number, entry(draft4_number("number")));
    table.insert(TypeKind::Integer, entry(draft4_number("integer")));
    table.insert(
        TypeKind::Object,
        entry(
            KindConverter::new("object")
                .with(BaseKeywords::draft4())
                .with(Properties),
        ),
    );
    table.insert(
        TypeKind::Array,
        entry(
            KindConverter::new("array")
                .with(BaseKeywords::draft4())
                .with(ValidatorDispatcher::new().with(LengthConverter::array()))
                .with(Items),
        ),
    );
    table.insert(TypeKind::String, entry(draft4_string(None)));
    table.insert(TypeKind::Time, entry(draft4_string(Some("time"))));
    table
}

fn draft4_decimal_string_table() -> ConverterTable {
    let mut table = draft4_table();
    table.insert(TypeKind::Decimal, entry(draft4_decimal(DecimalPattern::new())));
    table.insert(
        TypeKind::Money,
        entry(draft4_decimal(DecimalPattern::with_default_scale(2))),
    );
    table
}

fn swagger2_string(format: Option<&'static str>) -> KindConverter {
    let converter = KindConverter::new("string").with(BaseKeywords::plain());
    match format {
        Some(format) => converter.with(FixedFormat(format)),
        None => converter.with(
            ValidatorDispatcher::new()
                .with(LengthConverter::string())
                .with(convert_regex)
                .with(convert_enum),
        ),
    }
}

fn swagger2_number(type_name: &'static str) -> KindConverter {
    KindConverter::new(type_name)
        .with(BaseKeywords::plain())
        .with(
            ValidatorDispatcher::new()
                .with(convert_range)
                .with(convert_enum),
        )
}

fn swagger2_table() -> ConverterTable {
    let mut table = ConverterTable::new();
    table.insert(
        TypeKind::Boolean,
        entry(KindConverter::new("boolean").with(BaseKeywords::plain())),
    );
    table.insert(TypeKind::Date, entry(swagger2_string(Some("date"))));
    table.insert(TypeKind::DateTime, entry(swagger2_string(Some("date-time"))));
    table.insert(TypeKind::Number, entry(swagger2_number("number")));
    table.insert(TypeKind::Integer, entry(swagger2_number("integer")));
    table.insert(
        TypeKind::Object,
        entry(
            KindConverter::new("object")
                .with(BaseKeywords::plain())
                .with(Properties),
        ),
    );
    table.insert(
        TypeKind::Array,
        entry(
            KindConverter::new("array")
                .with(BaseKeywords::plain())
                .with(ValidatorDispatcher::new().with(LengthConverter::array()))
                .with(Items),
        ),
    );
    table.insert(TypeKind::String, entry(swagger2_string(None)));
    table.insert(TypeKind::Time, entry(swagger2_string(Some("time"))));
    table
}
