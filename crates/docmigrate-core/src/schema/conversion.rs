//! Which field type changes can be expressed as a single cast.
//!
//! The table is directional: a rule for `string → number` says nothing about
//! `number → string`. Pairs that are present but rejected carry the reason
//! shown to the caller. Converting a type to itself is refused before the
//! table is consulted, so the table holds no self-conversion entries.

use super::FieldType;
use crate::{stmt::Conversion, Error, Result};

/// Outcome of a conversion table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Convert(Conversion),
    Reject(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRule {
    pub from: FieldType,
    pub to: FieldType,
    pub rule: Rule,
}

const INTERCHANGEABLE: &str = "Dates and strings are already interchangeable";

pub const RULES: &[ConversionRule] = &[
    rule(FieldType::Date, FieldType::String, Rule::Reject(INTERCHANGEABLE)),
    rule(FieldType::Date, FieldType::Number, Rule::Reject("not supported")),
    rule(FieldType::Boolean, FieldType::String, Rule::Convert(Conversion::ToString)),
    rule(
        FieldType::Boolean,
        FieldType::Number,
        Rule::Reject("Converting booleans to numbers doesn't really make sense"),
    ),
    rule(FieldType::String, FieldType::Date, Rule::Reject(INTERCHANGEABLE)),
    rule(FieldType::String, FieldType::Boolean, Rule::Convert(Conversion::ToBoolean)),
    rule(FieldType::String, FieldType::Number, Rule::Convert(Conversion::ToNumber)),
    rule(FieldType::Number, FieldType::String, Rule::Convert(Conversion::ToString)),
    rule(FieldType::Number, FieldType::Boolean, Rule::Convert(Conversion::ToBoolean)),
    rule(FieldType::Number, FieldType::Date, Rule::Reject("not supported")),
];

const fn rule(from: FieldType, to: FieldType, rule: Rule) -> ConversionRule {
    ConversionRule { from, to, rule }
}

/// Returns `true` if the table has any entry starting at `from`.
pub fn has_conversions_from(from: FieldType) -> bool {
    RULES.iter().any(|entry| entry.from == from)
}

/// Looks up the table entry for `from → to`.
pub fn lookup(from: FieldType, to: FieldType) -> Option<Rule> {
    RULES
        .iter()
        .find(|entry| entry.from == from && entry.to == to)
        .map(|entry| entry.rule)
}

/// Resolves a type change given by type names into the cast to apply.
///
/// Checks, in order: converting a type to itself, a source type with no
/// conversions, a pair with no entry, and a pair the table rejects.
pub fn resolve(from: &str, to: &str) -> Result<Conversion> {
    if from == to {
        return Err(Error::conversion_to_self(from));
    }

    let source = FieldType::from_name(from).filter(|ty| has_conversions_from(*ty));
    let Some(source) = source else {
        return Err(Error::conversion_unknown_source(from, to));
    };

    let target = FieldType::from_name(to);
    if target == Some(source) {
        return Err(Error::conversion_to_self(from));
    }

    match target.and_then(|target| lookup(source, target)) {
        Some(Rule::Convert(conversion)) => Ok(conversion),
        Some(Rule::Reject(reason)) => Err(Error::conversion_rejected(from, to, reason)),
        None => Err(Error::conversion_no_rule(from, to)),
    }
}
