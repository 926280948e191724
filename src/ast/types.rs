//! Primitive types of the language.
//!
//! There are no aggregate types yet. The merge rule below decides whether
//! two types can stand in for one combined type.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Char,
    String,
    Bool,
    Void,
}

/// Groups of distinct types that merge, and the type they merge into.
/// Every Int value is representable as a Float.
const MERGE_RULES: &[(&[Type], Type)] = &[(&[Type::Int, Type::Float], Type::Float)];

impl Type {
    /// Returns the type able to represent values of both `self` and `other`.
    ///
    /// Identical types merge to themselves, Int and Float merge to Float,
    /// and every other pair fails.
    pub fn merge(self, other: Type) -> Option<Type> {
        if self == other {
            return Some(self);
        }

        MERGE_RULES
            .iter()
            .find(|(members, _)| members.contains(&self) && members.contains(&other))
            .map(|(_, merged)| *merged)
    }

    pub fn is_compatible_with(&self, other: &Type) -> bool {
        self.merge(*other).is_some()
    }

    /// Int or Float, the operand types of prefix `+` and `-`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
