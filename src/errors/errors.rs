use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Internal errors signal a bug in the front end rather than a problem
    /// with the input program.
    pub fn is_internal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::InternalError { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::MisplacedBranch { .. } => "MisplacedBranch",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnsupportedIdentifier { .. } => "UnsupportedIdentifier",
            ErrorImpl::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            ErrorImpl::IncompatibleTypes { .. } => "IncompatibleTypes",
            ErrorImpl::UnaryTypeMismatch { .. } => "UnaryTypeMismatch",
            ErrorImpl::NonBooleanCondition { .. } => "NonBooleanCondition",
            ErrorImpl::BranchTypeMismatch { .. } => "BranchTypeMismatch",
            ErrorImpl::InternalError { .. } => "InternalError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, an expression cannot start here",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::ExpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::MisplacedBranch { keyword } => ErrorTip::Suggestion(format!(
                "`{}` must follow the body of an `if` or `elsif`",
                keyword
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep, split this one up",
                limit
            )),
            ErrorImpl::UnsupportedIdentifier { name } => ErrorTip::Suggestion(format!(
                "Identifier `{}` cannot be resolved, variables are not supported yet",
                name
            )),
            ErrorImpl::OperandTypeMismatch {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` does not support operands `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::IncompatibleTypes {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Types `{}` and `{}` cannot be combined by `{}`",
                left, right, operator
            )),
            ErrorImpl::UnaryTypeMismatch { operator, operand } => ErrorTip::Suggestion(format!(
                "Operator `{}` does not support operand `{}`",
                operator, operand
            )),
            ErrorImpl::NonBooleanCondition { received } => ErrorTip::Suggestion(format!(
                "Condition must be `Bool`, received `{}`",
                received
            )),
            ErrorImpl::BranchTypeMismatch {
                then_type,
                else_type,
            } => ErrorTip::Suggestion(format!(
                "`if` branch is `{}` but `else` branch is `{}`",
                then_type, else_type
            )),
            ErrorImpl::InternalError { message } => {
                ErrorTip::Suggestion(format!("Internal error: {}", message))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected {expected:?}, received {received:?}")]
    ExpectedToken { expected: String, received: String },
    #[error("{keyword:?} outside of an if expression")]
    MisplacedBranch { keyword: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("identifier resolution unsupported: {name:?}")]
    UnsupportedIdentifier { name: String },
    #[error("operator {operator:?} does not support types {left} and {right}")]
    OperandTypeMismatch {
        operator: String,
        left: String,
        right: String,
    },
    #[error("types {left} and {right} are incompatible for operator {operator:?}")]
    IncompatibleTypes {
        operator: String,
        left: String,
        right: String,
    },
    #[error("operator {operator:?} does not support type {operand}")]
    UnaryTypeMismatch { operator: String, operand: String },
    #[error("condition must be boolean, received {received}")]
    NonBooleanCondition { received: String },
    #[error("if and else branches have different types: {then_type} and {else_type}")]
    BranchTypeMismatch { then_type: String, else_type: String },
    #[error("internal error: {message}")]
    InternalError { message: String },
}
