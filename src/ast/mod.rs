/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed set of expression nodes
/// - expressions: The node structures for each expression kind
/// - types: Primitive types and the type merge rule
pub mod ast;
pub mod expressions;
pub mod types;
