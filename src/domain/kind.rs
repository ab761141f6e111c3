/// Node Kind Vocabulary
///
/// Normalizes the node categories produced by different parser adapters
/// into one closed enumeration. Tags are mapped once at ingestion; unknown
/// tags keep their raw text in `Other` so they can still serve as
/// embedding lookup keys.

use serde::{Deserialize, Serialize};

/// Normalized AST node category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AstKind {
    FunctionDecl,
    VarDecl,
    ParmDecl,
    FieldDecl,
    TypedefDecl,
    CallExpr,
    DeclRefExpr,
    MemberRefExpr,
    BinaryOperator,
    UnaryOperator,
    IntegerLiteral,
    FloatingLiteral,
    StringLiteral,
    CharacterLiteral,
    CompoundStmt,
    DeclStmt,
    IfStmt,
    ForStmt,
    WhileStmt,
    ReturnStmt,
    TypeRef,
    /// Vocabulary the mapping does not know, raw tag preserved.
    Other(String),
}

impl AstKind {
    /// Map a parser-adapter tag to its kind. Unknown tags are preserved.
    pub fn from_tag(tag: &str) -> AstKind {
        match tag {
            "FUNCTION_DECL" => AstKind::FunctionDecl,
            "VAR_DECL" => AstKind::VarDecl,
            "PARM_DECL" => AstKind::ParmDecl,
            "FIELD_DECL" => AstKind::FieldDecl,
            "TYPEDEF_DECL" => AstKind::TypedefDecl,
            "CALL_EXPR" => AstKind::CallExpr,
            "DECL_REF_EXPR" => AstKind::DeclRefExpr,
            "MEMBER_REF_EXPR" => AstKind::MemberRefExpr,
            "BINARY_OPERATOR" => AstKind::BinaryOperator,
            "UNARY_OPERATOR" => AstKind::UnaryOperator,
            "INTEGER_LITERAL" => AstKind::IntegerLiteral,
            "FLOATING_LITERAL" => AstKind::FloatingLiteral,
            "STRING_LITERAL" => AstKind::StringLiteral,
            "CHARACTER_LITERAL" => AstKind::CharacterLiteral,
            "COMPOUND_STMT" => AstKind::CompoundStmt,
            "DECL_STMT" => AstKind::DeclStmt,
            "IF_STMT" => AstKind::IfStmt,
            "FOR_STMT" => AstKind::ForStmt,
            "WHILE_STMT" => AstKind::WhileStmt,
            "RETURN_STMT" => AstKind::ReturnStmt,
            "TYPE_REF" => AstKind::TypeRef,
            other => AstKind::Other(other.to_string()),
        }
    }

    /// The normalized tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            AstKind::FunctionDecl => "FUNCTION_DECL",
            AstKind::VarDecl => "VAR_DECL",
            AstKind::ParmDecl => "PARM_DECL",
            AstKind::FieldDecl => "FIELD_DECL",
            AstKind::TypedefDecl => "TYPEDEF_DECL",
            AstKind::CallExpr => "CALL_EXPR",
            AstKind::DeclRefExpr => "DECL_REF_EXPR",
            AstKind::MemberRefExpr => "MEMBER_REF_EXPR",
            AstKind::BinaryOperator => "BINARY_OPERATOR",
            AstKind::UnaryOperator => "UNARY_OPERATOR",
            AstKind::IntegerLiteral => "INTEGER_LITERAL",
            AstKind::FloatingLiteral => "FLOATING_LITERAL",
            AstKind::StringLiteral => "STRING_LITERAL",
            AstKind::CharacterLiteral => "CHARACTER_LITERAL",
            AstKind::CompoundStmt => "COMPOUND_STMT",
            AstKind::DeclStmt => "DECL_STMT",
            AstKind::IfStmt => "IF_STMT",
            AstKind::ForStmt => "FOR_STMT",
            AstKind::WhileStmt => "WHILE_STMT",
            AstKind::ReturnStmt => "RETURN_STMT",
            AstKind::TypeRef => "TYPE_REF",
            AstKind::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for AstKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known() {
        assert_eq!(AstKind::from_tag("VAR_DECL"), AstKind::VarDecl);
        assert_eq!(AstKind::from_tag("FUNCTION_DECL"), AstKind::FunctionDecl);
        assert_eq!(AstKind::from_tag("CALL_EXPR"), AstKind::CallExpr);
    }

    #[test]
    fn test_from_tag_unknown_preserves_text() {
        let kind = AstKind::from_tag("LAMBDA_EXPR");
        assert_eq!(kind, AstKind::Other("LAMBDA_EXPR".to_string()));
        assert_eq!(kind.as_str(), "LAMBDA_EXPR");
    }

    #[test]
    fn test_tag_round_trip() {
        for tag in ["VAR_DECL", "FUNCTION_DECL", "CALL_EXPR", "IF_STMT", "TYPE_REF"] {
            assert_eq!(AstKind::from_tag(tag).as_str(), tag);
        }
    }
}
