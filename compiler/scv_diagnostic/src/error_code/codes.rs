use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where the first digit names the phase:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E2xxx: semantic checks and emission
/// - E3xxx: file loading and writing
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character in source
    E0001,
    /// Source file too large to address
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token at top level
    E1001,
    /// Expected identifier
    E1002,
    /// Expected a specific token
    E1003,
    /// Requirement literal never closed
    E1004,
    /// Code block never closed
    E1005,
    /// Expected requirement literal
    E1006,

    // Semantic Errors (E2xxx)
    /// Type defined more than once
    E2001,
    /// Member type not defined
    E2002,
    /// Member named after a type
    E2003,
    /// Trait defined more than once
    E2004,
    /// Unknown trait in `is` clause
    E2005,
    /// Cyclic struct dependency
    E2006,
    /// Macro invoked with the wrong shape
    E2007,
    /// Macro argument names an unknown struct
    E2008,
    /// Unrecognized macro
    E2009,
    /// Macro used outside of the context it needs
    E2010,

    // I/O Errors (E3xxx)
    /// Required file could not be loaded
    E3001,
    /// Input file could not be read
    E3002,
    /// Output file could not be written
    E3003,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::E2010,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
        }
    }

    /// One-line explanation, shown by `scv --explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "the source contains a character the lexer does not recognize",
            ErrorCode::E0002 => "the source file is larger than 4 GiB and cannot be addressed",
            ErrorCode::E1001 => "a top-level item must start with `struct`, `trait` or `requires`",
            ErrorCode::E1002 => "an identifier was expected here",
            ErrorCode::E1003 => "a specific token (a brace, parenthesis or keyword) was expected here",
            ErrorCode::E1004 => "a requirement literal was opened with `\"` or `<` but never closed",
            ErrorCode::E1005 => "a `code { ... }` block reached the end of the file without its closing brace",
            ErrorCode::E1006 => "a `requires` clause expects literals such as \"header.hpp\" or <header.hpp>",
            ErrorCode::E2001 => "two structs share a name, or a struct is named after a primitive type",
            ErrorCode::E2002 => "a member's type is neither a primitive nor a declared struct",
            ErrorCode::E2003 => "a member cannot be named after a type",
            ErrorCode::E2004 => "two traits share a name",
            ErrorCode::E2005 => "a struct's `is` clause names a trait that is not declared",
            ErrorCode::E2006 => "a struct depends on itself, directly or through other structs",
            ErrorCode::E2007 => "a macro was invoked with the wrong number of arguments or without a required body",
            ErrorCode::E2008 => "a macro argument names a struct that is not declared",
            ErrorCode::E2009 => "the macro name is not one of `Type`, `Member` or `ForMemberIn`",
            ErrorCode::E2010 => "`@Member` is only meaningful inside a `@ForMemberIn` body",
            ErrorCode::E3001 => "a file named by a `requires` directive could not be loaded",
            ErrorCode::E3002 => "an input file could not be read",
            ErrorCode::E3003 => "the generated output could not be written",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_semantic_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_io_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
