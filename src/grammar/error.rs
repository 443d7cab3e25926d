use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedGrammar {
    #[error("the grammar has no nonterminal symbols")]
    NoNonTerminals,
    #[error("the grammar has no terminal symbols")]
    NoTerminals,
    #[error("start symbol '{0}' is not a declared nonterminal")]
    UndeclaredStart(String),
    #[error("'{0}' is declared as both a nonterminal and a terminal symbol")]
    TerminalNonTerminal(String),
    #[error("'{0}' has productions but is not a declared nonterminal")]
    ProductionsNotNonTerminal(String),
    #[error("'{0}' appears in a production of '{1}' but is not a declared terminal")]
    UndeclaredTerminal(String, String),
    #[error("'{0}' appears in a production of '{1}' but is not a declared nonterminal")]
    UndeclaredNonTerminal(String, String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("too many \"->\"")]
    TooManyArrows,
    #[error("empty left side")]
    EmptyLeft,
    #[error("left side contains whitespace")]
    WhitespaceInLeft,
    #[error("cannot find left side")]
    MissingLeft,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("malformed grammar: {0}")]
    Malformed(#[from] MalformedGrammar),
    #[error("Line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    /// A freshly minted nonterminal clashed with a declared symbol. Minting
    /// always checks the symbol table first, so this is a bug, not bad input.
    #[error("fresh nonterminal '{0}' collides with an existing symbol")]
    NameCollision(String),
    #[error("the grammar is not in Chomsky normal form")]
    NotInCnf,
    #[error("the start symbol derives no terminal string")]
    EmptyLanguage,
}
