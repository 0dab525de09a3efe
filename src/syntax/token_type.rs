use std::fmt;

macro_rules! define_tokens {
    (
        keywords { $($kw_name:ident => $kw_str:literal),* $(,)? }
        symbols { $($sym_name:ident => $sym_str:literal),* $(,)? }
        literals { $($lit_name:ident),* $(,)? }
    ) => {
        /// Every token kind the lexer can produce, in display order.
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenType {
            $($kw_name,)*
            $($sym_name,)*
            $($lit_name,)*
        }

        impl TokenType {
            pub const ALL: &'static [TokenType] = &[
                $(TokenType::$kw_name,)*
                $(TokenType::$sym_name,)*
                $(TokenType::$lit_name,)*
            ];

            pub const COUNT: usize = TokenType::ALL.len();

            pub const fn as_usize(self) -> usize {
                self as usize
            }

            /// Name printed in the token stream, e.g. `SemiColon`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenType::$kw_name => stringify!($kw_name),)*
                    $(TokenType::$sym_name => stringify!($sym_name),)*
                    $(TokenType::$lit_name => stringify!($lit_name),)*
                }
            }

            /// Fixed spelling of keywords and symbols; `None` for literals.
            pub const fn spelling(self) -> Option<&'static str> {
                match self {
                    $(TokenType::$kw_name => Some($kw_str),)*
                    $(TokenType::$sym_name => Some($sym_str),)*
                    _ => None,
                }
            }

            pub const fn is_keyword(self) -> bool {
                matches!(self, $(TokenType::$kw_name)|*)
            }

            pub const fn is_symbol(self) -> bool {
                matches!(self, $(TokenType::$sym_name)|*)
            }
        }

        /// Maps a lowercased word to its keyword kind, or `Identifier`.
        pub fn lookup_ident(word: &str) -> TokenType {
            match word {
                $($kw_str => TokenType::$kw_name,)*
                _ => TokenType::Identifier,
            }
        }
    };
}

define_tokens! {
    keywords {
        // Structure
        Var   => "var",
        If    => "if",
        Then  => "then",
        Else  => "else",
        While => "while",
        Do    => "do",
        Begin => "begin",
        End   => "end",

        // Logical operators
        And => "and",
        Or  => "or",

        // Types
        Integer => "integer",
        Longint => "longint",
        Bool    => "bool",
        Real    => "real",
    }

    symbols {
        // Operators
        Add    => "+",
        Sub    => "-",
        Mul    => "*",
        Div    => "/",
        Assign => ":=",
        Lt     => "<",
        Gt     => ">",
        Ne     => "<>",
        Ge     => ">=",
        Le     => "<=",
        Eq     => "==",

        // Delimiters
        Colon     => ":",
        LParen    => "(",
        RParen    => ")",
        Comma     => ",",
        SemiColon => ";",
    }

    literals {
        Identifier,
        IntLiteral,
    }
}

impl TokenType {
    /// Type names accepted after `:` in a declaration group.
    pub const fn is_type_name(self) -> bool {
        matches!(
            self,
            TokenType::Integer | TokenType::Longint | TokenType::Bool | TokenType::Real
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
