//! Static lexical tables: reserved keywords and interval units.
//!
//! Both tables are closed enums resolved by a `match`, so lookups are
//! allocation-light and the sets can never change at runtime.

use core::fmt;

macro_rules! lexical_table {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum $name {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every entry of the table, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Looks up an entry by name (case-insensitive).
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                match s.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the canonical upper-case spelling.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

lexical_table! {
    /// Reserved words. An unquoted identifier whose upper-cased text is in
    /// this table scans as a keyword token.
    Keyword {
        Alias => "ALIAS",
        All => "ALL",
        And => "AND",
        As => "AS",
        Asc => "ASC",
        By => "BY",
        Case => "CASE",
        Cast => "CAST",
        Codec => "CODEC",
        Comment => "COMMENT",
        Create => "CREATE",
        Database => "DATABASE",
        Date => "DATE",
        Default => "DEFAULT",
        Desc => "DESC",
        Distinct => "DISTINCT",
        Drop => "DROP",
        Else => "ELSE",
        End => "END",
        Engine => "ENGINE",
        Extract => "EXTRACT",
        From => "FROM",
        Global => "GLOBAL",
        Group => "GROUP",
        Having => "HAVING",
        Ilike => "ILIKE",
        In => "IN",
        Insert => "INSERT",
        Interval => "INTERVAL",
        Into => "INTO",
        Is => "IS",
        Join => "JOIN",
        Like => "LIKE",
        Limit => "LIMIT",
        Materialized => "MATERIALIZED",
        Not => "NOT",
        Null => "NULL",
        Offset => "OFFSET",
        On => "ON",
        Or => "OR",
        Order => "ORDER",
        Partition => "PARTITION",
        Prewhere => "PREWHERE",
        Primary => "PRIMARY",
        Select => "SELECT",
        Settings => "SETTINGS",
        Table => "TABLE",
        Then => "THEN",
        Timestamp => "TIMESTAMP",
        Ttl => "TTL",
        Union => "UNION",
        Using => "USING",
        Values => "VALUES",
        View => "VIEW",
        When => "WHEN",
        Where => "WHERE",
        With => "WITH",
    }
}

lexical_table! {
    /// Time units accepted by `INTERVAL <expr> <unit>` and
    /// `EXTRACT(<unit> FROM <expr>)`.
    IntervalUnit {
        Nanosecond => "NANOSECOND",
        Microsecond => "MICROSECOND",
        Millisecond => "MILLISECOND",
        Second => "SECOND",
        Minute => "MINUTE",
        Hour => "HOUR",
        Day => "DAY",
        Week => "WEEK",
        Month => "MONTH",
        Quarter => "QUARTER",
        Year => "YEAR",
    }
}

impl Keyword {
    /// Returns true if `s` is a reserved word.
    #[must_use]
    pub fn is_keyword(s: &str) -> bool {
        Self::from_str(s).is_some()
    }
}
