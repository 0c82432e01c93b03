use super::{DialectConfig, StringStyle};

/// Couchbase N1QL. `$name` and `$1` are both named placeholders; a numeric
/// name indexes into positional params.
pub static N1QL: DialectConfig = DialectConfig {
    reserved_words: RESERVED_WORDS,
    reserved_toplevel_words: RESERVED_TOPLEVEL_WORDS,
    reserved_newline_words: RESERVED_NEWLINE_WORDS,
    string_styles: &[
        StringStyle::DoubleQuote,
        StringStyle::SingleQuote,
        StringStyle::Backtick,
    ],
    open_parens: &["(", "[", "{"],
    close_parens: &[")", "]", "}"],
    indexed_placeholders: &[],
    named_placeholders: &['$'],
    line_comments: &["#", "--"],
    special_word_chars: &[],
};

#[rustfmt::skip]
const RESERVED_WORDS: &[&str] = &[
    "ALL", "ALTER", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "BEGIN", "BETWEEN",
    "BINARY", "BOOLEAN", "BREAK", "BUCKET", "BUILD", "BY", "CALL", "CASE", "CAST", "CLUSTER",
    "COLLATE", "COLLECTION", "COMMIT", "CONNECT", "CONTINUE", "CORRELATE", "COVER", "CREATE",
    "DATABASE", "DATASET", "DATASTORE", "DECLARE", "DECREMENT", "DELETE", "DERIVED", "DESC",
    "DESCRIBE", "DISTINCT", "DO", "DROP", "EACH", "ELEMENT", "ELSE", "END", "EVERY", "EXCEPT",
    "EXCLUDE", "EXECUTE", "EXISTS", "EXPLAIN", "FALSE", "FETCH", "FIRST", "FLATTEN", "FOR",
    "FORCE", "FROM", "FUNCTION", "GRANT", "GROUP", "GSI", "HAVING", "IF", "IGNORE", "ILIKE",
    "IN", "INCLUDE", "INCREMENT", "INDEX", "INFER", "INLINE", "INNER", "INSERT", "INTERSECT",
    "INTO", "IS", "JOIN", "KEY", "KEYS", "KEYSPACE", "KNOWN", "LAST", "LEFT", "LET",
    "LETTING", "LIKE", "LIMIT", "LSM", "MAP", "MAPPING", "MATCHED", "MATERIALIZED", "MERGE",
    "MINUS", "MISSING", "NAMESPACE", "NEST", "NOT", "NULL", "NUMBER", "OBJECT", "OFFSET", "ON",
    "OPTION", "OR", "ORDER", "OUTER", "OVER", "PARSE", "PARTITION", "PASSWORD", "PATH", "POOL",
    "PREPARE", "PRIMARY", "PRIVATE", "PRIVILEGE", "PROCEDURE", "PUBLIC", "RAW", "REALM",
    "REDUCE", "RENAME", "RETURN", "RETURNING", "REVOKE", "RIGHT", "ROLE", "ROLLBACK",
    "SATISFIES", "SCHEMA", "SELECT", "SELF", "SEMI", "SET", "SHOW", "SOME", "START",
    "STATISTICS", "STRING", "SYSTEM", "THEN", "TO", "TRANSACTION", "TRIGGER", "TRUE",
    "TRUNCATE", "UNDER", "UNION", "UNIQUE", "UNKNOWN", "UNNEST", "UNSET", "UPDATE", "UPSERT",
    "USE", "USER", "USING", "VALIDATE", "VALUE", "VALUED", "VALUES", "VIA", "VIEW", "WHEN",
    "WHERE", "WHILE", "WITH", "WITHIN", "WORK", "XOR",
];

#[rustfmt::skip]
const RESERVED_TOPLEVEL_WORDS: &[&str] = &[
    "DELETE FROM", "EXCEPT ALL", "EXCEPT", "EXPLAIN DELETE FROM", "EXPLAIN UPDATE",
    "EXPLAIN UPSERT", "FROM", "GROUP BY", "HAVING", "INFER", "INSERT INTO", "INTERSECT ALL",
    "INTERSECT", "LET", "LIMIT", "MERGE", "NEST", "ORDER BY", "PREPARE", "SELECT",
    "SET CURRENT SCHEMA", "SET SCHEMA", "SET", "UNION ALL", "UNION", "UNNEST", "UPDATE",
    "UPSERT", "USE KEYS", "VALUES", "WHERE",
];

#[rustfmt::skip]
const RESERVED_NEWLINE_WORDS: &[&str] = &[
    "AND", "INNER JOIN", "JOIN", "LEFT JOIN", "LEFT OUTER JOIN", "OR", "OUTER JOIN",
    "RIGHT JOIN", "RIGHT OUTER JOIN", "XOR",
];
