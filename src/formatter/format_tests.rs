use crate::*;
use rstest::rstest;

fn fmt(sql: &str) -> String {
    format(sql, &FormatOptions::default())
}

fn fmt_in(language: Language, sql: &str) -> String {
    let options = FormatOptions {
        language,
        ..FormatOptions::default()
    };
    format(sql, &options)
}

#[rstest]
#[case::clauses(
    "SELECT * FROM t WHERE a = 1",
    "SELECT\n  *\nFROM\n  t\nWHERE\n  a = 1"
)]
#[case::short_call_stays_inline("SELECT COUNT(*) FROM t", "SELECT\n  COUNT(*)\nFROM\n  t")]
#[case::limit_comma_stays_on_line(
    "SELECT a, b, c FROM t LIMIT 10, 5",
    "SELECT\n  a,\n  b,\n  c\nFROM\n  t\nLIMIT\n  10, 5"
)]
#[case::limit_comma_after_call(
    "SELECT a FROM t LIMIT IFNULL(x, 0), 10",
    "SELECT\n  a\nFROM\n  t\nLIMIT\n  IFNULL(x, 0), 10"
)]
#[case::and_breaks_line(
    "SELECT a FROM t WHERE a = 1 AND b = 2",
    "SELECT\n  a\nFROM\n  t\nWHERE\n  a = 1\n  AND b = 2"
)]
#[case::subquery_opens_block(
    "SELECT * FROM (SELECT a FROM b) c",
    "SELECT\n  *\nFROM\n  (\n    SELECT\n      a\n    FROM\n      b\n  ) c"
)]
#[case::nested_inline_parens(
    "CREATE TABLE t (price DECIMAL(7, 2))",
    "CREATE TABLE t (price DECIMAL(7, 2))"
)]
#[case::case_expression(
    "SELECT CASE WHEN a = 1 THEN 'one' ELSE 'other' END FROM t",
    "SELECT\n  CASE\n    WHEN a = 1 THEN 'one'\n    ELSE 'other'\n  END\nFROM\n  t"
)]
#[case::join(
    "SELECT * FROM a LEFT JOIN b ON a.id = b.id",
    "SELECT\n  *\nFROM\n  a\n  LEFT JOIN b ON a.id = b.id"
)]
#[case::keyword_after_dot_is_a_word("SELECT t.from FROM t", "SELECT\n  t.from\nFROM\n  t")]
#[case::statements_split_on_semicolon("SELECT 1; SELECT 2", "SELECT\n  1;\nSELECT\n  2")]
#[case::phrase_whitespace_collapses(
    "SELECT a FROM t GROUP   BY a ORDER\nBY a",
    "SELECT\n  a\nFROM\n  t\nGROUP BY\n  a\nORDER BY\n  a"
)]
#[case::byte_order_mark_inside_phrase(
    "SELECT a FROM t GROUP\u{feff}BY a",
    "SELECT\n  a\nFROM\n  t\nGROUP BY\n  a"
)]
#[case::decomposed_identifier(
    "SELECT cafe\u{301} FROM t",
    "SELECT\n  cafe\u{301}\nFROM\n  t"
)]
#[case::line_comment_keeps_its_line(
    "SELECT a -- note\nFROM t",
    "SELECT\n  a -- note\nFROM\n  t"
)]
#[case::block_comment_gets_own_line(
    "SELECT /* c */ a FROM t",
    "SELECT\n  /* c */\n  a\nFROM\n  t"
)]
#[case::block_comment_is_reindented(
    "SELECT\n/* one\ntwo */ a",
    "SELECT\n  /* one\n  two */\n  a"
)]
#[case::unterminated_comment("/* never closes", "/* never closes")]
#[case::unbalanced_close_parens("SELECT a))", "SELECT\n  a\n)\n)")]
#[case::unclosed_open_paren("SELECT (a", "SELECT\n  (\n    a")]
#[case::empty_input("", "")]
#[case::whitespace_only(" \n\t ", "")]
fn formats_standard_sql(#[case] sql: &str, #[case] expected: &str) {
    common_init();
    assert_eq!(fmt(sql), expected);
}

#[test]
fn long_parenthesized_span_breaks_into_block() {
    let sql = "SELECT foo(aaaaaaaaaa, bbbbbbbbbb, cccccccccc, dddddddddd, eeeeeeeeee) FROM t";
    assert_eq!(
        fmt(sql),
        concat!(
            "SELECT\n  foo(\n    aaaaaaaaaa,\n    bbbbbbbbbb,\n    cccccccccc,\n",
            "    dddddddddd,\n    eeeeeeeeee\n  )\nFROM\n  t"
        )
    );

    let roomy = FormatOptions::default().with_inline_max_length(100);
    assert_eq!(
        format(sql, &roomy),
        "SELECT\n  foo(aaaaaaaaaa, bbbbbbbbbb, cccccccccc, dddddddddd, eeeeeeeeee)\nFROM\n  t"
    );
}

#[test]
fn uppercase_option() {
    let options = FormatOptions::default().with_uppercase(true);
    assert_eq!(
        format("select a from t where x in (1, 2)", &options),
        "SELECT\n  a\nFROM\n  t\nWHERE\n  x IN (1, 2)"
    );
    // non reserved words keep their case
    assert_eq!(format("select Foo from Bar", &options), "SELECT\n  Foo\nFROM\n  Bar");
}

#[test]
fn indent_option() {
    let options = FormatOptions::default().with_indent("\t");
    assert_eq!(format("SELECT a FROM t", &options), "SELECT\n\ta\nFROM\n\tt");
}

#[test]
fn positional_placeholders() {
    let sql = "SELECT * FROM t WHERE a = ? AND b = ?";
    let options =
        FormatOptions::default().with_params(ParamValues::positional(["1", "'x'"]));
    assert_eq!(
        format(sql, &options),
        "SELECT\n  *\nFROM\n  t\nWHERE\n  a = 1\n  AND b = 'x'"
    );
    assert_eq!(
        fmt(sql),
        "SELECT\n  *\nFROM\n  t\nWHERE\n  a = ?\n  AND b = ?"
    );
}

#[test]
fn named_placeholders() {
    let options = FormatOptions::default().with_params(ParamValues::named([("id", "42")]));
    assert_eq!(
        format("SELECT * FROM t WHERE id = :id", &options),
        "SELECT\n  *\nFROM\n  t\nWHERE\n  id = 42"
    );
}

#[test]
fn missing_named_value_renders_empty() {
    let options = FormatOptions::default().with_params(ParamValues::named(
        std::iter::empty::<(String, String)>(),
    ));
    assert_eq!(format("WHERE a = :missing", &options), "WHERE\n  a =");
}

#[test]
fn n1ql_dollar_placeholders_index_positional_values() {
    let options = FormatOptions {
        language: Language::N1ql,
        ..FormatOptions::default()
    }
    .with_params(ParamValues::positional(["x", "y"]));
    assert_eq!(
        format("SELECT * FROM `bucket` WHERE a = $1", &options),
        "SELECT\n  *\nFROM\n  `bucket`\nWHERE\n  a = y"
    );
}

#[test]
fn n1ql_array_literal_stays_inline() {
    assert_eq!(fmt_in(Language::N1ql, "SELECT [1, 2, 3]"), "SELECT\n  [1, 2, 3]");
}

#[test]
fn db2_special_word_chars_and_phrases() {
    assert_eq!(
        fmt_in(Language::Db2, "SELECT col# FROM t FETCH FIRST 5 ROWS ONLY"),
        "SELECT\n  col#\nFROM\n  t\nFETCH FIRST\n  5 ROWS ONLY"
    );
}

#[test]
fn plsql_qualified_names() {
    let expected = "SELECT\n  a.b\nFROM\n  t";
    assert_eq!(fmt_in(Language::PlSql, "SELECT a.b FROM t"), expected);
    assert_eq!(fmt_in(Language::Standard, "SELECT a.b FROM t"), expected);
    assert_eq!(
        fmt_in(Language::PlSql, "SELECT user$x FROM t"),
        "SELECT\n  user$x\nFROM\n  t"
    );
}

#[test]
fn dialects_agree_on_plain_expressions() {
    let outputs: Vec<_> = Language::ALL
        .iter()
        .map(|&language| fmt_in(language, "foo = bar + 1"))
        .collect();
    assert!(outputs.iter().all(|o| o == "foo = bar + 1"), "{outputs:?}");
}

#[test]
fn unknown_language_is_an_error() {
    let err = FormatOptions::default()
        .with_language("klingon")
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedDialect(ref name) if name == "klingon"));
}

#[test]
fn formatting_is_deterministic() {
    let sql = "select a, count(*) from t left join u on t.id = u.id group by a having count(*) > 1";
    let first = fmt(sql);
    assert_eq!(first, fmt(sql));
    let tokenizer = Tokenizer::new(Language::Standard.dialect());
    let options = FormatOptions::default();
    assert_eq!(first, Formatter::new(&tokenizer, &options).format(sql));
}

#[test]
fn formatting_keeps_every_non_whitespace_char() {
    let sql = "SELECT a,b FROM (SELECT x FROM y WHERE z IN (1,2,3)) q -- tail\nORDER BY a";
    let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(squash(&fmt(sql)), squash(sql));
}
